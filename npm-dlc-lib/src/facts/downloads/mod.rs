mod download_counts;
mod download_window;
mod provider;

pub use download_counts::DownloadCounts;
pub use download_window::DownloadWindow;
pub use provider::{DEFAULT_STATS_BASE_URL, DownloadLookup, Provider, WindowFailure, downloads_from_body, encode_package_name};
