mod package_info;
mod provider;

pub use package_info::PackageInfo;
pub use provider::{DEFAULT_REGISTRY_BASE_URL, Provider, parse_profile_page};
