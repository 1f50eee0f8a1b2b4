use super::{DownloadCounts, PackageInfo, WindowFailure};

/// Everything collected about one package of a user
#[derive(Debug)]
pub struct PackageFacts {
    pub package: PackageInfo,
    pub downloads: DownloadCounts,

    /// Windows whose count defaulted to zero because the request failed
    pub failed_windows: Vec<WindowFailure>,
}
