use strum::{Display, EnumIter, IntoStaticStr};

/// A fixed time range for which the download-counts API reports a point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DownloadWindow {
    LastDay,
    LastWeek,
    LastMonth,
}

impl DownloadWindow {
    /// The path segment naming this window in the API
    #[must_use]
    pub fn as_path(self) -> &'static str {
        self.into()
    }
}
