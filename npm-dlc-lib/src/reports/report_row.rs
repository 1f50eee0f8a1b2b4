use super::Column;
use crate::facts::PackageFacts;
use std::borrow::Cow;

/// One package of a user, flattened for display in a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub version: String,
    pub published: String,
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

impl ReportRow {
    /// The text shown for this row in a column
    #[must_use]
    pub fn cell(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Name => Cow::Borrowed(&self.name),
            Column::Version => Cow::Borrowed(&self.version),
            Column::Published => Cow::Borrowed(&self.published),
            Column::Daily => Cow::Owned(self.daily.to_string()),
            Column::Weekly => Cow::Owned(self.weekly.to_string()),
            Column::Monthly => Cow::Owned(self.monthly.to_string()),
        }
    }
}

impl From<PackageFacts> for ReportRow {
    fn from(facts: PackageFacts) -> Self {
        Self {
            name: facts.package.name,
            version: facts.package.version,
            published: facts.package.published,
            daily: facts.downloads.daily,
            weekly: facts.downloads.weekly,
            monthly: facts.downloads.monthly,
        }
    }
}
