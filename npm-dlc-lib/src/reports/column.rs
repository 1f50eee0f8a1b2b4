use super::ReportRow;
use super::ordering::{compare_published, compare_versions};
use clap::ValueEnum;
use core::cmp::Ordering;
use strum::{Display, EnumIter, IntoStaticStr};

/// The columns of a report, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr, ValueEnum)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Column {
    /// Package name
    #[value(name = "NAME")]
    Name,

    /// Latest published version
    #[value(name = "VERSION")]
    Version,

    /// How long ago the latest version was published
    #[value(name = "PUBLISHED")]
    Published,

    /// Downloads over the last day
    #[value(name = "DAILY")]
    Daily,

    /// Downloads over the last week
    #[value(name = "WEEKLY")]
    Weekly,

    /// Downloads over the last month
    #[value(name = "MONTHLY")]
    Monthly,
}

/// How the cells of a column are padded to the column width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Column {
    /// Header label, also the name accepted by `--sort`
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::Name | Self::Version | Self::Published => Alignment::Left,
            Self::Daily | Self::Weekly | Self::Monthly => Alignment::Right,
        }
    }

    /// Ascending order of two rows by this column
    #[must_use]
    pub fn compare(self, a: &ReportRow, b: &ReportRow) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Version => compare_versions(&a.version, &b.version),
            Self::Published => compare_published(&a.published, &b.published),
            Self::Daily => a.daily.cmp(&b.daily),
            Self::Weekly => a.weekly.cmp(&b.weekly),
            Self::Monthly => a.monthly.cmp(&b.monthly),
        }
    }
}

/// Order rows for display.
///
/// Rows are stably sorted ascending by `column` when one is given, then reversed when
/// `descending` is set. Without a column, `descending` reverses the listing order.
pub fn sort_rows(rows: &mut [ReportRow], column: Option<Column>, descending: bool) {
    if let Some(column) = column {
        rows.sort_by(|a, b| column.compare(a, b));
    }

    if descending {
        rows.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn row(name: &str, version: &str, published: &str, daily: u64, weekly: u64, monthly: u64) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            version: version.to_string(),
            published: published.to_string(),
            daily,
            weekly,
            monthly,
        }
    }

    fn dataset() -> Vec<ReportRow> {
        vec![
            row("mango", "1.2.10", "2 days ago", 5, 50, 500),
            row("apple", "1.2.3", "a year ago", 9, 20, 900),
            row("cherry", "2.0.0", "a day ago", 0, 90, 100),
            row("banana", "0.9.1", "3 weeks ago", 5, 10, 200),
        ]
    }

    fn names(rows: &[ReportRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_labels_in_display_order() {
        let labels: Vec<_> = Column::iter().map(Column::label).collect();
        assert_eq!(labels, ["NAME", "VERSION", "PUBLISHED", "DAILY", "WEEKLY", "MONTHLY"]);
    }

    #[test]
    fn test_value_enum_names_match_labels() {
        for column in Column::iter() {
            let value = column.to_possible_value().unwrap();
            assert_eq!(value.get_name(), column.label());
        }
    }

    #[test]
    fn test_value_enum_parse() {
        assert_eq!(Column::from_str("WEEKLY", false), Ok(Column::Weekly));
        assert_eq!(Column::from_str("weekly", true), Ok(Column::Weekly));
        let _ = Column::from_str("BOGUS", true).unwrap_err();
    }

    #[test]
    fn test_alignment() {
        assert_eq!(Column::Name.alignment(), Alignment::Left);
        assert_eq!(Column::Published.alignment(), Alignment::Left);
        assert_eq!(Column::Monthly.alignment(), Alignment::Right);
    }

    #[test]
    fn test_sort_by_name() {
        let mut rows = dataset();
        sort_rows(&mut rows, Some(Column::Name), false);
        assert_eq!(names(&rows), ["apple", "banana", "cherry", "mango"]);
    }

    #[test]
    fn test_sort_by_version() {
        let mut rows = dataset();
        sort_rows(&mut rows, Some(Column::Version), false);
        assert_eq!(names(&rows), ["banana", "apple", "mango", "cherry"]);
    }

    #[test]
    fn test_sort_by_published() {
        let mut rows = dataset();
        sort_rows(&mut rows, Some(Column::Published), false);
        assert_eq!(names(&rows), ["cherry", "mango", "banana", "apple"]);
    }

    #[test]
    fn test_sort_by_daily_is_stable() {
        let mut rows = dataset();
        sort_rows(&mut rows, Some(Column::Daily), false);
        assert_eq!(names(&rows), ["cherry", "mango", "banana", "apple"]);
    }

    #[test]
    fn test_sort_by_weekly_and_monthly() {
        let mut rows = dataset();
        sort_rows(&mut rows, Some(Column::Weekly), false);
        assert_eq!(names(&rows), ["banana", "apple", "mango", "cherry"]);

        sort_rows(&mut rows, Some(Column::Monthly), false);
        assert_eq!(names(&rows), ["cherry", "banana", "mango", "apple"]);
    }

    #[test]
    fn test_descending_is_reversed_ascending() {
        for column in Column::iter() {
            let mut ascending = dataset();
            sort_rows(&mut ascending, Some(column), false);
            ascending.reverse();

            let mut descending = dataset();
            sort_rows(&mut descending, Some(column), true);

            assert_eq!(ascending, descending, "column {column}");
        }
    }

    #[test]
    fn test_descending_without_column_reverses_listing() {
        let mut rows = dataset();
        sort_rows(&mut rows, None, true);
        assert_eq!(names(&rows), ["banana", "cherry", "apple", "mango"]);
    }

    #[test]
    fn test_no_sort_keeps_listing() {
        let mut rows = dataset();
        sort_rows(&mut rows, None, false);
        assert_eq!(names(&rows), ["mango", "apple", "cherry", "banana"]);
    }
}
