//! Orderings for the text columns whose natural order is not lexicographic.

use core::cmp::Ordering;
use core::time::Duration;

const SECOND: Duration = Duration::from_secs(1);
const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);
const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);
const MONTH: Duration = Duration::from_secs(31 * 24 * 60 * 60);
const YEAR: Duration = Duration::from_secs(366 * 24 * 60 * 60);

/// Compare two dotted versions segment by segment as integers.
///
/// Each segment is the number formed by its leading digits, or 0 when it has none.
/// Comparison stops with `Equal` as soon as either side runs out of segments after
/// an equal pair, so `1.0` equals both `1.0.0` and `1.0.1`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    a.split('.')
        .map(segment_value)
        .zip(b.split('.').map(segment_value))
        .map(|(l, r)| l.cmp(&r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn segment_value(segment: &str) -> u64 {
    let digits = segment.len() - segment.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    segment.get(..digits).and_then(|d| d.parse().ok()).unwrap_or(0)
}

/// How long ago a phrase such as `a month ago` or `3 days ago` points to.
///
/// Units are fixed sizes (a month is 31 days, a year 366 days). Returns `None` for
/// phrases of any other shape.
pub fn published_age(phrase: &str) -> Option<Duration> {
    let mut words = phrase.split_whitespace();
    let quantity = match words.next()? {
        "a" | "an" => 1,
        n => n.parse::<u32>().ok()?,
    };

    let unit = words.next()?;
    let unit = unit.strip_suffix('s').unwrap_or(unit);
    let size = match unit {
        "second" => SECOND,
        "minute" => MINUTE,
        "hour" => HOUR,
        "day" => DAY,
        "week" => WEEK,
        "month" => MONTH,
        "year" => YEAR,
        _ => return None,
    };

    size.checked_mul(quantity)
}

/// Compare two publish phrases by age; phrases that cannot be understood sort last.
pub fn compare_published(a: &str, b: &str) -> Ordering {
    match (published_age(a), published_age(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions_numeric_segments() {
        assert_eq!(compare_versions("1.2.3", "1.2.10"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("10.0.0", "9.99.99"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_equal() {
        assert_eq!(compare_versions("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_trailing_zero() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0", "1.0"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_stops_at_shorter_side() {
        assert_eq!(compare_versions("1.0.1", "1.0"), Ordering::Equal);
        assert_eq!(compare_versions("1", "1.5"), Ordering::Equal);
        assert_eq!(compare_versions("1.1", "1.0.9"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_prerelease_segments() {
        assert_eq!(compare_versions("1.0.0-beta.2", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.3-rc", "1.0.2"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_non_numeric_segment_is_zero() {
        assert_eq!(compare_versions("x.1", "0.1"), Ordering::Equal);
        assert_eq!(compare_versions("", "0"), Ordering::Equal);
    }

    #[test]
    fn test_segment_value() {
        assert_eq!(segment_value("42"), 42);
        assert_eq!(segment_value("3-beta"), 3);
        assert_eq!(segment_value("beta"), 0);
        assert_eq!(segment_value(""), 0);
    }

    #[test]
    fn test_published_age_article() {
        assert_eq!(published_age("a day ago"), Some(DAY));
        assert_eq!(published_age("an hour ago"), Some(HOUR));
    }

    #[test]
    fn test_published_age_plural() {
        assert_eq!(published_age("2 days ago"), Some(DAY * 2));
        assert_eq!(published_age("3 weeks ago"), Some(WEEK * 3));
        assert_eq!(published_age("5 years ago"), Some(YEAR * 5));
        assert_eq!(published_age("30 seconds ago"), Some(SECOND * 30));
        assert_eq!(published_age("10 minutes ago"), Some(MINUTE * 10));
    }

    #[test]
    fn test_published_age_month_is_31_days() {
        assert_eq!(published_age("a month ago"), Some(Duration::from_secs(31 * 86_400)));
    }

    #[test]
    fn test_published_age_unknown_shape() {
        assert_eq!(published_age(""), None);
        assert_eq!(published_age("yesterday"), None);
        assert_eq!(published_age("some days ago"), None);
        assert_eq!(published_age("3 fortnights ago"), None);
    }

    #[test]
    fn test_compare_published() {
        assert_eq!(compare_published("a day ago", "2 days ago"), Ordering::Less);
        assert_eq!(compare_published("a month ago", "a year ago"), Ordering::Less);
        assert_eq!(compare_published("3 weeks ago", "3 weeks ago"), Ordering::Equal);
        assert_eq!(compare_published("a month ago", "4 weeks ago"), Ordering::Greater);
    }

    #[test]
    fn test_compare_published_unknown_sorts_last() {
        assert_eq!(compare_published("", "a year ago"), Ordering::Greater);
        assert_eq!(compare_published("a year ago", "whenever"), Ordering::Less);
        assert_eq!(compare_published("whenever", "never"), Ordering::Equal);
    }
}
