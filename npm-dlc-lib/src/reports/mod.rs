//! Sorting and console rendering of download reports
//!
//! A report covers the packages of a single user. Each package becomes a
//! [`ReportRow`], rows are optionally ordered by one [`Column`], and the console
//! generator renders them as a text table whose columns are as wide as their
//! widest cell or header.
//!
//! Every column carries its own ordering: names compare as text, versions segment by
//! segment as integers, publish phrases such as `3 weeks ago` by the age they
//! describe, and download counts numerically.

mod column;
mod console;
mod ordering;
mod report_row;

pub use column::{Alignment, Column, sort_rows};
pub use console::{column_widths, generate as generate_console, separator_row};
pub use ordering::{compare_published, compare_versions, published_age};
pub use report_row::ReportRow;
