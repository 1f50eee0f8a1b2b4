//! Command-line interface and orchestration for npm-dlc
//!
//! This module parses the command line and drives the per-user workflow:
//!
//! 1. Parse arguments and resolve the configuration
//! 2. For each distinct username, collect the user's packages and their download
//!    counts
//! 3. Order the rows as requested and print the user's table
//!
//! A failure while handling one user is reported on the error stream and the next
//! user is processed; only usage errors stop the run early.
//!
//! The `common` module holds the options shared by every invocation (colors, logging
//! and service endpoints) and the logging setup.

mod common;
mod config;
mod host;
mod report;
mod run;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use config::Config;
pub use host::Host;
pub use report::{ReportArgs, process_users};
pub use run::run;
