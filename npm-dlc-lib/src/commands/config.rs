use super::common::CommonArgs;
use core::time::Duration;
use std::io::{IsTerminal, stderr, stdout};

/// Settings of one run, resolved from the command line and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub registry_url: String,
    pub stats_url: String,
    pub timeout: Duration,

    /// Whether the report tables are colored
    pub color_output: bool,

    /// Whether warnings and errors are colored
    pub color_errors: bool,
}

impl Config {
    #[must_use]
    pub fn from_args(args: &CommonArgs) -> Self {
        Self {
            registry_url: args.registry_url.clone(),
            stats_url: args.stats_url.clone(),
            timeout: Duration::from_secs(args.timeout),
            color_output: args.color.use_colors(stdout().is_terminal()),
            color_errors: args.color.use_colors(stderr().is_terminal()),
        }
    }
}
