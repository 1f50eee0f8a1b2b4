//! Options shared by every invocation and the logging setup.

use crate::facts::downloads::DEFAULT_STATS_BASE_URL;
use crate::facts::registry::DEFAULT_REGISTRY_BASE_URL;
use clap::Args;
use clap::ValueEnum;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Decide whether to emit colors, given whether the stream is a terminal.
    #[must_use]
    pub const fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options that configure the services and the output of every run
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Base URL of the npm website hosting user profile pages
    #[arg(long, value_name = "URL", env = "NPM_DLC_REGISTRY_URL", default_value = DEFAULT_REGISTRY_BASE_URL)]
    pub registry_url: String,

    /// Base URL of the npm download-counts point API
    #[arg(long, value_name = "URL", env = "NPM_DLC_STATS_URL", default_value = DEFAULT_STATS_BASE_URL)]
    pub stats_url: String,

    /// Timeout of each HTTP request, in seconds
    #[arg(long, value_name = "SECONDS", env = "NPM_DLC_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Initialize logger based on log level
///
/// `RUST_LOG` takes precedence over the requested level when it is set.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when running several times in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
