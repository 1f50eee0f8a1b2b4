//! Command dispatch logic for npm-dlc

use super::{ReportArgs, process_users};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::error::ErrorKind;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Exit code of every run that ends without printing reports, help and version included
const EXIT_USAGE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "npm-dlc", author, long_about = None, disable_version_flag = true)]
#[command(about = "Report download count of all npm packages owned by the users")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long)]
    version: bool,

    #[command(flatten)]
    report: ReportArgs,
}

/// Parse command-line arguments and report on the requested users
///
/// Help, version, and usage errors are written to the host and end the run with exit
/// code 1 before anything is fetched. Otherwise every user is reported and the
/// function returns normally, even when some users could not be processed.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created or a report cannot be rendered
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = write!(host.output(), "{}", e.render());
            host.exit(EXIT_USAGE);
            return Ok(());
        }
        Err(e) => {
            let _ = write!(host.error(), "{}", e.render());
            host.exit(EXIT_USAGE);
            return Ok(());
        }
    };

    if cli.version {
        let _ = writeln!(host.error(), "{}", env!("CARGO_PKG_VERSION"));
        host.exit(EXIT_USAGE);
        return Ok(());
    }

    if cli.report.usernames.is_empty() {
        let _ = writeln!(host.error(), "Error: no user name specified");
        let _ = writeln!(host.error(), "Usage: npm-dlc <USERNAME>... [OPTIONS]");
        host.exit(EXIT_USAGE);
        return Ok(());
    }

    process_users(host, &cli.report).await
}
