use super::Host;
use super::common::{CommonArgs, init_logging};
use super::config::Config;
use crate::Result;
use crate::facts::{Collector, PackageFacts};
use crate::reports::{Column, ReportRow, generate_console, sort_rows};
use chrono::Local;
use clap::Args;
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::io::Write;

const LOG_TARGET: &str = "    report";

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// npm users whose packages are reported
    #[arg(value_name = "USERNAME")]
    pub usernames: Vec<String>,

    /// Sort by the column
    #[arg(short = 's', long, value_name = "COLUMN", ignore_case = true)]
    pub sort: Option<Column>,

    /// Sort in descending order
    #[arg(short = 'd', long)]
    pub desc: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy)]
enum Severity {
    Warning,
    Error,
}

/// Report the download counts of every distinct user, one table per user.
///
/// Users are handled one after the other. A repeated username is skipped with a
/// warning, a user without packages gets a warning instead of a table, and a user
/// whose packages cannot be discovered gets an error message; none of these stop
/// the remaining users from being processed.
pub async fn process_users<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let config = Config::from_args(&args.common);
    let collector = Collector::new(Some(&config.registry_url), Some(&config.stats_url), config.timeout)?;

    let mut done: HashSet<&str> = HashSet::new();
    for user in &args.usernames {
        if !done.insert(user.as_str()) {
            diagnostic(host, config.color_errors, Severity::Warning, &format!("Skip {user} ..."));
            continue;
        }

        match collector.collect(user).await {
            Ok(Some(facts)) => {
                let profile_url = collector.profile_url(user);
                report_user(host, &config, user, &profile_url, facts, args.sort, args.desc)?;
            }
            Ok(None) => {
                diagnostic(host, config.color_errors, Severity::Warning, &format!("No data for {user}"));
            }
            Err(e) => {
                diagnostic(host, config.color_errors, Severity::Error, &format!("{e:#}"));
                log::debug!(target: LOG_TARGET, "Could not collect the packages of {user}: {e:?}");
            }
        }
    }

    Ok(())
}

fn report_user<H: Host>(
    host: &mut H,
    config: &Config,
    user: &str,
    profile_url: &str,
    facts: Vec<PackageFacts>,
    sort: Option<Column>,
    descending: bool,
) -> Result<()> {
    for package_facts in &facts {
        for failure in &package_facts.failed_windows {
            diagnostic(
                host,
                config.color_errors,
                Severity::Warning,
                &format!(
                    "Could not fetch {} downloads of {}, counted as 0: {:#}",
                    failure.window, package_facts.package.name, failure.error
                ),
            );
        }
    }

    let mut rows: Vec<ReportRow> = facts.into_iter().map(ReportRow::from).collect();
    sort_rows(&mut rows, sort, descending);

    // Render the whole block first so each user's table reaches the output in one piece
    let mut console_output = String::new();
    generate_console(user, profile_url, &rows, Local::now(), config.color_output, &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    Ok(())
}

fn diagnostic<H: Host>(host: &mut H, use_colors: bool, severity: Severity, message: &str) {
    let label = match severity {
        Severity::Warning => "Warning:",
        Severity::Error => "Error:",
    };

    let label = if use_colors {
        match severity {
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Error => label.red().bold().to_string(),
        }
    } else {
        label.to_string()
    };

    let _ = writeln!(host.error(), "{label} {message}");
}
