use chrono::{Datelike, Local};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::constants;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines whether the invocation only manages configuration and
/// should skip the session flow entirely.
pub fn is_config_mode(args: &Args) -> bool {
    args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Default season for league enumeration. January and February still
/// belong to the previous NFL season.
pub fn default_season() -> i32 {
    let now = Local::now();
    if now.month() < constants::season::ROLLOVER_MONTH {
        now.year() - 1
    } else {
        now.year()
    }
}

/// Sleeper League Scout
///
/// Resolves a Sleeper username or user ID, lists that user's league
/// memberships for a season, and shows a selected league's detail with a
/// curated view of its scoring settings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Sleeper username or numeric user ID to resolve.
    #[arg(short = 'u', long = "user", value_name = "IDENTIFIER")]
    pub user: Option<String>,

    /// Season year to enumerate leagues for (default: current NFL season).
    #[arg(short = 's', long = "season", value_name = "YEAR")]
    pub season: Option<i32>,

    /// League ID to open once leagues are listed. Shows full detail,
    /// curated scoring settings, and standings.
    #[arg(long = "league", value_name = "LEAGUE_ID")]
    pub league: Option<String>,

    /// Update the backend API base URL in config.
    #[arg(
        long = "set-api-url",
        help_heading = "Configuration",
        value_name = "API_URL"
    )]
    pub new_api_url: Option<String>,

    /// Update the log file path in config.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are echoed to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this invocation only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
