use tracing::info;

use crate::api::ScoutClient;
use crate::cli::{Args, default_season, is_config_mode};
use crate::config::Config;
use crate::display;
use crate::error::AppError;
use crate::session::Session;

/// Handles configuration management flags (--set-api-url, --set-log-file,
/// --clear-log-file, --list-config).
///
/// Returns `true` when a config command was handled and the session flow
/// should be skipped.
pub async fn handle_config_commands(args: &Args) -> Result<bool, AppError> {
    if !is_config_mode(args) {
        return Ok(false);
    }

    let mut config = Config::load().await?;

    if let Some(api_url) = &args.new_api_url {
        let trimmed = api_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::config_error("API base URL must not be empty"));
        }
        config.api_base_url = trimmed.trim_end_matches('/').to_string();
        config.save().await?;
        println!("API base URL updated to {}", config.api_base_url);
    }

    if let Some(log_path) = &args.new_log_file_path {
        config.log_file_path = Some(log_path.clone());
        config.save().await?;
        println!("Log file path updated to {log_path}");
    }

    if args.clear_log_file_path {
        config.log_file_path = None;
        config.save().await?;
        println!("Log file path cleared; using the default location");
    }

    if args.list_config {
        println!("{}", config.display());
    }

    Ok(true)
}

/// Runs the one-shot session flow: resolve the identifier, enumerate
/// leagues for the season, optionally open one league, and print the
/// result. Stage failures are printed as part of the session output; only
/// local setup problems surface as process errors.
pub async fn run_session(args: &Args, config: Config) -> Result<(), AppError> {
    let Some(identifier) = args.user.as_deref() else {
        return Err(AppError::validation(
            "Please pass --user with a Sleeper username or user ID.",
        ));
    };

    let season = args.season.unwrap_or_else(default_season);
    info!("Starting session for season {season}");

    let client = ScoutClient::new(&config)?;
    let mut session = Session::new(client, season);

    session.submit_identifier(identifier).await;

    if session.identity().is_some()
        && let Some(league_id) = args.league.as_deref()
    {
        session.select_league(Some(league_id)).await;
    }

    display::print_session(&session);
    Ok(())
}
