use clap::Parser;

use sleeper_scout::cli::Args;
use sleeper_scout::commands::{handle_config_commands, run_session};
use sleeper_scout::config::Config;
use sleeper_scout::error::AppError;
use sleeper_scout::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (_log_dir, _guard) = setup_logging(&args).await?;

    if handle_config_commands(&args).await? {
        return Ok(());
    }

    let config = Config::load().await?;
    run_session(&args, config).await
}
