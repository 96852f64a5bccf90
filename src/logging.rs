use std::io::stderr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::Args;
use crate::config::{Config, get_log_dir_path};
use crate::error::AppError;

/// Sets up logging for the application.
///
/// Logs always go to a daily-rolling file; with --debug they are echoed
/// to stderr as well so session output on stdout stays clean. A custom
/// log path can come from the CLI or the config file, CLI winning.
///
/// Returns the log directory and the guard that must be kept alive for
/// the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = Config::load().await.ok().and_then(|c| c.log_file_path);
    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());

    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("sleeper_scout.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (
            get_log_dir_path().to_string_lossy().to_string(),
            "sleeper_scout.log".to_string(),
        ),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::from_default_env()
        .add_directive("sleeper_scout=info".parse().map_err(|e| {
            AppError::log_setup_error(format!("Invalid log directive: {e}"))
        })?);

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter),
    );

    if args.debug {
        let stderr_filter = EnvFilter::from_default_env()
            .add_directive("sleeper_scout=debug".parse().map_err(|e| {
                AppError::log_setup_error(format!("Invalid log directive: {e}"))
            })?);
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(stderr_filter),
            )
            .init();
    } else {
        registry.init();
    }

    Ok((log_dir, guard))
}
