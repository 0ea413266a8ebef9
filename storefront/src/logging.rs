use anyhow::Context;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// Target for events that should also land in the rolling submissions log
pub const LOG_FILE_TARGET: &str = "save_to_log_file";

pub fn setup_logging(log_dir: &str) -> Result<(), anyhow::Error> {
    fs::create_dir_all(log_dir).context("Failed to create logs directory")?;

    let file_layer = fmt::layer()
        .with_writer(rolling::daily(log_dir, "gadget-haven-storefront.log"))
        .with_ansi(false)
        .with_filter(Targets::new().with_target(LOG_FILE_TARGET, LevelFilter::TRACE));

    let stdout_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(stdout_filter);

    tracing::subscriber::set_global_default(Registry::default().with(stdout_layer).with(file_layer))
        .context("Failed to set global default subscriber")?;

    Ok(())
}
