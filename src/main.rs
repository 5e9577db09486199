use anyhow::Context;
use clap::Parser;
use coinboard::assets::HttpAssetSource;
use coinboard::config::{Config, ConfigOverrides};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "coinboard", version, about = "Terminal price board for crypto assets")]
struct Cli {
    /// Assets endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Rows per page (overrides config)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Config file path [default: ~/.config/coinboard/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file path (overrides config)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config_path, loaded) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from(path)?),
        None => (Config::config_path(), Config::load()?),
    };
    let config = loaded.apply_overrides(ConfigOverrides {
        endpoint: cli.endpoint,
        page_size: cli.page_size,
    })?;

    let log_path = coinboard::logging::init_logging(&config.logging, cli.log_file.as_deref());
    tracing::info!(
        config = %config_path.display(),
        endpoint = %config.api.endpoint,
        page_size = config.view.page_size,
        log_file = ?log_path,
        "Starting coinboard"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("coinboard-fetch")
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let source = HttpAssetSource::new(&config.api).context("Failed to build HTTP client")?;

    coinboard::ui::run(Arc::new(source), runtime.handle().clone(), &config.view)
        .context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Exited cleanly");
    Ok(())
}
