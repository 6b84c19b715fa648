mod cli;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use huffpack::config::HuffpackConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = HuffpackConfig::load(cli.config.as_deref())?;

    // Override config with CLI args if provided
    if let Some(step) = cli.progress_step {
        config.progress_step = step;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Using config: {:?}", config);

    if let Err(e) = cli::run(cli, config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
