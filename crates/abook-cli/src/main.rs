use clap::Parser;

use abook_server::{ApiServer, ServerConfig};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = cli::Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    tracing::info!("starting address-book API server");
    ApiServer::with_in_memory_store(config).serve().await?;
    Ok(())
}
