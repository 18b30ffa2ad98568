use actor_framework::tracing::setup_tracing;
use clap::Parser;
use product_catalog::cli;
use product_catalog::config::CliArgs;
use product_catalog::lifecycle::ProductStore;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let (config, command) = CliArgs::parse().into_parts();
    let store = ProductStore::from_config(&config);

    let mut stdout = std::io::stdout().lock();
    let result = cli::run(&store, command, &mut stdout).await;
    stdout.flush()?;

    // Wait for the last snapshot write even when the command failed.
    store.shutdown().await?;
    result
}
