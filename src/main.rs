use anyhow::Context;
use charinfo::cli::{Cli, Command};
use charinfo::config::Config;
use charinfo::logging;
use charinfo::marvel::{CharacterService, MarvelClient};
use clap::Parser;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = MarvelClient::new(&config.api).context("Failed to build HTTP client")?;

    match cli.command {
        Some(Command::Fetch { id }) => {
            logging::init_tracing();
            let record = runtime
                .block_on(client.fetch_by_id(id))
                .with_context(|| format!("Failed to fetch character {}", id))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        None => {
            let log_path = logging::default_log_path();
            logging::init_file_tracing(&log_path)
                .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

            let service: Arc<dyn CharacterService> = Arc::new(client);
            charinfo::ui::run(&config, service, runtime.handle().clone(), cli.id)
                .context("Terminal UI failed")?;
        }
    }

    Ok(())
}
