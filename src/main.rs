use clap::Parser;

use quill_rs::cli::{self, Cli};
use quill_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone()).await?;

    if cli::wants_server(&cli) {
        Server::new(settings).run().await?;
    }

    Ok(())
}
