use clap::Parser;
use reibun_i18n::JsonCatalog;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod prompt;
mod session;


use self::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Prompts own stdout, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = reibun_config::Config::load_or_default(cli.config.as_deref())?;
    let catalog = JsonCatalog::for_locale(&config.ui.locale);

    match cli.command {
        Commands::Search(args) => commands::search::handle_search(&config, &catalog, args).await,
        Commands::Insert(args) => commands::insert::handle_insert(&config, &catalog, args).await,
    }
}
