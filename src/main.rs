use crate::cli::{Cli, Command};
use crate::search::PropertySearchTool;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod errors;
mod search;


fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => {
            let criteria = args.to_criteria()?;
            let tool = PropertySearchTool::new(args.search_config()?);
            println!("{}", tool.search(&criteria));
        }
        Command::Schema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&PropertySearchTool::descriptor())?
            );
        }
    }

    Ok(())
}
