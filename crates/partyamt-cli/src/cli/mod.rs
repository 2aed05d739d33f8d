//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use partyamt_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "partyamt")]
#[command(version)]
#[command(about = "Browse upcoming parties and filter them by tag")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// GraphQL endpoint (overrides PARTYAMT_ENDPOINT and the config file)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print upcoming events as plain text
    Events {
        /// Only show events carrying this tag (repeatable, any match)
        #[arg(long = "tag", value_name = "NAME")]
        tags: Vec<String>,
    },
    /// Print the tag catalog in display order
    Tags,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, endpoint } = cli;

    match command {
        // default to the dashboard
        None => {
            let (config, endpoint) = load(endpoint.as_deref())?;
            commands::dashboard::run(&config, endpoint)
        }
        Some(Commands::Events { tags }) => {
            let (config, endpoint) = load(endpoint.as_deref())?;
            commands::events::run(&config, &endpoint, &tags).await
        }
        Some(Commands::Tags) => {
            let (_, endpoint) = load(endpoint.as_deref())?;
            commands::tags::run(&endpoint).await
        }
        // Config commands must work even when the existing file is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load(endpoint_flag: Option<&str>) -> Result<(config::Config, String)> {
    let config = config::Config::load().context("load config")?;
    let endpoint = config.resolve_endpoint(endpoint_flag)?;
    Ok((config, endpoint))
}
