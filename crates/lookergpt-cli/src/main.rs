//! LookerGPT CLI - ask for a reporting URL from the terminal

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::LookerGptClient;
use config::Config;

#[derive(Parser)]
#[command(name = "lookergpt")]
#[command(about = "LookerGPT CLI - natural-language questions to Looker URLs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question and print the generated URL
    Ask {
        /// Question (will prompt if not provided)
        query: Option<String>,
        /// Print only the extracted URL
        #[arg(short, long)]
        url_only: bool,
    },

    /// Set the LookerGPT server URL
    Server {
        /// Base URL, e.g. http://localhost:3000
        url: String,
    },

    /// Check that the server is reachable
    Health,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { query, url_only } => cmd_ask(query, url_only).await,
        Commands::Server { url } => cmd_server(url),
        Commands::Health => cmd_health().await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_ask(query: Option<String>, url_only: bool) -> Result<()> {
    let config = Config::load()?;

    let query = match query {
        Some(q) => q,
        None => Input::<String>::new()
            .with_prompt("What are you looking for?")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    let client = LookerGptClient::new(&config.base_url);
    let reply = client.ask(&query).await?;
    let url = lookergpt::extract_report_url(&reply);

    if url_only {
        if let Some(url) = url {
            println!("{}", url);
        }
        return Ok(());
    }

    println!("{}", "Reply:".bold());
    println!("  {}", reply);

    match url {
        Some(url) => println!("{} {}", "URL:".bold(), url.cyan()),
        None => println!("{}", "No URL found in reply".dimmed()),
    }

    Ok(())
}

fn cmd_server(url: String) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("Server URL must start with http:// or https://");
    }

    let mut config = Config::load()?;
    config.set_base_url(&url);
    config.save()?;

    println!("{} Server set to {}", "✓".green(), config.base_url);
    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = LookerGptClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach LookerGPT server at {}", config.base_url);
        }
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Server URL: {}", config.base_url);

    Ok(())
}
