use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::{
    SearchOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_options,
    cmd_search, cmd_seed,
};
use crate::config::VALID_CONFIG_KEYS;

#[derive(Parser)]
#[command(name = "sightsee")]
#[command(about = "Browse a curated catalog of tourist attractions")]
#[command(version)]
pub struct Cli {
    /// Catalog base URL for this invocation (overrides config and SIGHTSEE_BACKEND_URL)
    #[arg(long, global = true, value_parser = parse_backend_url)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog once and print matching attractions
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query
        #[arg(short, long)]
        q: Option<String>,

        /// Exact category (e.g. Beach, Fort, Temple)
        #[arg(short, long)]
        category: Option<String>,

        /// Exact location (e.g. Malvan, Tarkarli)
        #[arg(short, long)]
        location: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add the built-in sample attractions to an empty catalog, then refresh
    Seed {
        /// Seed even when the catalog already has attractions
        #[arg(long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: edit filters, search, seed
    #[command(visible_alias = "b")]
    Browse,

    /// List the suggested categories and locations
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key: backend_url, request_timeout_secs
        #[arg(value_parser = parse_config_key)]
        key: String,

        /// New value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Key: backend_url, request_timeout_secs
        #[arg(value_parser = parse_config_key)]
        key: String,
    },
}

impl Cli {
    /// Dispatch the parsed command
    pub async fn run(self) -> crate::error::Result<()> {
        let backend_url = self.backend_url.as_deref();

        match self.command {
            Commands::Search {
                q,
                category,
                location,
                json,
            } => {
                cmd_search(
                    SearchOptions {
                        q,
                        category,
                        location,
                        json,
                    },
                    backend_url,
                )
                .await
            }
            Commands::Seed { json, force } => cmd_seed(backend_url, json, force).await,
            Commands::Browse => cmd_browse(backend_url).await,
            Commands::Options { json } => cmd_options(json),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
                ConfigAction::Get { key } => cmd_config_get(&key),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_backend_url(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    url::Url::parse(trimmed)
        .map(|_| trimmed.to_string())
        .map_err(|e| format!("Invalid URL '{s}': {e}"))
}

fn parse_config_key(s: &str) -> Result<String, String> {
    if VALID_CONFIG_KEYS.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown config key '{s}'. Must be one of: {}",
            VALID_CONFIG_KEYS.join(", ")
        ))
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "sightsee", &mut io::stdout());
}
