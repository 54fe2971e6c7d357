//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config get`: Print one saved value
//! - `config set`: Validate and save one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{BACKEND_URL_ENV_VAR, Config};
use crate::error::{Result, SightseeError};
use crate::paths::config_file;

/// Show current configuration
pub fn cmd_config_show(as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.backend_url();
    let env_override = std::env::var(BACKEND_URL_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .is_some();

    let json_output = json!({
        "backend_url": effective_url,
        "backend_url_from_env": env_override,
        "request_timeout_secs": config.request_timeout_secs,
        "config_file": config_file().to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    let source = if env_override {
        format!(" ({})", format!("from {BACKEND_URL_ENV_VAR}").dimmed())
    } else if config.backend_url.is_none() {
        format!(" ({})", "default".dimmed())
    } else {
        String::new()
    };
    text.push_str(&format!(
        "{}: {effective_url}{source}\n",
        "backend_url".cyan()
    ));

    let timeout = match config.request_timeout() {
        Some(duration) => format!("{}s", duration.as_secs()),
        None => "none".dimmed().to_string(),
    };
    text.push_str(&format!("{}: {timeout}\n", "request_timeout_secs".cyan()));

    text.push('\n');
    text.push_str(&format!(
        "{}",
        format!("Config file: {}", config_file().display()).dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(as_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let saved = config.get(key)?.unwrap_or_default();
    tracing::info!(key, value = %saved, "config updated");
    println!("Set {} to {saved}", key.cyan());
    Ok(())
}

/// Get a saved configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get(key)? {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(SightseeError::Config(format!("{key} is not set"))),
    }
}
