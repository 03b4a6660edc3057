//! Configuration commands for managing hiretrack settings.
//!
//! - `config set`: Set a configuration value
//! - `config get`: Read a single value
//! - `config show`: Display current configuration

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use crate::config::{Config, mask_sensitive_value};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    if output_json {
        let output = json!({
            "backend": {
                "base_url": config.backend.base_url,
                "api_token_configured": config.backend.api_token.is_some(),
                "timeout": config.backend.timeout,
            },
            "defaults": {
                "page_size": config.defaults.page_size,
            },
            "config_file": Config::config_path().to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        "Configuration:".if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    println!(
        "  backend.base_url: {}",
        config.backend.base_url.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  backend.api_token: {}",
        config
            .backend
            .api_token
            .as_deref()
            .map(mask_sensitive_value)
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  backend.timeout: {}s", config.backend.timeout);
    println!("  defaults.page_size: {}", config.defaults.page_size);
    println!();
    println!("Config file: {}", Config::config_path().display());
    Ok(())
}

/// Read one configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set one configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!(
        "{} {} = {}",
        "set".if_supports_color(Stream::Stdout, |t| t.green()),
        key,
        if key == "backend.api_token" {
            mask_sensitive_value(value)
        } else {
            value.to_string()
        }
    );
    Ok(())
}
