//! Config command handlers

use anyhow::{bail, Context, Result};

use mdwiki_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "entries_dir": config.entries_dir,
                    "config_file": Config::config_file_path(),
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.entries_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  entries_dir: {}", config.entries_dir.display());
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "entries_dir" => {
            config.entries_dir = value.clone().into();
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: entries_dir",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));
    Ok(())
}
