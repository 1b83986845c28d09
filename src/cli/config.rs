//
//  bookstack-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the connection settings in the config file. The token
//! secret is masked when listed.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::Config;
use crate::output::{write_json, TableBuilder};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (base_url, token_id, token_secret, verify_ssl, timeout, headers.<name>)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let Some(value) = config.get(&args.key) else {
            bail!("Configuration key '{}' is not set", args.key);
        };

        if global.json {
            write_json(&serde_json::json!({ "key": args.key, "value": value }))
        } else {
            println!("{}", value);
            Ok(())
        }
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;

        tracing::debug!(key = %args.key, "Updated configuration");
        global
            .output()
            .write_success(&format!("Set {} in {}", args.key, Config::config_path()?.display()));
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let entries = displayed_entries(&config);

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::String(value)))
                .collect();
            return write_json(&map);
        }

        if entries.is_empty() {
            println!("{}", style("No configuration set").dim());
            return Ok(());
        }

        let writer = global.output();
        let table = TableBuilder::new()
            .color(writer.color_enabled())
            .headers(["Key", "Value"])
            .rows(entries.into_iter().map(|(key, value)| [key, value]))
            .build();
        println!("{}", table);
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            write_json(&serde_json::json!({ "path": path }))
        } else {
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Key/value pairs for display, with the token secret masked.
fn displayed_entries(config: &Config) -> Vec<(String, String)> {
    config
        .keys()
        .into_iter()
        .filter_map(|key| {
            let value = config.get(&key)?;
            let value = if key == "token_secret" {
                mask_secret(&value)
            } else {
                value
            };
            Some((key, value))
        })
        .collect()
}

fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "********".to_string()
    } else {
        format!("{}********", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("short"), "********");
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd********");
    }

    #[test]
    fn test_displayed_entries_masks_secret() {
        let mut config = Config::default();
        config.set("token_id", "id-1").unwrap();
        config.set("token_secret", "supersecretvalue").unwrap();

        let entries = displayed_entries(&config);
        assert!(entries.contains(&("token_id".to_string(), "id-1".to_string())));
        assert!(entries.contains(&("token_secret".to_string(), "supe********".to_string())));
        assert!(!entries.iter().any(|(_, value)| value.contains("supersecretvalue")));
    }
}
