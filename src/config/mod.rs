//
//  bookstack-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for the `bookstack` CLI, stored as TOML in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/bookstack/config.toml`
//! - **macOS**: `~/Library/Application Support/bookstack/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\bookstack\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "https://wiki.example.com"
//! token_id = "Xq3...f1"
//! token_secret = "9bK...a7"
//! verify_ssl = true
//! timeout = 30
//!
//! [headers]
//! X-Forwarded-User = "automation"
//! ```
//!
//! ## Precedence
//!
//! Command-line flags win over environment variables (`BOOKSTACK_URL`,
//! `BOOKSTACK_TOKEN_ID`, `BOOKSTACK_TOKEN_SECRET`), which win over the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookstack_client::config::Config;
//! use bookstack_client::BookStackClient;
//!
//! let mut config = Config::load()?;
//! config.set("timeout", "10")?;
//! config.save()?;
//!
//! let client = BookStackClient::new(config.client_options()?)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{ClientOptions, DEFAULT_TIMEOUT};

/// Prefix addressing one entry of the `[headers]` table via `get`/`set`.
const HEADER_KEY_PREFIX: &str = "headers.";

/// Scalar keys understood by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["base_url", "token_id", "token_secret", "verify_ssl", "timeout"];

/// Main configuration structure for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Root URL of the BookStack instance, without `/api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API token ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,

    /// API token secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_secret: Option<String>,

    /// Verify TLS certificates. Defaults to `true`.
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Extra headers sent with every request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

fn default_verify_ssl() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            token_id: None,
            token_secret: None,
            verify_ssl: default_verify_ssl(),
            timeout: default_timeout(),
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(path, &content)
    }

    /// Returns `<config dir>/bookstack/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a value by key; `headers.<Name>` addresses one header.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(name) = key.strip_prefix(HEADER_KEY_PREFIX) {
            return self.headers.get(name).cloned();
        }
        match key {
            "base_url" => self.base_url.clone(),
            "token_id" => self.token_id.clone(),
            "token_secret" => self.token_secret.clone(),
            "verify_ssl" => Some(self.verify_ssl.to_string()),
            "timeout" => Some(self.timeout.to_string()),
            _ => None,
        }
    }

    /// Sets a value by key, parsing booleans and numbers.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(name) = key.strip_prefix(HEADER_KEY_PREFIX) {
            if name.is_empty() {
                bail!("Header name missing in '{}'", key);
            }
            self.headers.insert(name.to_string(), value.to_string());
            return Ok(());
        }
        match key {
            "base_url" => self.base_url = Some(value.trim_end_matches('/').to_string()),
            "token_id" => self.token_id = Some(value.to_string()),
            "token_secret" => self.token_secret = Some(value.to_string()),
            "verify_ssl" => {
                self.verify_ssl = value
                    .parse()
                    .with_context(|| format!("verify_ssl must be true or false, got '{}'", value))?
            }
            "timeout" => {
                self.timeout = value
                    .parse()
                    .with_context(|| format!("timeout must be a number of seconds, got '{}'", value))?
            }
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}, headers.<name>",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Keys that currently hold a value, header entries included.
    pub fn keys(&self) -> Vec<String> {
        CONFIG_KEYS
            .iter()
            .filter(|key| self.get(key).is_some())
            .map(|key| key.to_string())
            .chain(
                self.headers
                    .keys()
                    .map(|name| format!("{}{}", HEADER_KEY_PREFIX, name)),
            )
            .collect()
    }

    /// Builds client options, failing with the name of the first missing key.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let base_url = self.base_url.as_deref().context(
            "base_url is not configured (set BOOKSTACK_URL, pass --url, or run `bookstack config set base_url <url>`)",
        )?;
        let token_id = self.token_id.as_deref().context(
            "token_id is not configured (set BOOKSTACK_TOKEN_ID, pass --token-id, or run `bookstack config set token_id <id>`)",
        )?;
        let token_secret = self.token_secret.as_deref().context(
            "token_secret is not configured (set BOOKSTACK_TOKEN_SECRET, pass --token-secret, or run `bookstack config set token_secret <secret>`)",
        )?;

        let options = self.headers.iter().fold(
            ClientOptions::new(base_url, token_id, token_secret)
                .with_verify_ssl(self.verify_ssl)
                .with_timeout(Duration::from_secs(self.timeout)),
            |options, (name, value)| options.with_header(name.clone(), value.clone()),
        );
        Ok(options)
    }
}
