//
//  bookstack-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod config;
mod export;
mod get;
mod list;
mod search;

pub use api::ApiCommand;
pub use config::ConfigCommand;
pub use export::ExportCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use search::SearchCommand;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::api::BookStackClient;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// BookStack CLI - Work with a BookStack wiki from the command line
#[derive(Parser, Debug)]
#[command(
    name = "bookstack",
    version,
    about = "Work with a BookStack wiki from the command line",
    long_about = "bookstack is a CLI for the BookStack REST API.\n\n\
                  It lists, reads, searches and exports wiki content, and gives raw access to any endpoint.",
    propagate_version = true,
    after_help = "Use 'bookstack <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// BookStack instance URL (without /api)
    #[arg(long, global = true, env = "BOOKSTACK_URL")]
    pub url: Option<String>,

    /// API token ID
    #[arg(long, global = true, env = "BOOKSTACK_TOKEN_ID")]
    pub token_id: Option<String>,

    /// API token secret
    #[arg(long, global = true, env = "BOOKSTACK_TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Applies flag and environment overrides on top of file values.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(url) = &self.url {
            config.set("base_url", url)?;
        }
        if let Some(token_id) = &self.token_id {
            config.set("token_id", token_id)?;
        }
        if let Some(token_secret) = &self.token_secret {
            config.set("token_secret", token_secret)?;
        }
        if self.insecure {
            config.verify_ssl = false;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        Ok(())
    }

    /// Loads the config file, applies overrides and builds a client.
    pub fn client(&self) -> Result<BookStackClient> {
        let mut config = Config::load()?;
        self.apply(&mut config)?;
        let options = config.client_options()?;
        tracing::debug!(?options, "Building client");
        Ok(BookStackClient::new(options)?)
    }

    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::json()
        } else {
            OutputWriter::new(OutputFormat::Table)
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items of an entity family
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Show one item
    Get(GetCommand),

    /// Search content
    Search(SearchCommand),

    /// Export a book, chapter or page
    Export(ExportCommand),

    /// Make API requests
    Api(ApiCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Entity families addressable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    #[value(alias = "book")]
    Books,
    #[value(alias = "chapter")]
    Chapters,
    #[value(alias = "page")]
    Pages,
    #[value(alias = "shelf")]
    Shelves,
    #[value(alias = "user")]
    Users,
    #[value(alias = "role")]
    Roles,
    #[value(alias = "attachment")]
    Attachments,
    #[value(alias = "image")]
    Images,
    AuditLog,
    RecycleBin,
}

/// Splits `key=value`; the value may itself contain `=`.
pub(crate) fn parse_key_value(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("Invalid format: {}. Expected key=value", input),
    }
}
