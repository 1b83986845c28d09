//
//  bookstack-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # BookStack Client Library
//!
//! A typed, blocking client for the BookStack wiki REST API, plus the
//! `bookstack` command-line tool built on top of it.
//!
//! ## Overview
//!
//! Requests are authenticated with an API token pair
//! (`Authorization: Token <id>:<secret>`). Listing endpoints are walked page
//! by page and returned as one collection; every HTTP failure is classified
//! into a structured [`api::ApiError`].
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, pagination, error taxonomy and resource facades
//! - [`models`]: Typed records for every entity family
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bookstack_client::api::{BookStackClient, ClientOptions, ListParams};
//!
//! let client = BookStackClient::new(ClientOptions::new(
//!     "https://wiki.example.com",
//!     "token-id",
//!     "token-secret",
//! ))
//! .expect("valid options");
//!
//! let books = client.books().list(&ListParams::default()).expect("book listing");
//! for book in books.data {
//!     println!("{} {}", book.id, book.name);
//! }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// API client for BookStack.
///
/// Handles authentication, request building, pagination, and error
/// classification, and exposes one facade per entity family.
pub mod api;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/bookstack/config.toml`
/// - macOS: `~/Library/Application Support/bookstack/config.toml`
/// - Windows: `%APPDATA%\bookstack\config\config.toml`
pub mod config;

/// Typed API records.
pub mod models;

/// Output formatting for the CLI.
pub mod output;

pub use api::{ApiError, BookStackClient, ClientOptions};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "bookstack";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// Also sent in the `User-Agent` header.
///
/// ```rust
/// use bookstack_client::VERSION;
///
/// println!("bookstack version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Authentication failed.
    ///
    /// The token pair was rejected or lacks permission. Check
    /// `token_id`/`token_secret` with `bookstack config list`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// Wait for the `Retry-After` delay before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
