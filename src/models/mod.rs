//
//  bookstack-client
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed records for the BookStack REST API.
//!
//! One submodule per entity family. Listing endpoints return the lighter
//! "list item" records (user references as plain IDs), read endpoints the
//! detail records (user references expanded). Create/update payloads
//! implement [`Validate`] so facades can reject out-of-range input before a
//! request is made.
//!
//! # Notes
//!
//! - Timestamps are ISO 8601 strings on the wire, `DateTime<Utc>` here
//! - Optional payload fields are omitted from the JSON when `None`

pub mod attachments;
pub mod audit_log;
pub mod books;
pub mod chapters;
pub mod images;
pub mod pages;
pub mod permissions;
pub mod recycle_bin;
pub mod roles;
pub mod search;
pub mod shelves;
pub mod users;

pub use attachments::*;
pub use audit_log::*;
pub use books::*;
pub use chapters::*;
pub use images::*;
pub use pages::*;
pub use permissions::*;
pub use recycle_bin::*;
pub use roles::*;
pub use search::*;
pub use shelves::*;
pub use users::*;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Maximum length of book, chapter and page names.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of plain descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 1900;

/// Maximum length of HTML descriptions.
pub const MAX_DESCRIPTION_HTML_LENGTH: usize = 2000;

/// Client-side checks for request payloads.
pub trait Validate {
    /// Returns [`ApiError::InvalidArgument`] naming the first offending field.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Minimal user reference embedded in detail records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A name/value tag attached to a book, chapter, page or shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// Display order; assigned by the server when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            order: None,
        }
    }
}

/// Cover image of a book or shelf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cover {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub path: String,
    #[serde(rename = "type")]
    pub cover_type: String,
    pub uploaded_to: u64,
}

/// HTML and Markdown link snippets for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub html: String,
    pub markdown: String,
}

/// File content for upload endpoints.
#[derive(Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Formats offered by the book, chapter and page export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Pdf,
    PlainText,
    Markdown,
}

impl ExportFormat {
    /// Path segment used by the export endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::PlainText => "plaintext",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            "plaintext" | "plain-text" | "text" => Ok(Self::PlainText),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(ApiError::InvalidArgument(format!(
                "unknown export format '{}'",
                s
            ))),
        }
    }
}

/// Checks the character length of a field.
pub(crate) fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let length = value.chars().count();
    if length < min {
        return Err(ApiError::InvalidArgument(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if length > max {
        return Err(ApiError::InvalidArgument(format!(
            "{} must be at most {} characters (got {})",
            field, max, length
        )));
    }
    Ok(())
}

/// Like [`check_length`], skipping absent values.
pub(crate) fn check_optional_length(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ApiError> {
    match value {
        Some(value) => check_length(field, value, min, max),
        None => Ok(()),
    }
}

/// Shared checks for the name/description fields of books and chapters.
pub(crate) fn check_descriptions(
    description: Option<&str>,
    description_html: Option<&str>,
) -> Result<(), ApiError> {
    check_optional_length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
    check_optional_length(
        "description_html",
        description_html,
        0,
        MAX_DESCRIPTION_HTML_LENGTH,
    )
}
