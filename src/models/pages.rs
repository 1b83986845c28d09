//
//  bookstack-client
//  models/pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_length, check_optional_length, Tag, UserRef, Validate, MAX_NAME_LENGTH};
use crate::api::ApiError;

/// Page as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub book_id: u64,
    /// `0` when the page sits directly in a book
    pub chapter_id: u64,
    pub name: String,
    pub slug: String,
    pub priority: i64,
    pub draft: bool,
    pub revision_count: u64,
    pub template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    pub editor: String,
    pub book_slug: String,
}

/// Page with expanded users and its content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDetail {
    pub id: u64,
    pub book_id: u64,
    pub chapter_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub raw_html: Option<String>,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub owned_by: UserRef,
    pub draft: bool,
    #[serde(default)]
    pub markdown: Option<String>,
    pub revision_count: u64,
    pub template: bool,
    pub editor: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// New page payload.
///
/// A parent (`book_id` or `chapter_id`) and a body (`html` or `markdown`)
/// are both required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl CreatePageRequest {
    /// Markdown page placed directly in a book.
    pub fn markdown_in_book(book_id: u64, name: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            book_id: Some(book_id),
            name: name.into(),
            markdown: Some(markdown.into()),
            ..Default::default()
        }
    }

    /// HTML page placed in a chapter.
    pub fn html_in_chapter(chapter_id: u64, name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            chapter_id: Some(chapter_id),
            name: name.into(),
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

impl Validate for CreatePageRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 0, MAX_NAME_LENGTH)?;
        if self.book_id.is_none() && self.chapter_id.is_none() {
            return Err(ApiError::InvalidArgument(
                "either book_id or chapter_id must be provided".to_string(),
            ));
        }
        if self.html.is_none() && self.markdown.is_none() {
            return Err(ApiError::InvalidArgument(
                "either html or markdown must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

/// Setting `book_id` or `chapter_id` moves the page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Validate for UpdatePageRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 1, MAX_NAME_LENGTH)
    }
}
