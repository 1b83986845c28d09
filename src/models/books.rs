//
//  bookstack-client
//  models/books.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    check_descriptions, check_length, check_optional_length, Cover, Tag, Upload, UserRef,
    Validate, MAX_NAME_LENGTH,
};
use crate::api::ApiError;

/// Book as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    #[serde(default)]
    pub cover: Option<Cover>,
}

/// Page entry inside a book's contents tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookContentPage {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub book_id: u64,
    pub chapter_id: u64,
    pub draft: bool,
    pub template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
}

/// Top-level item of a book's contents: a chapter or a loose page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookContentItem {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub book_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    /// `chapter` or `page`
    #[serde(rename = "type")]
    pub item_type: String,
    /// Chapters only
    #[serde(default)]
    pub pages: Vec<BookContentPage>,
    /// Pages only
    #[serde(default)]
    pub chapter_id: Option<u64>,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub template: Option<bool>,
}

/// Book with expanded users and its contents tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_html: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub owned_by: UserRef,
    #[serde(default)]
    pub contents: Vec<BookContentItem>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub default_template_id: Option<u64>,
}

/// Book reference inside a shelf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfBook {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub updated_by: Option<u64>,
    #[serde(default)]
    pub owned_by: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBookRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
    /// Cover image; switches the request to multipart
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl CreateBookRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateBookRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 0, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl Validate for UpdateBookRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 1, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}
