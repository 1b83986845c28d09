//
//  bookstack-client
//  models/shelves.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    check_descriptions, check_length, check_optional_length, Cover, ShelfBook, Tag, Upload,
    UserRef, Validate, MAX_NAME_LENGTH,
};
use crate::api::ApiError;

/// Shelf as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelf {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    #[serde(default)]
    pub cover: Option<Cover>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfDetail {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub owned_by: UserRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub books: Vec<ShelfBook>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateShelfRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    /// Book IDs in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl CreateShelfRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateShelfRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 1, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}

/// `books` replaces the shelf's whole book list when set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShelfRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl Validate for UpdateShelfRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 1, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}
