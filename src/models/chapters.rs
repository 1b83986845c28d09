//
//  bookstack-client
//  models/chapters.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    check_descriptions, check_length, check_optional_length, Tag, UserRef, Validate,
    MAX_NAME_LENGTH,
};
use crate::api::ApiError;

/// Chapter as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u64,
    pub book_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    pub book_slug: String,
}

/// Page entry inside a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterPage {
    pub id: u64,
    pub book_id: u64,
    pub chapter_id: u64,
    pub name: String,
    pub slug: String,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    pub draft: bool,
    pub revision_count: u64,
    pub template: bool,
    #[serde(default)]
    pub editor: Option<String>,
    pub book_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterDetail {
    pub id: u64,
    pub book_id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_html: Option<String>,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub owned_by: UserRef,
    pub book_slug: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub pages: Vec<ChapterPage>,
    #[serde(default)]
    pub default_template_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChapterRequest {
    pub book_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
}

impl CreateChapterRequest {
    pub fn new(book_id: u64, name: impl Into<String>) -> Self {
        Self {
            book_id,
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateChapterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 0, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}

/// Setting `book_id` moves the chapter to another book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChapterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
}

impl Validate for UpdateChapterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 1, MAX_NAME_LENGTH)?;
        check_descriptions(self.description.as_deref(), self.description_html.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload() {
        let mut request = CreateChapterRequest::new(4, "Setup");
        request.tags.push(Tag::new("level", "basic"));
        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"book_id": 4, "name": "Setup", "tags": [{"name": "level", "value": "basic"}]})
        );
    }

    #[test]
    fn test_update_validation() {
        let request = UpdateChapterRequest {
            name: Some("n".repeat(256)),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_chapter_list_item_decodes() {
        let chapter: Chapter = serde_json::from_value(json!({
            "id": 1,
            "book_id": 2,
            "name": "Setup",
            "slug": "setup",
            "description": "",
            "priority": 3,
            "created_at": "2024-02-01T09:00:00.000000Z",
            "updated_at": "2024-02-01T09:00:00.000000Z",
            "created_by": 1,
            "updated_by": 1,
            "owned_by": 1,
            "book_slug": "handbook"
        }))
        .unwrap();
        assert_eq!(chapter.book_slug, "handbook");
        assert_eq!(chapter.priority, 3);
    }
}
