//
//  bookstack-client
//  models/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Bookshelf,
    Book,
    Chapter,
    Page,
}

/// Highlighted name and content snippets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreview {
    pub name: String,
    pub content: String,
}

/// Parent book or chapter of a search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParent {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
    pub url: String,
    pub preview_html: SearchPreview,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub book_id: Option<u64>,
    #[serde(default)]
    pub chapter_id: Option<u64>,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub template: Option<bool>,
    #[serde(default)]
    pub book: Option<SearchParent>,
    #[serde(default)]
    pub chapter: Option<SearchParent>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub updated_by: Option<u64>,
    #[serde(default)]
    pub owned_by: Option<u64>,
}

/// One page of search results.
///
/// `total` is the server's count of all matches, not the length of `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchResult>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_decodes() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "data": [{
                "id": 84,
                "name": "Setup guide",
                "slug": "setup-guide",
                "created_at": "2024-05-01T08:00:00.000000Z",
                "updated_at": "2024-05-02T08:00:00.000000Z",
                "type": "page",
                "url": "https://wiki.test/books/ops/page/setup-guide",
                "preview_html": {"name": "<strong>Setup</strong> guide", "content": "..."},
                "tags": [],
                "book_id": 3,
                "chapter_id": 0,
                "draft": false,
                "template": false,
                "book": {"id": 3, "name": "Ops", "slug": "ops"}
            }],
            "total": 41
        }))
        .unwrap();
        assert_eq!(response.total, 41);
        assert_eq!(response.data[0].result_type, SearchResultType::Page);
        assert_eq!(response.data[0].book.as_ref().map(|b| b.id), Some(3));
        assert!(response.data[0].chapter.is_none());
    }
}
