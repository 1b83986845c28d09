//
//  bookstack-client
//  models/recycle_bin.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletableType {
    Page,
    Book,
    Chapter,
    Bookshelf,
}

/// Book or shelf containing a deleted page or chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletableParent {
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
    #[serde(rename = "type")]
    pub parent_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletablePage {
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
    pub editor: String,
    pub book_slug: String,
    pub parent: DeletableParent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletableChapter {
    pub id: u64,
    pub book_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
    pub owned_by: u64,
    pub pages_count: u64,
    pub parent: DeletableParent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletableBook {
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
    pub pages_count: u64,
    pub chapters_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletableBookshelf {
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
    pub books_count: u64,
}

/// The deleted item, distinguished by the fields it carries.
///
/// Variants are tried from the most to the least specific shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deletable {
    Page(DeletablePage),
    Chapter(DeletableChapter),
    Book(DeletableBook),
    Bookshelf(DeletableBookshelf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycleBinItem {
    pub id: u64,
    pub deleted_by: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deletable_type: DeletableType,
    pub deletable_id: u64,
    pub deletable: Deletable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreResponse {
    pub restore_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyResponse {
    pub delete_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(deletable_type: &str, deletable: serde_json::Value) -> serde_json::Value {
        json!({
            "id": 18,
            "deleted_by": 1,
            "created_at": "2024-07-01T10:00:00.000000Z",
            "updated_at": "2024-07-01T10:00:00.000000Z",
            "deletable_type": deletable_type,
            "deletable_id": 42,
            "deletable": deletable
        })
    }

    fn base(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Item",
            "slug": "item",
            "description": "",
            "created_at": "2024-07-01T10:00:00.000000Z",
            "updated_at": "2024-07-01T10:00:00.000000Z",
            "created_by": 1,
            "updated_by": 1,
            "owned_by": 1
        })
    }

    fn with(mut value: serde_json::Value, extra: serde_json::Value) -> serde_json::Value {
        if let (Some(target), Some(source)) = (value.as_object_mut(), extra.as_object()) {
            target.extend(source.clone());
        }
        value
    }

    #[test]
    fn test_book_and_shelf_variants() {
        let book = with(base(42), json!({"pages_count": 4, "chapters_count": 1}));
        let decoded: RecycleBinItem = serde_json::from_value(item("book", book)).unwrap();
        assert_eq!(decoded.deletable_type, DeletableType::Book);
        assert!(matches!(decoded.deletable, Deletable::Book(ref b) if b.chapters_count == 1));

        let shelf = with(base(42), json!({"books_count": 3}));
        let decoded: RecycleBinItem = serde_json::from_value(item("bookshelf", shelf)).unwrap();
        assert!(matches!(decoded.deletable, Deletable::Bookshelf(ref s) if s.books_count == 3));
    }

    #[test]
    fn test_chapter_variant_with_parent() {
        let parent = with(base(2), json!({"type": "book"}));
        let chapter = with(
            base(42),
            json!({"book_id": 2, "priority": 1, "pages_count": 6, "parent": parent}),
        );
        let decoded: RecycleBinItem = serde_json::from_value(item("chapter", chapter)).unwrap();
        match decoded.deletable {
            Deletable::Chapter(chapter) => {
                assert_eq!(chapter.pages_count, 6);
                assert_eq!(chapter.parent.parent_type, "book");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_counts() {
        let restored: RestoreResponse = serde_json::from_value(json!({"restore_count": 3})).unwrap();
        assert_eq!(restored.restore_count, 3);
        let destroyed: DestroyResponse = serde_json::from_value(json!({"delete_count": 2})).unwrap();
        assert_eq!(destroyed.delete_count, 2);
    }
}
