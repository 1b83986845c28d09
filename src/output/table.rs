//
//  bookstack-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Human-readable tables built with [`comfy_table`]. Listings render one row
//! per item through [`TableRow`]; single records render as a two-column
//! field/value table derived from their JSON form.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use crate::models::{
    Attachment, AuditLogEntry, Book, Chapter, Deletable, Image, Page, RecycleBinItem, Role,
    SearchResult, Shelf, User,
};

/// Longest cell text before truncation in field/value tables.
const MAX_CELL_CHARS: usize = 80;

/// Creates a new table with default styling.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing tables with a fluent API.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row; cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per item in listing tables.
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Builds a listing table.
pub fn list_table<T: TableRow>(items: &[T], color: bool) -> Table {
    TableBuilder::new()
        .color(color)
        .headers(T::headers().iter().copied())
        .rows(items.iter().map(|item| item.row()))
        .build()
}

/// Builds a field/value table from the top-level fields of a JSON object.
///
/// Nested objects show their `name` (or `display_name`) when they have one,
/// arrays show their length. Non-objects render as a single value row.
pub fn detail_table(value: &Value, color: bool) -> Table {
    let builder = TableBuilder::new().color(color).headers(["Field", "Value"]);
    match value {
        Value::Object(map) => builder
            .rows(map.iter().map(|(key, value)| [key.clone(), summarize(value)]))
            .build(),
        other => builder.row(["value".to_string(), summarize(other)]).build(),
    }
}

fn summarize(value: &Value) -> String {
    let text = match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => match map.get("name").or_else(|| map.get("display_name")) {
            Some(Value::String(name)) => name.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    };
    truncate(&text, MAX_CELL_CHARS)
}

/// Truncates to `max` characters, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn format_bool(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

impl TableRow for Book {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableRow for Chapter {
    fn headers() -> &'static [&'static str] {
        &["ID", "Book", "Name", "Priority", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.book_slug.clone(),
            self.name.clone(),
            self.priority.to_string(),
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableRow for Page {
    fn headers() -> &'static [&'static str] {
        &["ID", "Book", "Chapter", "Name", "Draft", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        let chapter = if self.chapter_id == 0 {
            "-".to_string()
        } else {
            self.chapter_id.to_string()
        };
        vec![
            self.id.to_string(),
            self.book_slug.clone(),
            chapter,
            self.name.clone(),
            format_bool(self.draft),
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableRow for Shelf {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Last Active"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.last_activity_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| "never".to_string()),
        ]
    }
}

impl TableRow for Role {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Users", "Permissions", "MFA"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name.clone(),
            self.users_count.to_string(),
            self.permissions_count.to_string(),
            format_bool(self.mfa_enforced),
        ]
    }
}

impl TableRow for Attachment {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Page", "Kind", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        let kind = if self.external {
            "link".to_string()
        } else {
            self.extension.clone()
        };
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.uploaded_to.to_string(),
            kind,
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableRow for Image {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Type", "Page", "URL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.image_type.as_str().to_string(),
            self.uploaded_to.to_string(),
            self.url.clone(),
        ]
    }
}

impl TableRow for AuditLogEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "When", "Event", "User", "Item", "IP"]
    }

    fn row(&self) -> Vec<String> {
        let item = match (&self.loggable_type, self.loggable_id) {
            (Some(kind), Some(id)) => format!("{} {}", kind, id),
            _ => "-".to_string(),
        };
        vec![
            self.id.to_string(),
            format_timestamp(&self.created_at),
            self.event_type.clone(),
            self.user.name.clone(),
            item,
            self.ip.clone(),
        ]
    }
}

impl TableRow for RecycleBinItem {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Name", "Deleted By", "Deleted"]
    }

    fn row(&self) -> Vec<String> {
        let name = match &self.deletable {
            Deletable::Page(page) => page.name.clone(),
            Deletable::Chapter(chapter) => chapter.name.clone(),
            Deletable::Book(book) => book.name.clone(),
            Deletable::Bookshelf(shelf) => shelf.name.clone(),
        };
        vec![
            self.id.to_string(),
            format!("{:?}", self.deletable_type).to_lowercase(),
            name,
            self.deleted_by.to_string(),
            format_timestamp(&self.created_at),
        ]
    }
}

impl TableRow for SearchResult {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Name", "URL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format!("{:?}", self.result_type).to_lowercase(),
            self.name.clone(),
            self.url.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("this is a long sentence", 10), "this is...");
    }

    #[test]
    fn test_detail_table_summarizes_nested_values() {
        let table = detail_table(
            &json!({
                "id": 3,
                "name": "Handbook",
                "owned_by": {"id": 1, "name": "Admin"},
                "tags": [1, 2, 3],
                "cover": null
            }),
            false,
        )
        .to_string();

        assert!(table.contains("Handbook"));
        assert!(table.contains("Admin"));
        assert!(table.contains("[3 items]"));
    }

    #[test]
    fn test_list_table_has_header_and_rows() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "name": "Handbook",
            "slug": "handbook",
            "created_at": "2024-01-05T10:00:00Z",
            "updated_at": "2024-01-06T11:30:00Z",
            "created_by": 1,
            "updated_by": 1,
            "owned_by": 1
        }))
        .unwrap();

        let table = list_table(&[book], false).to_string();
        assert!(table.contains("Slug"));
        assert!(table.contains("handbook"));
        assert!(table.contains("2024-01-06 11:30"));
    }
}
