//
//  bookstack-client
//  api/resources/chapters.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::export;
use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::models::{
    Chapter, ChapterDetail, CreateChapterRequest, ExportFormat, UpdateChapterRequest, Validate,
};

const ENDPOINT: &str = "/chapters";

/// `/chapters`
#[derive(Debug, Clone, Copy)]
pub struct Chapters<'a> {
    client: &'a BookStackClient,
}

impl<'a> Chapters<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Chapter>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    pub fn create(&self, request: &CreateChapterRequest) -> Result<ChapterDetail, ApiError> {
        request.validate()?;
        self.client.post(ENDPOINT, request)
    }

    pub fn read(&self, id: u64) -> Result<ChapterDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdateChapterRequest) -> Result<ChapterDetail, ApiError> {
        request.validate()?;
        self.client.put(&format!("{}/{}", ENDPOINT, id), request)
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn export(&self, id: u64, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        export(self.client, "chapters", id, format)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, stamp};
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn detail(id: u64, book_id: u64) -> String {
        let admin = json!({"id": 1, "name": "Admin", "slug": "admin"});
        stamp(json!({
            "id": id,
            "book_id": book_id,
            "name": "Setup",
            "slug": "setup",
            "priority": 1,
            "created_by": admin,
            "updated_by": admin,
            "owned_by": admin,
            "book_slug": "handbook",
            "tags": [],
            "pages": []
        }))
        .to_string()
    }

    #[test]
    fn test_create_and_move() {
        let mut server = mockito::Server::new();
        let create = server
            .mock("POST", "/api/chapters")
            .match_body(Matcher::Json(json!({"book_id": 2, "name": "Setup"})))
            .with_body(detail(5, 2))
            .create();
        let update = server
            .mock("PUT", "/api/chapters/5")
            .match_body(Matcher::Json(json!({"book_id": 9})))
            .with_body(detail(5, 9))
            .create();

        let client = client_for(&server);
        let chapter = client.chapters().create(&CreateChapterRequest::new(2, "Setup")).unwrap();
        assert_eq!(chapter.book_id, 2);

        let moved = client
            .chapters()
            .update(
                5,
                &UpdateChapterRequest {
                    book_id: Some(9),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.book_id, 9);

        create.assert();
        update.assert();
    }

    #[test]
    fn test_list_with_filter() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/chapters")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("filter[book_id]".into(), "2".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_body(r#"{"data": [], "total": 0}"#)
            .create();

        let chapters = client_for(&server)
            .chapters()
            .list(&ListParams::default().filter("book_id", "2"))
            .unwrap();

        mock.assert();
        assert_eq!(chapters.total, 0);
    }

    #[test]
    fn test_export_pdf() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/chapters/5/export/pdf")
            .with_body(b"%PDF-1.4".to_vec())
            .create();

        let pdf = client_for(&server).chapters().export(5, ExportFormat::Pdf).unwrap();

        mock.assert();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_delete_forbidden() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("DELETE", "/api/chapters/5")
            .with_status(403)
            .with_body(r#"{"error": {"message": "You do not have permission"}}"#)
            .create();

        let err = client_for(&server).chapters().delete(5).unwrap_err();
        assert!(matches!(err, ApiError::PermissionDenied(_)));
        assert_eq!(err.status(), Some(403));
    }
}
