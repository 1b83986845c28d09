//
//  bookstack-client
//  api/resources/attachments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde_json::{Map, Value};

use super::send_with_upload;
use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::api::request::HttpMethod;
use crate::models::{
    Attachment, AttachmentContent, AttachmentDetail, CreateAttachmentRequest, Upload,
    UpdateAttachmentRequest, Validate,
};

const ENDPOINT: &str = "/attachments";
const FILE_FIELD: &str = "file";

/// `/attachments`
///
/// Links travel as JSON; uploaded files as `multipart/form-data`.
#[derive(Debug, Clone, Copy)]
pub struct Attachments<'a> {
    client: &'a BookStackClient,
}

impl<'a> Attachments<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Attachment>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    pub fn create(&self, request: &CreateAttachmentRequest) -> Result<AttachmentDetail, ApiError> {
        request.validate()?;
        let mut body = Map::new();
        body.insert("name".into(), request.name.clone().into());
        body.insert("uploaded_to".into(), request.uploaded_to.into());
        let upload = content_into(&mut body, Some(&request.content));
        send_with_upload(self.client, HttpMethod::Post, ENDPOINT, &body, upload)
    }

    pub fn read(&self, id: u64) -> Result<AttachmentDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(
        &self,
        id: u64,
        request: &UpdateAttachmentRequest,
    ) -> Result<AttachmentDetail, ApiError> {
        request.validate()?;
        let mut body = Map::new();
        if let Some(name) = &request.name {
            body.insert("name".into(), name.clone().into());
        }
        if let Some(uploaded_to) = request.uploaded_to {
            body.insert("uploaded_to".into(), uploaded_to.into());
        }
        let upload = content_into(&mut body, request.content.as_ref());
        send_with_upload(
            self.client,
            HttpMethod::Put,
            &format!("{}/{}", ENDPOINT, id),
            &body,
            upload,
        )
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }
}

/// Adds a link to the JSON body, or hands back the file to upload.
fn content_into<'c>(
    body: &mut Map<String, Value>,
    content: Option<&'c AttachmentContent>,
) -> Option<(&'static str, &'c Upload)> {
    match content {
        Some(AttachmentContent::Link(link)) => {
            body.insert("link".into(), link.clone().into());
            None
        }
        Some(AttachmentContent::File(upload)) => Some((FILE_FIELD, upload)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, stamp};
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn detail(external: bool) -> String {
        let admin = json!({"id": 1, "name": "Admin", "slug": "admin"});
        let (extension, content) = if external {
            ("", "https://example.com/datasheet")
        } else {
            ("pdf", "JVBERi0=")
        };
        stamp(json!({
            "id": 5,
            "name": "Datasheet",
            "extension": extension,
            "uploaded_to": 12,
            "external": external,
            "order": 1,
            "created_by": admin,
            "updated_by": admin,
            "links": {
                "html": "<a href=\"https://wiki.test/attachments/5\">Datasheet</a>",
                "markdown": "[Datasheet](https://wiki.test/attachments/5)"
            },
            "content": content
        }))
        .to_string()
    }

    #[test]
    fn test_link_attachment_is_json() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/attachments")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Datasheet",
                "uploaded_to": 12,
                "link": "https://example.com/datasheet"
            })))
            .with_body(detail(true))
            .create();

        let attachment = client_for(&server)
            .attachments()
            .create(&CreateAttachmentRequest::link("Datasheet", 12, "https://example.com/datasheet"))
            .unwrap();

        mock.assert();
        assert!(attachment.external);
        assert_eq!(attachment.content, "https://example.com/datasheet");
    }

    #[test]
    fn test_file_attachment_is_multipart() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/attachments")
            .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".into()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="uploaded_to""#.into()),
                Matcher::Regex(r#"name="file"; filename="manual.pdf""#.into()),
                Matcher::Regex("%PDF".into()),
            ]))
            .with_body(detail(false))
            .create();

        let upload = Upload::new("manual.pdf", b"%PDF-1.7".to_vec());
        let attachment = client_for(&server)
            .attachments()
            .create(&CreateAttachmentRequest::file("Datasheet", 12, upload))
            .unwrap();

        mock.assert();
        assert_eq!(attachment.extension, "pdf");
    }

    #[test]
    fn test_rename_only_update() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/attachments/5")
            .match_body(Matcher::Json(json!({"name": "Spec v2"})))
            .with_body(detail(true))
            .create();

        let request = UpdateAttachmentRequest {
            name: Some("Spec v2".to_string()),
            ..Default::default()
        };
        client_for(&server).attachments().update(5, &request).unwrap();

        mock.assert();
    }

    #[test]
    fn test_file_replacement_spoofs_put() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/attachments/5")
            .match_body(Matcher::Regex(r#"name="_method""#.into()))
            .with_body(detail(false))
            .create();

        let request = UpdateAttachmentRequest {
            content: Some(AttachmentContent::File(Upload::new("manual.pdf", b"%PDF".to_vec()))),
            ..Default::default()
        };
        client_for(&server).attachments().update(5, &request).unwrap();

        mock.assert();
    }
}
