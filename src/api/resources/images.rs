//
//  bookstack-client
//  api/resources/images.rs
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
use crate::models::{CreateImageRequest, Image, ImageDetail, UpdateImageRequest, Validate};

const ENDPOINT: &str = "/image-gallery";
const IMAGE_FIELD: &str = "image";

/// `/image-gallery`
#[derive(Debug, Clone, Copy)]
pub struct Images<'a> {
    client: &'a BookStackClient,
}

impl<'a> Images<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Image>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    /// Uploads an image; always multipart.
    pub fn create(&self, request: &CreateImageRequest) -> Result<ImageDetail, ApiError> {
        request.validate()?;
        let mut body = Map::new();
        body.insert("type".into(), request.image_type.as_str().into());
        body.insert("uploaded_to".into(), request.uploaded_to.into());
        if let Some(name) = &request.name {
            body.insert("name".into(), name.clone().into());
        }
        send_with_upload(
            self.client,
            HttpMethod::Post,
            ENDPOINT,
            &Value::Object(body),
            Some((IMAGE_FIELD, &request.image)),
        )
    }

    pub fn read(&self, id: u64) -> Result<ImageDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    /// Renames and/or replaces the file of an image.
    pub fn update(&self, id: u64, request: &UpdateImageRequest) -> Result<ImageDetail, ApiError> {
        request.validate()?;
        let mut body = Map::new();
        if let Some(name) = &request.name {
            body.insert("name".into(), name.clone().into());
        }
        send_with_upload(
            self.client,
            HttpMethod::Put,
            &format!("{}/{}", ENDPOINT, id),
            &Value::Object(body),
            request.image.as_ref().map(|image| (IMAGE_FIELD, image)),
        )
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, stamp};
    use super::*;
    use crate::models::Upload;
    use mockito::Matcher;
    use serde_json::json;

    fn detail(name: &str) -> String {
        let admin = json!({"id": 1, "name": "Admin", "slug": "admin"});
        stamp(json!({
            "id": 30,
            "name": name,
            "url": "https://wiki.test/uploads/images/gallery/diagram.png",
            "path": "/uploads/images/gallery/diagram.png",
            "type": "gallery",
            "uploaded_to": 12,
            "created_by": admin,
            "updated_by": admin,
            "thumbs": {
                "gallery": "https://wiki.test/uploads/images/gallery/thumbs-150-150/diagram.png",
                "display": "https://wiki.test/uploads/images/gallery/scaled-1680-/diagram.png"
            },
            "content": {
                "html": "<img src=\"diagram.png\">",
                "markdown": "![diagram](diagram.png)"
            }
        }))
        .to_string()
    }

    #[test]
    fn test_upload_image() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/image-gallery")
            .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="type""#.into()),
                Matcher::Regex("gallery".into()),
                Matcher::Regex(r#"name="image"; filename="diagram.png""#.into()),
            ]))
            .with_body(detail("diagram.png"))
            .create();

        let request = CreateImageRequest::gallery(12, Upload::new("diagram.png", b"png".to_vec()));
        let image = client_for(&server).images().create(&request).unwrap();

        mock.assert();
        assert_eq!(image.thumbs.display, "https://wiki.test/uploads/images/gallery/scaled-1680-/diagram.png");
    }

    #[test]
    fn test_rename_is_json_put() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/image-gallery/30")
            .match_body(Matcher::Json(json!({"name": "Architecture"})))
            .with_body(detail("Architecture"))
            .create();

        let request = UpdateImageRequest {
            name: Some("Architecture".to_string()),
            image: None,
        };
        let image = client_for(&server).images().update(30, &request).unwrap();

        mock.assert();
        assert_eq!(image.name, "Architecture");
    }

    #[test]
    fn test_long_name_rejected() {
        let mut server = mockito::Server::new();
        let mock = server.mock("PUT", "/api/image-gallery/30").expect(0).create();

        let request = UpdateImageRequest {
            name: Some("n".repeat(200)),
            image: None,
        };
        assert!(client_for(&server).images().update(30, &request).is_err());

        mock.assert();
    }
}
