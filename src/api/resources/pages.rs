//
//  bookstack-client
//  api/resources/pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::export;
use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::models::{CreatePageRequest, ExportFormat, Page, PageDetail, UpdatePageRequest, Validate};

const ENDPOINT: &str = "/pages";

/// `/pages`
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a> {
    client: &'a BookStackClient,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Page>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    /// Creates a page in a book or chapter from HTML or Markdown.
    pub fn create(&self, request: &CreatePageRequest) -> Result<PageDetail, ApiError> {
        request.validate()?;
        self.client.post(ENDPOINT, request)
    }

    pub fn read(&self, id: u64) -> Result<PageDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdatePageRequest) -> Result<PageDetail, ApiError> {
        request.validate()?;
        self.client.put(&format!("{}/{}", ENDPOINT, id), request)
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn export(&self, id: u64, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        export(self.client, "pages", id, format)
    }
}
