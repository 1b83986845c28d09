//
//  bookstack-client
//  api/resources/shelves.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::send_with_upload;
use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::api::request::HttpMethod;
use crate::models::{CreateShelfRequest, Shelf, ShelfDetail, UpdateShelfRequest, Validate};

const ENDPOINT: &str = "/shelves";

/// `/shelves`
#[derive(Debug, Clone, Copy)]
pub struct Shelves<'a> {
    client: &'a BookStackClient,
}

impl<'a> Shelves<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Shelf>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    pub fn create(&self, request: &CreateShelfRequest) -> Result<ShelfDetail, ApiError> {
        request.validate()?;
        let cover = request.image.as_ref().map(|image| ("image", image));
        send_with_upload(self.client, HttpMethod::Post, ENDPOINT, request, cover)
    }

    pub fn read(&self, id: u64) -> Result<ShelfDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdateShelfRequest) -> Result<ShelfDetail, ApiError> {
        request.validate()?;
        let cover = request.image.as_ref().map(|image| ("image", image));
        send_with_upload(
            self.client,
            HttpMethod::Put,
            &format!("{}/{}", ENDPOINT, id),
            request,
            cover,
        )
    }

    /// Deletes the shelf only; its books stay in place.
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }
}
