//
//  bookstack-client
//  api/resources/books.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{export, send_with_upload};
use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::api::request::HttpMethod;
use crate::models::{Book, BookDetail, CreateBookRequest, ExportFormat, UpdateBookRequest, Validate};

const ENDPOINT: &str = "/books";

/// `/books`
#[derive(Debug, Clone, Copy)]
pub struct Books<'a> {
    client: &'a BookStackClient,
}

impl<'a> Books<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Book>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    /// Creates a book. A cover image, when set, is sent as multipart.
    pub fn create(&self, request: &CreateBookRequest) -> Result<BookDetail, ApiError> {
        request.validate()?;
        let cover = request.image.as_ref().map(|image| ("image", image));
        send_with_upload(self.client, HttpMethod::Post, ENDPOINT, request, cover)
    }

    pub fn read(&self, id: u64) -> Result<BookDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdateBookRequest) -> Result<BookDetail, ApiError> {
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

    /// Moves the book to the recycle bin.
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }

    /// Whole book in the given format, as returned by the server.
    pub fn export(&self, id: u64, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        export(self.client, "books", id, format)
    }
}
