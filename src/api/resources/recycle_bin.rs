//
//  bookstack-client
//  api/resources/recycle_bin.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::api::request::{HttpMethod, RequestOptions};
use crate::models::{DestroyResponse, RecycleBinItem, RestoreResponse};

const ENDPOINT: &str = "/recycle-bin";

/// `/recycle-bin`
///
/// IDs here are deletion IDs (`RecycleBinItem::id`), not the IDs of the
/// deleted items.
#[derive(Debug, Clone, Copy)]
pub struct RecycleBin<'a> {
    client: &'a BookStackClient,
}

impl<'a> RecycleBin<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<RecycleBinItem>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    /// Restores a deletion; returns how many items came back.
    pub fn restore(&self, deletion_id: u64) -> Result<u64, ApiError> {
        let response: RestoreResponse = self.client.request(
            HttpMethod::Put,
            &format!("{}/{}", ENDPOINT, deletion_id),
            &RequestOptions::default(),
        )?;
        Ok(response.restore_count)
    }

    /// Permanently destroys a deletion; returns how many items were removed.
    pub fn destroy(&self, deletion_id: u64) -> Result<u64, ApiError> {
        let response: DestroyResponse = self.client.request(
            HttpMethod::Delete,
            &format!("{}/{}", ENDPOINT, deletion_id),
            &RequestOptions::default(),
        )?;
        Ok(response.delete_count)
    }
}
