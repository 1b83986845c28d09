//
//  bookstack-client
//  api/resources/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::models::{ContentType, EntityPermissions, UpdateEntityPermissionsRequest};

/// `/content-permissions/{type}/{id}`
#[derive(Debug, Clone, Copy)]
pub struct ContentPermissions<'a> {
    client: &'a BookStackClient,
}

impl<'a> ContentPermissions<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn read(&self, content_type: ContentType, id: u64) -> Result<EntityPermissions, ApiError> {
        self.client.get(&endpoint(content_type, id))
    }

    pub fn update(
        &self,
        content_type: ContentType,
        id: u64,
        request: &UpdateEntityPermissionsRequest,
    ) -> Result<EntityPermissions, ApiError> {
        self.client.put(&endpoint(content_type, id), request)
    }
}

fn endpoint(content_type: ContentType, id: u64) -> String {
    format!("/content-permissions/{}/{}", content_type.as_str(), id)
}
