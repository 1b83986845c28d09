//
//  bookstack-client
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::{to_json, BookStackClient};
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::api::request::{HttpMethod, RequestOptions};
use crate::models::{
    CreateUserRequest, DeleteUserRequest, UpdateUserRequest, User, UserDetail, Validate,
};

const ENDPOINT: &str = "/users";

/// `/users`
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a BookStackClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<User>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    pub fn create(&self, request: &CreateUserRequest) -> Result<UserDetail, ApiError> {
        request.validate()?;
        self.client.post(ENDPOINT, request)
    }

    pub fn read(&self, id: u64) -> Result<UserDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdateUserRequest) -> Result<UserDetail, ApiError> {
        request.validate()?;
        self.client.put(&format!("{}/{}", ENDPOINT, id), request)
    }

    /// Deletes a user, handing their content to `migrate_ownership_id` when given.
    pub fn delete(&self, id: u64, migrate_ownership_id: Option<u64>) -> Result<(), ApiError> {
        let body = DeleteUserRequest {
            migrate_ownership_id,
        };
        self.client
            .execute(
                HttpMethod::Delete,
                &format!("{}/{}", ENDPOINT, id),
                &RequestOptions::new().json(to_json(&body)?),
            )
            .map(|_| ())
    }
}
