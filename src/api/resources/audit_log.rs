//
//  bookstack-client
//  api/resources/audit_log.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::models::AuditLogEntry;

/// `/audit-log`, read-only. Requires the "settings" and "users" permissions.
#[derive(Debug, Clone, Copy)]
pub struct AuditLog<'a> {
    client: &'a BookStackClient,
}

impl<'a> AuditLog<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<AuditLogEntry>, ApiError> {
        self.client.list("/audit-log", params)
    }
}
