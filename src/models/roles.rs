//
//  bookstack-client
//  models/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_length, check_optional_length, UserRef, Validate};
use crate::api::ApiError;

const MAX_DISPLAY_NAME_LENGTH: usize = 180;
const MAX_ROLE_DESCRIPTION_LENGTH: usize = 180;

/// Role as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub external_auth_id: String,
    pub mfa_enforced: bool,
    pub users_count: u64,
    pub permissions_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDetail {
    pub id: u64,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub external_auth_id: String,
    pub mfa_enforced: bool,
    /// Permission names such as `page-view-all`
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRoleRequest {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl CreateRoleRequest {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateRoleRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("display_name", &self.display_name, 3, MAX_DISPLAY_NAME_LENGTH)?;
        check_optional_length(
            "description",
            self.description.as_deref(),
            0,
            MAX_ROLE_DESCRIPTION_LENGTH,
        )
    }
}

/// `permissions` replaces the role's full permission set when set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Validate for UpdateRoleRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length(
            "display_name",
            self.display_name.as_deref(),
            3,
            MAX_DISPLAY_NAME_LENGTH,
        )?;
        check_optional_length(
            "description",
            self.description.as_deref(),
            0,
            MAX_ROLE_DESCRIPTION_LENGTH,
        )
    }
}
