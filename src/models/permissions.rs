//
//  bookstack-client
//  models/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserRef;
use crate::api::ApiError;

/// Item kinds that carry their own permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Page,
    Chapter,
    Book,
    Bookshelf,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Chapter => "chapter",
            Self::Book => "book",
            Self::Bookshelf => "bookshelf",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "chapter" => Ok(Self::Chapter),
            "book" => Ok(Self::Book),
            "bookshelf" | "shelf" => Ok(Self::Bookshelf),
            _ => Err(ApiError::InvalidArgument(format!(
                "unknown content type '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionRole {
    pub id: u64,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePermission {
    pub role_id: u64,
    pub view: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    /// Absent in update payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PermissionRole>,
}

impl RolePermission {
    pub fn new(role_id: u64) -> Self {
        Self {
            role_id,
            view: false,
            create: false,
            update: false,
            delete: false,
            role: None,
        }
    }
}

/// Permissions for roles without an explicit entry.
///
/// With `inheriting` set, the individual flags are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FallbackPermissions {
    pub inheriting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPermissions {
    pub owner: UserRef,
    #[serde(default)]
    pub role_permissions: Vec<RolePermission>,
    pub fallback_permissions: FallbackPermissions,
}

/// `role_permissions` replaces every role entry when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEntityPermissionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_permissions: Option<Vec<RolePermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_permissions: Option<FallbackPermissions>,
}
