//
//  bookstack-client
//  models/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_length, Validate};
use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: u64,
    pub display_name: String,
}

/// User as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub external_auth_id: String,
    pub slug: String,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
    pub profile_url: String,
    pub edit_url: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub external_auth_id: String,
    pub slug: String,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
    pub profile_url: String,
    pub edit_url: String,
    pub avatar_url: String,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Role IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invite: Option<bool>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 1, 100)?;
        check_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name {
            check_length("name", name, 1, 100)?;
        }
        match &self.email {
            Some(email) => check_email(email),
            None => Ok(()),
        }
    }
}

/// Body of a user deletion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteUserRequest {
    /// User who takes over the deleted user's content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_ownership_id: Option<u64>,
}

/// Shape check only; the server does the real validation.
fn check_email(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidArgument(format!(
            "email '{}' is not a valid address",
            email
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(CreateUserRequest::new("Ada", "ada@example.com").validate().is_ok());
        assert!(CreateUserRequest::new("Ada", "ada.example.com").validate().is_err());
        assert!(CreateUserRequest::new("Ada", "@example.com").validate().is_err());
        assert!(CreateUserRequest::new("Ada", "ada@@example.com").validate().is_err());
        assert!(CreateUserRequest::new("Ada", "ada @example.com").validate().is_err());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        assert!(UpdateUserRequest::default().validate().is_ok());
        let request = UpdateUserRequest {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_decodes_without_activity() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Admin",
            "email": "admin@admin.com",
            "created_at": "2023-01-01T00:00:00.000000Z",
            "updated_at": "2023-01-01T00:00:00.000000Z",
            "external_auth_id": "",
            "slug": "admin",
            "last_activity_at": null,
            "profile_url": "https://wiki.test/user/admin",
            "edit_url": "https://wiki.test/settings/users/1",
            "avatar_url": "https://wiki.test/uploads/avatar.png"
        }))
        .unwrap();
        assert!(user.last_activity_at.is_none());
    }
}
