//
//  bookstack-client
//  models/attachments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_length, check_optional_length, Links, Upload, UserRef, Validate};
use crate::api::ApiError;

const MAX_ATTACHMENT_NAME_LENGTH: usize = 255;
const MAX_LINK_LENGTH: usize = 2000;

/// Attachment as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    /// Page the attachment belongs to
    pub uploaded_to: u64,
    /// `true` for links, `false` for uploaded files
    pub external: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: u64,
    pub updated_by: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    pub uploaded_to: u64,
    pub external: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub links: Links,
    /// The URL for links, base64 file data for uploads
    pub content: String,
}

/// What an attachment holds.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentContent {
    /// External URL, sent as JSON
    Link(String),
    /// Uploaded file, sent as multipart
    File(Upload),
}

impl AttachmentContent {
    fn validate(&self) -> Result<(), ApiError> {
        match self {
            Self::Link(link) => check_length("link", link, 1, MAX_LINK_LENGTH),
            Self::File(upload) if upload.file_name.is_empty() => Err(ApiError::InvalidArgument(
                "file name must not be empty".to_string(),
            )),
            Self::File(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAttachmentRequest {
    pub name: String,
    pub uploaded_to: u64,
    pub content: AttachmentContent,
}

impl CreateAttachmentRequest {
    pub fn link(name: impl Into<String>, uploaded_to: u64, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uploaded_to,
            content: AttachmentContent::Link(link.into()),
        }
    }

    pub fn file(name: impl Into<String>, uploaded_to: u64, upload: Upload) -> Self {
        Self {
            name: name.into(),
            uploaded_to,
            content: AttachmentContent::File(upload),
        }
    }
}

impl Validate for CreateAttachmentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 1, MAX_ATTACHMENT_NAME_LENGTH)?;
        self.content.validate()
    }
}

/// Replacing `content` can turn a link into a file and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAttachmentRequest {
    pub name: Option<String>,
    pub uploaded_to: Option<u64>,
    pub content: Option<AttachmentContent>,
}

impl Validate for UpdateAttachmentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 1, MAX_ATTACHMENT_NAME_LENGTH)?;
        match &self.content {
            Some(content) => content.validate(),
            None => Ok(()),
        }
    }
}
