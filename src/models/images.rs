//
//  bookstack-client
//  models/images.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_optional_length, Links, Upload, UserRef, Validate};
use crate::api::ApiError;

const MAX_IMAGE_NAME_LENGTH: usize = 180;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Gallery,
    Drawio,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Drawio => "drawio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageThumbs {
    pub gallery: String,
    pub display: String,
}

/// Gallery image as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub path: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub uploaded_to: u64,
    pub created_by: u64,
    pub updated_by: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDetail {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub path: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub uploaded_to: u64,
    pub created_by: UserRef,
    pub updated_by: UserRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub thumbs: ImageThumbs,
    /// Embed snippets
    pub content: Links,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateImageRequest {
    pub image_type: ImageType,
    /// Page the image is uploaded to
    pub uploaded_to: u64,
    pub image: Upload,
    /// Defaults to the file name on the server
    pub name: Option<String>,
}

impl CreateImageRequest {
    pub fn gallery(uploaded_to: u64, image: Upload) -> Self {
        Self {
            image_type: ImageType::Gallery,
            uploaded_to,
            image,
            name: None,
        }
    }
}

impl Validate for CreateImageRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 0, MAX_IMAGE_NAME_LENGTH)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateImageRequest {
    pub name: Option<String>,
    /// Replacement file content
    pub image: Option<Upload>,
}

impl Validate for UpdateImageRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_length("name", self.name.as_deref(), 0, MAX_IMAGE_NAME_LENGTH)
    }
}
