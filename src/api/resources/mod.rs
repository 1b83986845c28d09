//
//  bookstack-client
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed facades, one per BookStack entity family.
//!
//! A facade borrows the [`BookStackClient`] and fixes the endpoint path, so
//! calling code reads like the API reference:
//!
//! ```rust,no_run
//! use bookstack_client::api::{BookStackClient, ClientOptions, ListParams};
//! use bookstack_client::models::CreateBookRequest;
//!
//! # fn main() -> Result<(), bookstack_client::api::ApiError> {
//! let client = BookStackClient::new(ClientOptions::new(
//!     "https://wiki.example.com",
//!     "token-id",
//!     "token-secret",
//! ))?;
//!
//! let recent = client.books().list(&ListParams::default().sort("-updated_at").max_items(10))?;
//! let book = client.books().create(&CreateBookRequest::new("Runbooks"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Listing goes through the paginator; every other operation is a single
//! request. Payloads are validated before anything is sent.

mod attachments;
mod audit_log;
mod books;
mod chapters;
mod images;
mod pages;
mod permissions;
mod recycle_bin;
mod roles;
mod search;
mod shelves;
mod users;

pub use attachments::Attachments;
pub use audit_log::AuditLog;
pub use books::Books;
pub use chapters::Chapters;
pub use images::Images;
pub use pages::Pages;
pub use permissions::ContentPermissions;
pub use recycle_bin::RecycleBin;
pub use roles::Roles;
pub use search::Search;
pub use shelves::Shelves;
pub use users::Users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::client::{to_json, BookStackClient};
use super::error::ApiError;
use super::request::{FilePart, HttpMethod, MultipartForm, RequestOptions};
use crate::models::{ExportFormat, Upload};

/// Form field Laravel reads to treat a multipart POST as another method.
const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Fetches `/{family}/{id}/export/{format}` as raw bytes.
fn export(
    client: &BookStackClient,
    family: &str,
    id: u64,
    format: ExportFormat,
) -> Result<Vec<u8>, ApiError> {
    client.execute_raw(
        HttpMethod::Get,
        &format!("/{}/{}/export/{}", family, id, format.as_str()),
        &RequestOptions::default(),
    )
}

/// Sends `body` as JSON, or as a multipart form when a file is attached.
///
/// Multipart updates go out as POST with `_method=PUT`, since the server
/// does not parse multipart bodies on PUT.
fn send_with_upload<T, B>(
    client: &BookStackClient,
    method: HttpMethod,
    endpoint: &str,
    body: &B,
    upload: Option<(&str, &Upload)>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let payload = to_json(body)?;
    match upload {
        None => client.request(method, endpoint, &RequestOptions::new().json(payload)),
        Some((field, upload)) => {
            let mut form = MultipartForm {
                fields: form_fields(&payload),
                files: vec![FilePart::new(field, upload.file_name.clone(), upload.data.clone())],
            };
            if method != HttpMethod::Post {
                form.fields
                    .push((METHOD_OVERRIDE_FIELD.to_string(), method.as_str().to_string()));
            }
            client.request(HttpMethod::Post, endpoint, &RequestOptions::new().multipart(form))
        }
    }
}

/// Flattens a JSON object into form fields the way PHP parses them back:
/// `tags[0][name]=…`, booleans as `1`/`0`, nulls dropped.
pub(crate) fn form_fields(value: &Value) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    if let Value::Object(map) = value {
        for (key, value) in map {
            flatten_into(&mut fields, key.clone(), value);
        }
    }
    fields
}

fn flatten_into(fields: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => fields.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => fields.push((key, number.to_string())),
        Value::String(text) => fields.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(fields, format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                flatten_into(fields, format!("{}[{}]", key, name), item);
            }
        }
    }
}
