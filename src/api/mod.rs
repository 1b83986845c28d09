//
//  bookstack-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Blocking HTTP client for the BookStack REST API (`<base_url>/api`).
//!
//! ## Architecture
//!
//! - [`client`]: client construction, authentication and the request executor
//! - [`request`]: request/response descriptions (method, query, headers, body)
//! - [`pagination`]: offset/count pagination over listing endpoints
//! - [`error`]: error taxonomy and HTTP status classification
//! - [`resources`]: typed facades per entity family (books, pages, ...)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use bookstack_client::api::{BookStackClient, ClientOptions, HttpMethod, RequestOptions};
//!
//! let options = ClientOptions::new("https://wiki.example.com", "token-id", "token-secret")
//!     .with_timeout(Duration::from_secs(10));
//! let client = BookStackClient::new(options).expect("valid options");
//!
//! // Typed facade
//! let page = client.pages().read(12).expect("page 12");
//!
//! // Raw access through the same pipeline
//! let value = client
//!     .execute(HttpMethod::Get, "/system", &RequestOptions::default())
//!     .expect("system info");
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`ApiError`]:
//!
//! - `AuthenticationFailed`: 401
//! - `PermissionDenied`: 403
//! - `NotFound`: 404
//! - `ValidationFailed`: 422, with per-field messages
//! - `RateLimited`: 429, with `Retry-After`
//! - `ServerError`: 5xx
//! - `Timeout` / `Connection`: no response received

pub mod client;
pub mod error;
pub mod pagination;
pub mod request;
pub mod resources;

pub use client::{BookStackClient, ClientOptions, DEFAULT_TIMEOUT};
pub use error::{ApiError, ErrorResponse};
pub use pagination::{paginated_url, ListParams, ListResponse, PageEnvelope, DEFAULT_PAGE_SIZE};
pub use request::{FilePart, HttpMethod, MultipartForm, RawResponse, RequestBody, RequestOptions};
