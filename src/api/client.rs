//
//  bookstack-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the BookStack API
//!
//! This module provides the core HTTP client for interacting with a BookStack
//! instance. It owns the transport handle and the token pair, performs single
//! requests, and decodes their JSON bodies.
//!
//! ## Features
//!
//! - `Authorization: Token <id>:<secret>` on every request
//! - JSON serialization/deserialization, raw and multipart bodies
//! - Empty/`204` bodies decoded as an empty JSON object
//! - Every failure mapped onto [`ApiError`]
//!
//! Calls are blocking. A [`BookStackClient`] may be shared between threads;
//! it holds no mutable state after construction.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use super::error::ApiError;
use super::request::{HttpMethod, RawResponse, RequestBody, RequestOptions};
use super::resources::{
    Attachments, AuditLog, Books, Chapters, ContentPermissions, Images, Pages, RecycleBin, Roles,
    Search, Shelves, Users,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction-time configuration of a [`BookStackClient`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bookstack_client::api::ClientOptions;
///
/// let options = ClientOptions::new("https://docs.example.com", "token-id", "token-secret")
///     .with_timeout(Duration::from_secs(10))
///     .with_header("X-Request-Source", "nightly-sync");
///
/// assert!(options.verify_ssl);
/// assert_eq!(options.timeout, Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct ClientOptions {
    /// Base URL of the BookStack instance, without the `/api` suffix.
    pub base_url: String,
    /// API token ID.
    pub token_id: String,
    /// API token secret.
    pub token_secret: String,
    /// Whether to verify TLS certificates. Defaults to `true`.
    pub verify_ssl: bool,
    /// Timeout applied to each individual request.
    pub timeout: Duration,
    /// Header overrides merged over the default headers.
    pub headers: Vec<(String, String)>,
}

impl ClientOptions {
    pub fn new(
        base_url: impl Into<String>,
        token_id: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token_id: token_id.into(),
            token_secret: token_secret.into(),
            verify_ssl: true,
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }

    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The value sent in the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}:{}", self.token_id, self.token_secret)
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .finish()
    }
}

/// The main client for a BookStack instance.
///
/// Owns the transport handle and the credentials. Resource families are
/// reached through borrowing accessors such as [`books`](Self::books):
///
/// ```rust,no_run
/// use bookstack_client::api::{BookStackClient, ClientOptions, ListParams};
///
/// let client = BookStackClient::new(ClientOptions::new(
///     "https://docs.example.com",
///     "token-id",
///     "token-secret",
/// ))?;
///
/// let books = client.books().list(&ListParams::default().max_items(20))?;
/// for book in &books.data {
///     println!("{} ({})", book.name, book.slug);
/// }
///
/// client.close();
/// # Ok::<(), bookstack_client::api::ApiError>(())
/// ```
///
/// Dropping the client releases the transport; [`close`](Self::close) makes
/// that explicit. Because `close` consumes the client, the borrow checker
/// rules out use after close.
#[derive(Debug, Clone)]
pub struct BookStackClient {
    /// The underlying HTTP client
    http: Client,
    /// `<base_url>/api`
    api_root: String,
    /// Per-request timeout, reported back on timeout errors
    timeout: Duration,
}

impl BookStackClient {
    /// Creates a client from the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base URL does not parse, a
    /// header override is not a valid header, or the transport cannot be
    /// built.
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        Self::with_transport(options, |builder| builder)
    }

    /// Creates a client, letting the caller adjust the transport builder.
    ///
    /// The closure receives a builder that already carries the default
    /// headers, the timeout and the TLS setting; use it for proxies, extra
    /// root certificates and similar passthrough options.
    pub fn with_transport<F>(options: ClientOptions, configure: F) -> Result<Self, ApiError>
    where
        F: FnOnce(ClientBuilder) -> ClientBuilder,
    {
        let base_url = options.base_url.trim_end_matches('/');
        Url::parse(base_url).map_err(|e| {
            ApiError::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })?;

        let builder = Client::builder()
            .default_headers(default_headers(&options)?)
            .timeout(options.timeout)
            .danger_accept_invalid_certs(!options.verify_ssl);

        let http = configure(builder)
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        let api_root = format!("{}/api", base_url);
        tracing::debug!(api_root = %api_root, verify_ssl = options.verify_ssl, "BookStack client created");

        Ok(Self {
            http,
            api_root,
            timeout: options.timeout,
        })
    }

    /// Releases the transport handle.
    pub fn close(self) {
        tracing::debug!(api_root = %self.api_root, "BookStack client closed");
    }

    /// The API root, `<base_url>/api`.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins an endpoint onto the API root. The leading `/` is optional.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_root, endpoint.trim_start_matches('/'))
    }

    /// Performs one request and returns the undecoded response.
    ///
    /// Statuses of 400 and above are classified into an [`ApiError`];
    /// transport failures likewise. Nothing is retried.
    pub(crate) fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, ApiError> {
        let url = self.endpoint_url(endpoint);
        let mut request = self.http.request(method.to_reqwest(), &url);

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }

        for (name, value) in &options.headers {
            let (name, value) = parse_header(name, value).map_err(ApiError::InvalidArgument)?;
            request = request.header(name, value);
        }

        request = match &options.body {
            None => request,
            Some(RequestBody::Json(body)) => request.json(body),
            Some(RequestBody::Bytes { content_type, data }) => request
                .header(CONTENT_TYPE, content_type.as_str())
                .body(data.clone()),
            Some(RequestBody::Multipart(form)) => request.multipart(form.to_form()?),
        };

        let response = request
            .send()
            .map_err(|e| ApiError::from_transport(e, Some(self.timeout)))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let final_url = response.url().to_string();
        let body = response
            .bytes()
            .map_err(|e| ApiError::from_transport(e, Some(self.timeout)))?
            .to_vec();

        tracing::debug!(method = %method, url = %final_url, status, bytes = body.len(), "BookStack API request");

        let raw = RawResponse {
            status,
            headers,
            body,
            method: method.as_str().to_string(),
            url: final_url,
        };

        if !raw.is_success() {
            return Err(ApiError::from_response(&raw));
        }

        Ok(raw)
    }

    /// Performs one request and decodes its JSON body.
    ///
    /// A `204` status or an empty body yields an empty JSON object.
    ///
    /// # Errors
    ///
    /// - HTTP statuses ≥ 400: the classified [`ApiError`]
    /// - transport failures: `Timeout`, `Connection` or `Request`
    /// - a non-empty success body that is not JSON: `Decode`
    pub fn execute(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        let raw = self.send(method, endpoint, options)?;
        decode_body(&raw)
    }

    /// Performs one request and returns the success body bytes untouched.
    pub fn execute_raw(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Vec<u8>, ApiError> {
        Ok(self.send(method, endpoint, options)?.body)
    }

    /// Performs one request and decodes the body into `T`.
    pub fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.execute(method, endpoint, options)?;
        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            url: self.endpoint_url(endpoint),
            source,
        })
    }

    pub fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(HttpMethod::Get, endpoint, &RequestOptions::default())
    }

    pub fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new().json(to_json(body)?);
        self.request(HttpMethod::Post, endpoint, &options)
    }

    pub fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new().json(to_json(body)?);
        self.request(HttpMethod::Put, endpoint, &options)
    }

    pub fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.execute(HttpMethod::Delete, endpoint, &RequestOptions::default())
            .map(|_| ())
    }

    pub fn books(&self) -> Books<'_> {
        Books::new(self)
    }

    pub fn chapters(&self) -> Chapters<'_> {
        Chapters::new(self)
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self)
    }

    pub fn shelves(&self) -> Shelves<'_> {
        Shelves::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(self)
    }

    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(self)
    }

    pub fn images(&self) -> Images<'_> {
        Images::new(self)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    pub fn audit_log(&self) -> AuditLog<'_> {
        AuditLog::new(self)
    }

    pub fn recycle_bin(&self) -> RecycleBin<'_> {
        RecycleBin::new(self)
    }

    pub fn content_permissions(&self) -> ContentPermissions<'_> {
        ContentPermissions::new(self)
    }
}

fn default_headers(options: &ClientOptions) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&options.authorization()).map_err(|_| {
        ApiError::Configuration("token id/secret contain characters not allowed in a header".to_string())
    })?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&format!("bookstack-client/{}", crate::VERSION))
            .map_err(|e| ApiError::Configuration(e.to_string()))?,
    );

    for (name, value) in &options.headers {
        let (name, value) = parse_header(name, value).map_err(ApiError::Configuration)?;
        headers.insert(name, value);
    }

    Ok(headers)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), String> {
    let header_name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| format!("invalid header name '{}': {}", name, e))?;
    let header_value = HeaderValue::from_str(value.trim())
        .map_err(|e| format!("invalid value for header '{}': {}", name, e))?;
    Ok((header_name, header_value))
}

fn decode_body(raw: &RawResponse) -> Result<Value, ApiError> {
    if raw.status == 204 || raw.body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(&raw.body).map_err(|source| ApiError::Decode {
        url: raw.url.clone(),
        source,
    })
}

pub(crate) fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::InvalidArgument(format!("request body is not serializable: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{FilePart, MultipartForm};
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> BookStackClient {
        BookStackClient::new(ClientOptions::new(server.url(), "abc", "xyz")).unwrap()
    }

    #[test]
    fn test_options_defaults() {
        let options = ClientOptions::new("https://docs.example.com", "id", "s3cr3t");
        assert!(options.verify_ssl);
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.headers.is_empty());
        assert_eq!(options.authorization(), "Token id:s3cr3t");
        assert!(!format!("{:?}", options).contains("s3cr3t"));
    }

    #[test]
    fn test_endpoint_joining() {
        let client =
            BookStackClient::new(ClientOptions::new("https://docs.example.com/", "id", "secret"))
                .unwrap();
        assert_eq!(client.api_root(), "https://docs.example.com/api");
        assert_eq!(client.endpoint_url("/books"), "https://docs.example.com/api/books");
        assert_eq!(client.endpoint_url("books/3"), "https://docs.example.com/api/books/3");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = BookStackClient::new(ClientOptions::new("not a url", "id", "secret"));
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn test_invalid_header_override() {
        let options = ClientOptions::new("https://docs.example.com", "id", "secret")
            .with_header("bad header", "x");
        assert!(matches!(
            BookStackClient::new(options),
            Err(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_sends_auth_and_default_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/books/1")
            .match_header("authorization", "Token abc:xyz")
            .match_header("content-type", "application/json")
            .match_header("user-agent", Matcher::Regex("^bookstack-client/".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1,"name":"Manual"}"#)
            .create();

        let value = client_for(&server)
            .execute(HttpMethod::Get, "/books/1", &RequestOptions::default())
            .unwrap();

        assert_eq!(value, json!({"id": 1, "name": "Manual"}));
        mock.assert();
    }

    #[test]
    fn test_header_overrides() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/books")
            .match_header("x-client", "sync")
            .match_header("x-request", "42")
            .with_status(200)
            .with_body("{}")
            .create();

        let options = ClientOptions::new(server.url(), "abc", "xyz").with_header("X-Client", "sync");
        let client = BookStackClient::new(options).unwrap();
        client
            .execute(
                HttpMethod::Get,
                "books",
                &RequestOptions::new().header("X-Request", "42"),
            )
            .unwrap();
        mock.assert();
    }

    #[test]
    fn test_no_content_is_empty_object() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("DELETE", "/api/books/9").with_status(204).create();

        let value = client_for(&server)
            .execute(HttpMethod::Delete, "/books/9", &RequestOptions::default())
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_empty_success_body_is_empty_object() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/recycle-bin/3")
            .with_status(200)
            .with_body("")
            .create();

        let value = client_for(&server)
            .execute(HttpMethod::Post, "/recycle-bin/3", &RequestOptions::default())
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_invalid_success_body_is_decode_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/books/1")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let err = client_for(&server)
            .execute(HttpMethod::Get, "/books/1", &RequestOptions::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_http_error_is_classified() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/books/77")
            .with_status(404)
            .with_body(r#"{"error":{"code":404,"message":"Book not found"}}"#)
            .create();

        let err = client_for(&server)
            .execute(HttpMethod::Get, "/books/77", &RequestOptions::default())
            .unwrap_err();

        match err {
            ApiError::NotFound(response) => {
                assert_eq!(response.message, "Book not found");
                assert_eq!(response.method, "GET");
                assert_eq!(response.url, format!("{}/api/books/77", server.url()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_query_and_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/books/5")
            .match_query(Matcher::UrlEncoded("notify".into(), "1".into()))
            .match_body(Matcher::Json(json!({"name": "Renamed"})))
            .with_status(200)
            .with_body(r#"{"id":5,"name":"Renamed"}"#)
            .create();

        let options = RequestOptions::new()
            .query("notify", 1)
            .json(json!({"name": "Renamed"}));
        let value = client_for(&server)
            .execute(HttpMethod::Put, "/books/5", &options)
            .unwrap();
        assert_eq!(value["name"], "Renamed");
        mock.assert();
    }

    #[test]
    fn test_multipart_upload() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/image-gallery")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::Regex("name=\"uploaded_to\"".to_string()))
            .with_status(200)
            .with_body(r#"{"id":12}"#)
            .create();

        let form = MultipartForm::new()
            .text("uploaded_to", "4")
            .file(FilePart::new("image", "diagram.png", vec![137, 80, 78, 71]));
        let value = client_for(&server)
            .execute(
                HttpMethod::Post,
                "/image-gallery",
                &RequestOptions::new().multipart(form),
            )
            .unwrap();
        assert_eq!(value["id"], 12);
        mock.assert();
    }

    #[test]
    fn test_typed_request_decode_failure() {
        #[derive(Debug, serde::Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/books/1")
            .with_status(200)
            .with_body(r#"{"id":1}"#)
            .create();

        let err = client_for(&server).get::<Named>("/books/1").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_execute_raw_keeps_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/pages/2/export/markdown")
            .with_status(200)
            .with_header("content-type", "text/markdown")
            .with_body("# Title\n")
            .create();

        let bytes = client_for(&server)
            .execute_raw(
                HttpMethod::Get,
                "/pages/2/export/markdown",
                &RequestOptions::default(),
            )
            .unwrap();
        assert_eq!(bytes, b"# Title\n");
    }

    #[test]
    fn test_transport_failure_is_classified() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = BookStackClient::new(ClientOptions::new(
            format!("http://127.0.0.1:{}", port),
            "abc",
            "xyz",
        ))
        .unwrap();

        let err = client
            .execute(HttpMethod::Get, "/books", &RequestOptions::default())
            .unwrap_err();
        assert!(err.is_connection_error());
    }
}
