//
//  bookstack-client
//  api/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Offset pagination for BookStack listing endpoints.
//!
//! Every listing endpoint answers with a [`PageEnvelope`]:
//!
//! ```json
//! {"data": [{"id": 1, "name": "..."}], "total": 250}
//! ```
//!
//! and accepts `offset` (zero-based item offset) and `count` (page size)
//! query parameters. [`BookStackClient::fetch_all`] walks those pages one
//! after another and concatenates them into a single collection.
//!
//! # Termination
//!
//! The loop stops as soon as any of these holds:
//!
//! - the accumulated item count reached the `total` reported by the page
//! - the page came back empty (a server whose `total` is never reached
//!   cannot keep the loop alive)
//! - a `max_items` cap was given and has been reached
//!
//! The final page may overshoot the cap; the surplus is dropped. At least one
//! request is always issued, even with `max_items = Some(0)`.
//!
//! A failed page aborts the whole run: the classified [`ApiError`] is
//! returned and the items gathered so far are discarded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::BookStackClient;
use super::error::ApiError;
use super::request::{HttpMethod, RequestOptions};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One page of a listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Items of this page. Absent is treated as empty.
    #[serde(default)]
    pub data: Vec<Value>,

    /// Server-side count of all matching items. Absent is treated as zero.
    #[serde(default)]
    pub total: u64,
}

/// Parameters for a paginated listing.
///
/// # Example
///
/// ```rust
/// use bookstack_client::api::ListParams;
///
/// let params = ListParams::default()
///     .page_size(50)
///     .max_items(120)
///     .sort("-updated_at")
///     .filter("name:like", "%guide%");
///
/// assert_eq!(params.page_size, 50);
/// assert_eq!(params.max_items, Some(120));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    /// Items requested per page (`count`). Must be greater than zero.
    pub page_size: usize,
    /// Upper bound on the number of items returned.
    pub max_items: Option<usize>,
    /// Sort expression, e.g. `+name` or `-created_at`.
    pub sort: Option<String>,
    /// `filter[<field>]=<value>` pairs.
    pub filters: Vec<(String, String)>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_items: None,
            sort: None,
            filters: Vec::new(),
        }
    }
}

impl ListParams {
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Query parameters other than `offset`/`count`.
    pub fn to_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        if let Some(sort) = &self.sort {
            options = options.query("sort", sort);
        }
        for (field, value) in &self.filters {
            options = options.query(format!("filter[{}]", field), value);
        }
        options
    }
}

/// An aggregated listing decoded into `T`.
///
/// `total` is the number of items actually returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
}

/// Appends `offset`/`count` to an endpoint, respecting an existing query.
///
/// ```rust
/// use bookstack_client::api::paginated_url;
///
/// assert_eq!(paginated_url("/books", 0, 100), "/books?offset=0&count=100");
/// assert_eq!(paginated_url("/search?query=x", 20, 10), "/search?query=x&offset=20&count=10");
/// ```
pub fn paginated_url(url: &str, offset: usize, count: usize) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}offset={}&count={}", url, separator, offset, count)
}

impl BookStackClient {
    /// Fetches every page of a listing endpoint and concatenates the items.
    ///
    /// Pages are requested strictly one after another. The client's timeout
    /// applies to each page request on its own; there is no deadline for the
    /// run as a whole.
    ///
    /// # Errors
    ///
    /// - `page_size == 0`: [`ApiError::InvalidArgument`], before any request
    /// - any page failing: its classified error; partial results are dropped
    /// - a page body that is not a JSON object: [`ApiError::Decode`]
    pub fn fetch_all(
        &self,
        method: HttpMethod,
        endpoint: &str,
        page_size: usize,
        max_items: Option<usize>,
        options: &RequestOptions,
    ) -> Result<Vec<Value>, ApiError> {
        if page_size == 0 {
            return Err(ApiError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let mut items: Vec<Value> = Vec::new();
        let mut offset = 0;

        loop {
            let page_endpoint = paginated_url(endpoint, offset, page_size);
            let raw = self.send(method, &page_endpoint, options)?;
            let page: PageEnvelope =
                serde_json::from_slice(&raw.body).map_err(|source| ApiError::Decode {
                    url: raw.url.clone(),
                    source,
                })?;

            let received = page.data.len();
            items.extend(page.data);

            tracing::debug!(endpoint, offset, received, total = page.total, "Fetched page");

            let reached_total = items.len() as u64 >= page.total;
            if received == 0 && !reached_total {
                tracing::warn!(
                    endpoint,
                    offset,
                    total = page.total,
                    collected = items.len(),
                    "Empty page before reported total, stopping"
                );
            }

            let reached_cap = max_items.is_some_and(|max| items.len() >= max);
            if reached_total || received == 0 || reached_cap {
                break;
            }

            offset += page_size;
        }

        if let Some(max) = max_items {
            items.truncate(max);
        }

        Ok(items)
    }

    /// Fetches a listing with GET and decodes each item into `T`.
    pub fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &ListParams,
    ) -> Result<ListResponse<T>, ApiError> {
        let items = self.fetch_all(
            HttpMethod::Get,
            endpoint,
            params.page_size,
            params.max_items,
            &params.to_options(),
        )?;

        let data = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| ApiError::Decode {
                url: self.endpoint_url(endpoint),
                source,
            })?;

        Ok(ListResponse {
            total: data.len(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientOptions;
    use mockito::{Matcher, Mock, ServerGuard};
    use serde_json::json;

    fn client_for(server: &ServerGuard) -> BookStackClient {
        BookStackClient::new(ClientOptions::new(server.url(), "abc", "xyz")).unwrap()
    }

    fn page_query(offset: usize, count: usize) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), offset.to_string()),
            Matcher::UrlEncoded("count".into(), count.to_string()),
        ])
    }

    fn page_body(ids: std::ops::Range<usize>, total: u64) -> String {
        let data: Vec<Value> = ids.map(|id| json!({"id": id, "name": format!("Book {}", id)})).collect();
        json!({"data": data, "total": total}).to_string()
    }

    fn mock_page(
        server: &mut ServerGuard,
        offset: usize,
        ids: std::ops::Range<usize>,
        total: u64,
    ) -> Mock {
        server
            .mock("GET", "/api/books")
            .match_query(page_query(offset, 100))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(ids, total))
            .expect(1)
            .create()
    }

    fn ids(items: &[Value]) -> Vec<u64> {
        items.iter().map(|item| item["id"].as_u64().unwrap()).collect()
    }

    #[test]
    fn test_paginated_url() {
        assert_eq!(paginated_url("/books", 0, 100), "/books?offset=0&count=100");
        assert_eq!(
            paginated_url("/books?sort=-name", 200, 50),
            "/books?sort=-name&offset=200&count=50"
        );
    }

    #[test]
    fn test_fetches_every_page_in_order() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..100, 250);
        let second = mock_page(&mut server, 100, 100..200, 250);
        let third = mock_page(&mut server, 200, 200..250, 250);

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, None, &RequestOptions::default())
            .unwrap();

        assert_eq!(items.len(), 250);
        assert_eq!(ids(&items), (0..250).collect::<Vec<u64>>());
        first.assert();
        second.assert();
        third.assert();
    }

    #[test]
    fn test_max_items_truncates() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..100, 250);

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, Some(30), &RequestOptions::default())
            .unwrap();

        assert_eq!(ids(&items), (0..30).collect::<Vec<u64>>());
        first.assert();
    }

    #[test]
    fn test_max_items_spanning_pages() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..100, 250);
        let second = mock_page(&mut server, 100, 100..200, 250);

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, Some(150), &RequestOptions::default())
            .unwrap();

        assert_eq!(items.len(), 150);
        assert_eq!(ids(&items).last(), Some(&149));
        first.assert();
        second.assert();
    }

    #[test]
    fn test_zero_max_items_still_requests_once() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..100, 250);

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, Some(0), &RequestOptions::default())
            .unwrap();

        assert!(items.is_empty());
        first.assert();
    }

    #[test]
    fn test_empty_page_stops_loop() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..0, 1000);

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, None, &RequestOptions::default())
            .unwrap();

        assert!(items.is_empty());
        first.assert();
    }

    #[test]
    fn test_missing_total_stops_after_first_page() {
        let mut server = mockito::Server::new();
        let first = server
            .mock("GET", "/api/books")
            .match_query(page_query(0, 100))
            .with_status(200)
            .with_body(r#"{"data":[{"id":1},{"id":2}]}"#)
            .expect(1)
            .create();

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, None, &RequestOptions::default())
            .unwrap();

        assert_eq!(ids(&items), vec![1, 2]);
        first.assert();
    }

    #[test]
    fn test_failed_page_discards_partial_results() {
        let mut server = mockito::Server::new();
        let first = mock_page(&mut server, 0, 0..100, 250);
        let failing = server
            .mock("GET", "/api/books")
            .match_query(page_query(100, 100))
            .with_status(500)
            .with_body(r#"{"error":{"message":"Server Error"}}"#)
            .expect(1)
            .create();

        let err = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", DEFAULT_PAGE_SIZE, None, &RequestOptions::default())
            .unwrap_err();

        match err {
            ApiError::ServerError(response) => {
                assert_eq!(response.status, 500);
                assert_eq!(response.message, "Server Error");
                assert!(response.url.contains("offset=100"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        first.assert();
        failing.assert();
    }

    #[test]
    fn test_zero_page_size_rejected_without_request() {
        let mut server = mockito::Server::new();
        let never = server.mock("GET", Matcher::Any).expect(0).create();

        let err = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", 0, None, &RequestOptions::default())
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidArgument(_)));
        never.assert();
    }

    #[test]
    fn test_custom_page_size() {
        let mut server = mockito::Server::new();
        let first = server
            .mock("GET", "/api/books")
            .match_query(page_query(0, 2))
            .with_status(200)
            .with_body(page_body(0..2, 3))
            .expect(1)
            .create();
        let second = server
            .mock("GET", "/api/books")
            .match_query(page_query(2, 2))
            .with_status(200)
            .with_body(page_body(2..3, 3))
            .expect(1)
            .create();

        let items = client_for(&server)
            .fetch_all(HttpMethod::Get, "/books", 2, None, &RequestOptions::default())
            .unwrap();

        assert_eq!(ids(&items), vec![0, 1, 2]);
        first.assert();
        second.assert();
    }

    #[test]
    fn test_list_sends_sort_and_filters() {
        #[derive(Debug, Deserialize)]
        struct Item {
            id: u64,
            name: String,
        }

        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/books")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("count".into(), "100".into()),
                Matcher::UrlEncoded("sort".into(), "-name".into()),
                Matcher::UrlEncoded("filter[name:like]".into(), "%guide%".into()),
            ]))
            .with_status(200)
            .with_body(page_body(0..3, 3))
            .expect(1)
            .create();

        let params = ListParams::default().sort("-name").filter("name:like", "%guide%");
        let response: ListResponse<Item> = client_for(&server).list("/books", &params).unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.data[2].id, 2);
        assert_eq!(response.data[0].name, "Book 0");
        mock.assert();
    }

    #[test]
    fn test_list_item_decode_failure() {
        #[derive(Debug, Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            slug: String,
        }

        let mut server = mockito::Server::new();
        let _mock = mock_page(&mut server, 0, 0..1, 1);

        let err = client_for(&server)
            .list::<Strict>("/books", &ListParams::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
