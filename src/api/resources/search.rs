//
//  bookstack-client
//  api/resources/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::request::{HttpMethod, RequestOptions};
use crate::models::SearchResponse;

const ENDPOINT: &str = "/search";

/// `/search`
///
/// Unlike the listing endpoints, search returns exactly the page asked for.
/// `page` is 1-based; `count` is the page size.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a BookStackClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    /// Runs a query using BookStack search syntax, e.g. `setup {type:page} [team=ops]`.
    pub fn query(
        &self,
        query: &str,
        page: Option<u32>,
        count: Option<u32>,
    ) -> Result<SearchResponse, ApiError> {
        let mut options = RequestOptions::new().query("query", query);
        if let Some(page) = page {
            options = options.query("page", page);
        }
        if let Some(count) = count {
            options = options.query("count", count);
        }
        self.client.request(HttpMethod::Get, ENDPOINT, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::client_for;
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_single_request_with_paging() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "setup {type:page}".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("count".into(), "5".into()),
            ]))
            .with_body(r#"{"data": [], "total": 12}"#)
            .expect(1)
            .create();

        let results = client_for(&server)
            .search()
            .query("setup {type:page}", Some(2), Some(5))
            .unwrap();

        mock.assert();
        assert_eq!(results.total, 12);
        assert!(results.data.is_empty());
    }

    #[test]
    fn test_query_only() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::Exact("query=runbook".into()))
            .with_body(r#"{"data": [], "total": 0}"#)
            .create();

        client_for(&server).search().query("runbook", None, None).unwrap();
        mock.assert();
    }
}
