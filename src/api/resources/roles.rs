//
//  bookstack-client
//  api/resources/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::BookStackClient;
use crate::api::error::ApiError;
use crate::api::pagination::{ListParams, ListResponse};
use crate::models::{CreateRoleRequest, Role, RoleDetail, UpdateRoleRequest, Validate};

const ENDPOINT: &str = "/roles";

/// `/roles`
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    client: &'a BookStackClient,
}

impl<'a> Roles<'a> {
    pub(crate) fn new(client: &'a BookStackClient) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListParams) -> Result<ListResponse<Role>, ApiError> {
        self.client.list(ENDPOINT, params)
    }

    pub fn create(&self, request: &CreateRoleRequest) -> Result<RoleDetail, ApiError> {
        request.validate()?;
        self.client.post(ENDPOINT, request)
    }

    pub fn read(&self, id: u64) -> Result<RoleDetail, ApiError> {
        self.client.get(&format!("{}/{}", ENDPOINT, id))
    }

    pub fn update(&self, id: u64, request: &UpdateRoleRequest) -> Result<RoleDetail, ApiError> {
        request.validate()?;
        self.client.put(&format!("{}/{}", ENDPOINT, id), request)
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, stamp};
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_create_role_with_permissions() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/roles")
            .match_body(Matcher::Json(json!({
                "display_name": "Reviewers",
                "permissions": ["content-export"]
            })))
            .with_body(
                stamp(json!({
                    "id": 9,
                    "display_name": "Reviewers",
                    "description": "",
                    "system_name": "",
                    "external_auth_id": "",
                    "mfa_enforced": false,
                    "permissions": ["content-export"],
                    "users": []
                }))
                .to_string(),
            )
            .create();

        let mut request = CreateRoleRequest::new("Reviewers");
        request.permissions = Some(vec!["content-export".to_string()]);
        let role = client_for(&server).roles().create(&request).unwrap();

        mock.assert();
        assert_eq!(role.permissions, vec!["content-export".to_string()]);
    }

    #[test]
    fn test_list_roles_respects_cap() {
        let mut server = mockito::Server::new();
        let roles: Vec<_> = (1..=3)
            .map(|id| {
                stamp(json!({
                    "id": id,
                    "display_name": format!("Role {}", id),
                    "mfa_enforced": false,
                    "users_count": 0,
                    "permissions_count": 4
                }))
            })
            .collect();
        let mock = server
            .mock("GET", "/api/roles")
            .match_query(Matcher::UrlEncoded("count".into(), "100".into()))
            .with_body(json!({"data": roles, "total": 3}).to_string())
            .create();

        let listed = client_for(&server)
            .roles()
            .list(&ListParams::default().max_items(2))
            .unwrap();

        mock.assert();
        assert_eq!(listed.total, 2);
        assert_eq!(listed.data[1].display_name, "Role 2");
    }

    #[test]
    fn test_delete_role() {
        let mut server = mockito::Server::new();
        let mock = server.mock("DELETE", "/api/roles/9").with_status(204).create();

        client_for(&server).roles().delete(9).unwrap();
        mock.assert();
    }
}
