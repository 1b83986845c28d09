//
//  bookstack-client
//  models/audit_log.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// One recorded system event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: u64,
    /// Event name such as `page_update` or `auth_login`
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub detail: String,
    pub user_id: u64,
    #[serde(default)]
    pub loggable_id: Option<u64>,
    /// `bookshelf`, `book`, `chapter` or `page` for content events
    #[serde(default)]
    pub loggable_type: Option<String>,
    #[serde(default)]
    pub ip: String,
    pub created_at: DateTime<Utc>,
    pub user: UserRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_loggable() {
        let entry: AuditLogEntry = serde_json::from_value(serde_json::json!({
            "id": 7,
            "type": "auth_login",
            "detail": "standard; (1) Admin",
            "user_id": 1,
            "loggable_id": null,
            "loggable_type": null,
            "ip": "127.0.0.1",
            "created_at": "2024-06-01T10:00:00.000000Z",
            "user": {"id": 1, "name": "Admin", "slug": "admin"}
        }))
        .unwrap();
        assert_eq!(entry.event_type, "auth_login");
        assert!(entry.loggable_type.is_none());
    }
}
