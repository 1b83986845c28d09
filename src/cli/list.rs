//
//  bookstack-client
//  cli/list.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bookstack list` - paginated listings for every entity family
//!
//! ```bash
//! bookstack list books --sort -updated_at --limit 20
//! bookstack list pages --filter book_id=3 --filter draft=false
//! bookstack list audit-log --filter type=page_update --json
//! ```

use anyhow::Result;
use clap::Args;

use crate::api::{ListParams, DEFAULT_PAGE_SIZE};

use super::{parse_key_value, Family, GlobalOptions};

/// List items of an entity family
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Entity family to list
    #[arg(value_enum)]
    pub family: Family,

    /// Maximum number of items to return
    #[arg(long, short = 'L')]
    pub limit: Option<usize>,

    /// Items requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Sort field, prefixed with + or - (e.g. -created_at)
    #[arg(long, short = 's', allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Filter as field=value (can be specified multiple times)
    #[arg(long, short = 'f', action = clap::ArgAction::Append)]
    pub filter: Vec<String>,
}

impl ListCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let params = self.params()?;
        let client = global.client()?;
        let writer = global.output();

        match self.family {
            Family::Books => writer.write_list(&client.books().list(&params)?.data),
            Family::Chapters => writer.write_list(&client.chapters().list(&params)?.data),
            Family::Pages => writer.write_list(&client.pages().list(&params)?.data),
            Family::Shelves => writer.write_list(&client.shelves().list(&params)?.data),
            Family::Users => writer.write_list(&client.users().list(&params)?.data),
            Family::Roles => writer.write_list(&client.roles().list(&params)?.data),
            Family::Attachments => writer.write_list(&client.attachments().list(&params)?.data),
            Family::Images => writer.write_list(&client.images().list(&params)?.data),
            Family::AuditLog => writer.write_list(&client.audit_log().list(&params)?.data),
            Family::RecycleBin => writer.write_list(&client.recycle_bin().list(&params)?.data),
        }
    }

    fn params(&self) -> Result<ListParams> {
        let mut params = ListParams::default().page_size(self.page_size);
        if let Some(limit) = self.limit {
            params = params.max_items(limit);
        }
        if let Some(sort) = &self.sort {
            params = params.sort(sort);
        }
        for filter in &self.filter {
            let (field, value) = parse_key_value(filter)?;
            params = params.filter(field, value);
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(family: Family) -> ListCommand {
        ListCommand {
            family,
            limit: None,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            filter: Vec::new(),
        }
    }

    #[test]
    fn test_params_from_flags() {
        let cmd = ListCommand {
            limit: Some(20),
            page_size: 50,
            sort: Some("-updated_at".to_string()),
            filter: vec!["book_id=3".to_string(), "name:like=%setup%".to_string()],
            ..command(Family::Pages)
        };

        let params = cmd.params().unwrap();
        assert_eq!(params.page_size, 50);
        assert_eq!(params.max_items, Some(20));

        let options = params.to_options();
        assert!(options.query.contains(&("sort".to_string(), "-updated_at".to_string())));
        assert!(options.query.contains(&("filter[book_id]".to_string(), "3".to_string())));
        assert!(options
            .query
            .contains(&("filter[name:like]".to_string(), "%setup%".to_string())));
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        let cmd = ListCommand {
            filter: vec!["book_id".to_string()],
            ..command(Family::Books)
        };
        assert!(cmd.params().is_err());
    }
}
