//
//  bookstack-client
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bookstack search` - one page of search results
//!
//! The query uses BookStack search syntax:
//!
//! ```bash
//! bookstack search "deploy {type:page} [team=ops]"
//! bookstack search backups --page 2 --count 50 --json
//! ```

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;

/// Search content
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Search query
    pub query: String,

    /// Result page, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub count: Option<u32>,
}

impl SearchCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();
        let response = client.search().query(&self.query, self.page, self.count)?;

        if global.json {
            return writer.write(&response);
        }

        writer.write_list(&response.data)?;
        if !response.data.is_empty() {
            writer.write_info(&format!(
                "Showing {} of {} results",
                response.data.len(),
                response.total
            ));
        }
        Ok(())
    }
}
