//
//  bookstack-client
//  cli/get.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bookstack get` - show one item by ID

use anyhow::{bail, Result};
use clap::Args;

use super::{Family, GlobalOptions};

/// Show one item
#[derive(Args, Debug)]
pub struct GetCommand {
    /// Entity family
    #[arg(value_enum)]
    pub family: Family,

    /// Item ID
    pub id: u64,
}

impl GetCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        if matches!(self.family, Family::AuditLog | Family::RecycleBin) {
            bail!(
                "'{:?}' entries cannot be read individually; use 'bookstack list' instead",
                self.family
            );
        }

        let client = global.client()?;
        let writer = global.output();
        let id = self.id;

        match self.family {
            Family::Books => writer.write(&client.books().read(id)?),
            Family::Chapters => writer.write(&client.chapters().read(id)?),
            Family::Pages => writer.write(&client.pages().read(id)?),
            Family::Shelves => writer.write(&client.shelves().read(id)?),
            Family::Users => writer.write(&client.users().read(id)?),
            Family::Roles => writer.write(&client.roles().read(id)?),
            Family::Attachments => writer.write(&client.attachments().read(id)?),
            Family::Images => writer.write(&client.images().read(id)?),
            Family::AuditLog | Family::RecycleBin => Ok(()),
        }
    }
}
