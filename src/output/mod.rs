//
//  bookstack-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders API results for the terminal:
//!
//! - **Table format**: listings as one row per item, single records as a
//!   field/value table
//! - **JSON format**: pretty-printed JSON for scripting (`--json`)
//!
//! Status messages go through [`OutputWriter`] and are colored with `console`
//! when the terminal supports it.

mod json;
mod table;

pub use json::*;
pub use table::*;

use anyhow::Result;
use serde::Serialize;

/// Output formats understood by [`OutputWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes results and status messages in the configured format.
///
/// Color is detected from the terminal; piping output or setting `NO_COLOR`
/// turns it off.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a single record.
    ///
    /// Tables show the record's top-level fields; see [`detail_table`].
    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                let value = serde_json::to_value(value)?;
                println!("{}", detail_table(&value, self.color));
                Ok(())
            }
        }
    }

    /// Writes a listing, one row per item in table mode.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values),
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results");
                } else {
                    println!("{}", list_table(values, self.color));
                }
                Ok(())
            }
        }
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes an informational message to stderr, keeping stdout clean for data.
    pub fn write_info(&self, msg: &str) {
        eprintln!("{}", msg);
    }

    /// Writes a success message to stderr.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }
}
