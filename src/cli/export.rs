//
//  bookstack-client
//  cli/export.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bookstack export` - download a book, chapter or page
//!
//! ```bash
//! bookstack export page 42 --format markdown
//! bookstack export book 3 --format pdf --output handbook.pdf
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::models::ExportFormat;

use super::GlobalOptions;

/// Export a book, chapter or page
#[derive(Args, Debug)]
pub struct ExportCommand {
    /// What to export
    #[arg(value_enum)]
    pub kind: ExportKind,

    /// Item ID
    pub id: u64,

    /// Export format (html, pdf, plaintext, markdown)
    #[arg(long, short = 'F', default_value = "markdown")]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Exportable entity kinds.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Book,
    Chapter,
    Page,
}

impl ExportCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let content = match self.kind {
            ExportKind::Book => client.books().export(self.id, self.format)?,
            ExportKind::Chapter => client.chapters().export(self.id, self.format)?,
            ExportKind::Page => client.pages().export(self.id, self.format)?,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                global.output().write_success(&format!(
                    "Exported {:?} {} as {} to {} ({} bytes)",
                    self.kind,
                    self.id,
                    self.format,
                    path.display(),
                    content.len()
                ));
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(&content)?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_export_arguments() {
        let cli = Cli::try_parse_from([
            "bookstack", "export", "book", "3", "--format", "pdf", "-o", "out.pdf",
        ])
        .unwrap();

        match cli.command {
            Commands::Export(cmd) => {
                assert_eq!(cmd.kind, ExportKind::Book);
                assert_eq!(cmd.id, 3);
                assert_eq!(cmd.format, ExportFormat::Pdf);
                assert_eq!(cmd.output, Some(PathBuf::from("out.pdf")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_export_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["bookstack", "export", "page", "42"]).unwrap();
        match cli.command {
            Commands::Export(cmd) => assert_eq!(cmd.format, ExportFormat::Markdown),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["bookstack", "export", "page", "1", "--format", "docx"]).is_err());
    }
}
