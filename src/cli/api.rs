//
//  bookstack-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends any request through the same authenticated pipeline as the typed
//! commands, so errors are classified and exit codes match.
//!
//! ## Examples
//!
//! ```bash
//! # Read system information
//! bookstack api /system
//!
//! # Create a page with POST
//! bookstack api -X POST /pages -F book_id=3 -F name="Runbook" -F markdown="# Steps"
//!
//! # Dotted keys nest objects, JSON literals pass through
//! bookstack api -X PUT /content-permissions/page/42 -F fallback_permissions.inheriting=true
//! bookstack api -X PUT /pages/42 -F 'tags=[{"name":"team","value":"ops"}]'
//!
//! # Collect every page of a listing
//! bookstack api /pages --paginate --limit 500
//! ```

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::{Map, Value};

use crate::api::{HttpMethod, RequestOptions, DEFAULT_PAGE_SIZE};
use crate::output::{select_path, write_json};

use super::{parse_key_value, GlobalOptions};

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint relative to /api (e.g., /books/3)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE, OPTIONS, HEAD)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request headers as 'Name: Value' (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Body fields as key=value with typed values (dots nest)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Body fields as key=value, always strings
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Query parameters as key=value
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Read the JSON request body from a file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,

    /// Walk every page of a listing endpoint
    #[arg(long)]
    pub paginate: bool,

    /// Maximum number of items when paginating
    #[arg(long, requires = "paginate")]
    pub limit: Option<usize>,

    /// Items per page when paginating
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Print only the value at a dotted path (e.g. data.0.name)
    #[arg(long)]
    pub select: Option<String>,

    /// Include response status and headers in output
    #[arg(long, short = 'i', conflicts_with = "paginate")]
    pub include: bool,

    /// Suppress output
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method: HttpMethod = self.method.parse()?;
        let options = self.build_options()?;
        let client = global.client()?;

        let value = if self.paginate {
            let items =
                client.fetch_all(method, &self.endpoint, self.page_size, self.limit, &options)?;
            let total = items.len();
            serde_json::json!({
                "data": items,
                "total": total,
            })
        } else if self.include {
            let raw = client.send(method, &self.endpoint, &options)?;
            if !self.silent {
                println!("{} {}", style("HTTP").dim(), raw.status);
                for (name, value) in raw.headers.iter() {
                    println!("{}: {}", name, value.to_str().unwrap_or(""));
                }
                println!();
            }
            decode_or_text(&raw.body)
        } else {
            client.execute(method, &self.endpoint, &options)?
        };

        if self.silent {
            return Ok(());
        }

        match &self.select {
            Some(path) => match select_path(&value, path)? {
                Value::String(s) => println!("{}", s),
                selected => write_json(selected)?,
            },
            None => write_json(&value)?,
        }
        Ok(())
    }

    fn build_options(&self) -> Result<RequestOptions> {
        let mut options = RequestOptions::new();

        for query in &self.query {
            let (key, value) = parse_key_value(query)?;
            options = options.query(key, value);
        }

        for header in &self.header {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("Invalid header format: {}. Expected 'Name: Value'", header))?;
            options = options.header(name.trim(), value.trim());
        }

        if let Some(body) = self.build_body()? {
            options = options.json(body);
        }
        Ok(options)
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
            };
            let value = serde_json::from_str(&content)
                .with_context(|| format!("{} is not valid JSON", input))?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, value) = parse_key_value(field)?;
            set_nested_value(&mut body, &key, parse_field_value(&value));
        }
        for field in &self.raw_field {
            let (key, value) = parse_key_value(field)?;
            set_nested_value(&mut body, &key, Value::String(value));
        }
        Ok(Some(Value::Object(body)))
    }
}

/// Interprets a `-F` value: booleans, null, numbers and JSON literals keep
/// their type, everything else is a string.
fn parse_field_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

/// Inserts `value` at a dotted key, creating intermediate objects.
fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

fn decode_or_text(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
