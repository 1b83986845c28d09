//
//  bookstack-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for scripting, plus a small dotted-path selector
//! (`data.0.name`) for pulling one value out of a raw API response.

use std::io::Write;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON to any writer.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Selects a value by dotted path.
///
/// Segments address object keys, or array indices when numeric. `.` and the
/// empty path return the whole value.
///
/// ```rust
/// use bookstack_client::output::select_path;
/// use serde_json::json;
///
/// let value = json!({"data": [{"name": "Handbook"}]});
/// assert_eq!(select_path(&value, "data.0.name").unwrap(), &json!("Handbook"));
/// ```
pub fn select_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    let path = path.trim_start_matches('.');
    if path.is_empty() {
        return Ok(value);
    }

    let mut current = value;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = match next {
            Some(next) => next,
            None => bail!("No value at '{}' (stopped at '{}')", path, segment),
        };
    }
    Ok(current)
}
