//! Loading scope snapshots.
//!
//! A snapshot is the JSON form of the inspected page's globals. The easiest
//! way to take one is from the browser console on the target page:
//!
//! ```text
//! copy(JSON.stringify({ __BUILD_MANIFEST, __NEXT_DATA__ }))
//! ```
//!
//! Globals the page does not define are simply left out by `JSON.stringify`,
//! which the locator treats like any other missing field.

use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Path argument that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse snapshot text.
pub fn parse_scope(text: &str) -> Result<Value, ScopeError> {
    Ok(serde_json::from_str(text)?)
}

/// Read a snapshot from a file, or from stdin when the path is `-`.
pub fn load_scope(path: &Path) -> Result<Value, ScopeError> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    parse_scope(&text)
}
