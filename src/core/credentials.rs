//! Credentials file loading.

use crate::models::credentials::Credentials;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load and parse a credentials .json file.
///
/// Malformed JSON and non-string values surface as parse errors carrying the
/// file path; validation of required keys happens in the generators.
pub fn load(path: &Path) -> Result<Credentials> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read credentials file {}", path.display()))?;
    let creds: Credentials = serde_json::from_str(&content)
        .with_context(|| format!("parse credentials file {}", path.display()))?;
    Ok(creds)
}
