//! Credentials mapping model.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Flat key-value mapping from the credentials .json file.
///
/// Values must be strings; anything else is rejected at parse time. Keys
/// beyond the required sets are carried but never rendered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    /// Look up a credential value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Fetch a credential value after a [`Credentials::require_keys`] gate.
    pub fn require(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) => Ok(value),
            None => bail!("credentials file is missing required key '{}'", key),
        }
    }

    /// Validate that every key in `required` is present.
    ///
    /// A mapping missing any required key is wholly invalid; the error names
    /// the missing keys and the full required set.
    pub fn require_keys(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| !self.0.contains_key(*key))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        bail!(
            "invalid credentials file: missing {} (required keys: {})",
            quoted_list(&missing),
            quoted_list(required)
        );
    }
}

fn quoted_list(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| format!("'{}'", key))
        .collect::<Vec<_>>()
        .join(", ")
}
