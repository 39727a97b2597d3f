//! Dockerfile renderer for the postgres database image.

use crate::constants;
use crate::models::credentials::Credentials;
use anyhow::Result;

/// Render the Dockerfile from a credentials mapping.
///
/// All four required keys must be present even though `postgres-dir` is not
/// rendered, so one credentials file serves both subcommands. Values are
/// inserted verbatim, without quoting.
pub fn generate_dockerfile(creds: &Credentials) -> Result<String> {
    creds.require_keys(constants::DOCKERFILE_REQUIRED_KEYS)?;

    let user = creds.require(constants::KEY_USER)?;
    let password = creds.require(constants::KEY_PASSWORD)?;
    let port = creds.require(constants::KEY_PORT)?;

    let mut out = String::new();
    out.push_str(&format!("FROM {}\n\n", constants::BASE_IMAGE));
    out.push_str(&format!("ENV POSTGRES_USER={}\n", user));
    out.push_str(&format!("ENV POSTGRES_PASSWORD={}\n", password));
    out.push_str(&format!("ENV POSTGRES_DB={}\n\n", constants::DATABASE_NAME));
    out.push_str(&format!("EXPOSE {}", port));
    Ok(out)
}
