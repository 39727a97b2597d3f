//! Start-script renderer for the database container.

use crate::constants;
use crate::models::credentials::Credentials;
use anyhow::Result;

/// Render the one-line shell command that starts the database container,
/// publishing the host port and binding the host data directory.
pub fn generate_start_script(creds: &Credentials) -> Result<String> {
    creds.require_keys(constants::SCRIPT_REQUIRED_KEYS)?;

    let port = creds.require(constants::KEY_PORT)?;
    let dir = creds.require(constants::KEY_DIR)?;

    Ok(format!(
        "docker run -d -i --rm -p {}:{} -v {}:{} {}",
        port,
        constants::CONTAINER_PORT,
        dir,
        constants::DATA_MOUNT,
        constants::RUNTIME_IMAGE
    ))
}
