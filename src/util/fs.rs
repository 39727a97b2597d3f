use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Write a rendered artifact to `path` with the given permission mode.
///
/// The content goes to a temp file in the destination directory and is
/// persisted over the target afterwards, so a failed run never leaves a
/// partial file behind. The destination directory must already exist.
pub fn write_artifact(path: &Path, content: &str, mode: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    tmp.flush().ok();

    #[cfg(unix)]
    {
        let perm = std::fs::Permissions::from_mode(mode);
        tmp.as_file()
            .set_permissions(perm)
            .with_context(|| format!("set permissions {:o} on {}", mode, path.display()))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.persist(path)
        .map_err(|err| anyhow::anyhow!("persist {}: {}", path.display(), err))?;
    Ok(())
}
