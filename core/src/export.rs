use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

/// Writes `text` to `path` as UTF-8, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write(path: impl AsRef<Path>, text: &str) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}
