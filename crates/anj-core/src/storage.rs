//! File output: whole-file replacement through a temp file and atomic rename.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `data.json` → `data.json.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `contents` to `final_path`, replacing any existing file.
///
/// Data goes to the `.part` sibling first and is synced, then renamed over the
/// target, so readers never observe a half-written file.
pub fn write_atomic(final_path: &Path, contents: &[u8]) -> Result<()> {
    let tp = temp_path(final_path);
    {
        let mut f = File::create(&tp)
            .with_context(|| format!("failed to create temp file: {}", tp.display()))?;
        f.write_all(contents)
            .with_context(|| format!("failed to write {}", tp.display()))?;
        f.sync_all()
            .with_context(|| format!("failed to sync {}", tp.display()))?;
    }
    std::fs::rename(&tp, final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tp.display(),
            final_path.display()
        )
    })?;
    Ok(())
}
