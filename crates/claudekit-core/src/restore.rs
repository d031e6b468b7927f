use crate::backup::{self, Backup};
use crate::error::{KitError, Result};
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct RestoreReport {
    pub target: PathBuf,
    /// The backup that now lives at `target` (its old path is gone).
    pub restored_from: PathBuf,
    pub remaining: Vec<String>,
}

/// The backup `uninstall` would restore, without touching anything.
/// Errors when no backups exist.
pub fn candidate(home: &Path) -> Result<Backup> {
    backup::latest(home)?.ok_or_else(|| KitError::NoBackups(paths::claude_dir(home)))
}

/// Replace the target directory with the most recent backup.
///
/// The backup is moved, not copied: after this it no longer exists at its
/// original path and the target is byte-for-byte its contents.
pub fn restore_latest(home: &Path) -> Result<RestoreReport> {
    let chosen = candidate(home)?;
    let target = paths::claude_dir(home);

    if target.exists() {
        std::fs::remove_dir_all(&target)?;
    }
    std::fs::rename(&chosen.path, &target)?;

    let remaining = backup::list(home)?.into_iter().map(|b| b.name).collect();
    Ok(RestoreReport {
        target,
        restored_from: chosen.path,
        remaining,
    })
}
