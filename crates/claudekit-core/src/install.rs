use crate::bundle::Bundle;
use crate::error::Result;
use crate::{backup, io, paths};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to `settings.json` during an install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SettingsOutcome {
    /// The bundle's settings were installed as `settings.json`.
    Installed,
    /// A `settings.json` already existed in the target; it was left
    /// byte-for-byte unchanged and the incoming version was written
    /// side-by-side for manual comparison.
    Preserved { template: PathBuf },
    /// The bundle ships no `settings.json`.
    Absent,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirReport {
    pub name: String,
    pub files: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub target: PathBuf,
    /// Full copy of the pre-install target, when one existed.
    pub backup: Option<PathBuf>,
    pub dirs: Vec<DirReport>,
    pub settings: SettingsOutcome,
    pub settings_local_restored: bool,
}

/// Install `bundle` into `$home/.claude`.
///
/// Order matters: the bundle is validated before this is called, and the
/// backup is taken before any file in the target is overwritten. There is
/// no rollback across directories — individual file writes are atomic, the
/// multi-directory copy is not.
pub fn install(home: &Path, bundle: &Bundle) -> Result<InstallReport> {
    let target = paths::claude_dir(home);

    // 1. Backup the whole existing target first. Fresh installs get none.
    let taken = if target.is_dir() {
        Some(backup::create(home)?)
    } else {
        None
    };

    io::ensure_dir(&target)?;

    // 2. Copy each present bundle directory recursively, overwriting
    //    same-named files.
    let mut dirs = Vec::new();
    for dir in &bundle.dirs {
        let files = io::copy_dir_all(&bundle.dir_path(dir), &target.join(dir))?;
        dirs.push(DirReport {
            name: dir.clone(),
            files,
        });
    }

    // 3. CLAUDE.md is managed content — always overwritten.
    io::copy_file(&bundle.claude_md_path(), &target.join(paths::CLAUDE_MD))?;

    // 4. settings.json: never clobber a user's existing file.
    let settings = if bundle.has_settings {
        let installed = paths::settings_path(&target);
        if installed.is_file() {
            let template = paths::settings_template_path(&target);
            io::copy_file(&bundle.settings_path(), &template)?;
            SettingsOutcome::Preserved { template }
        } else {
            io::copy_file(&bundle.settings_path(), &installed)?;
            SettingsOutcome::Installed
        }
    } else {
        SettingsOutcome::Absent
    };

    // 5. Best-effort restore of the user override file from the backup.
    let settings_local_restored = match &taken {
        Some(b) => restore_local_settings(&target, &b.path)?,
        None => false,
    };

    Ok(InstallReport {
        target,
        backup: taken.map(|b| b.path),
        dirs,
        settings,
        settings_local_restored,
    })
}

/// Copy `settings.local.json` back from `backup` when the fresh target
/// doesn't already have one. Returns true if a restore happened.
fn restore_local_settings(target: &Path, backup: &Path) -> Result<bool> {
    let installed = paths::settings_local_path(target);
    if installed.exists() {
        return Ok(false);
    }
    let saved = backup.join(paths::SETTINGS_LOCAL_FILE);
    if !saved.is_file() {
        return Ok(false);
    }
    io::copy_file(&saved, &installed)?;
    Ok(true)
}
