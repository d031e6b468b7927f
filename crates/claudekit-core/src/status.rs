use crate::error::Result;
use crate::install::DirReport;
use crate::{backup, io, paths};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Snapshot of what is currently installed under the target directory.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub target: PathBuf,
    pub installed: bool,
    pub dirs: Vec<DirReport>,
    pub claude_md: bool,
    pub settings: bool,
    pub settings_template: bool,
    pub settings_local: bool,
    pub backups: Vec<String>,
}

pub fn status(home: &Path) -> Result<StatusReport> {
    let target = paths::claude_dir(home);
    let installed = target.is_dir();

    let mut dirs = Vec::new();
    if installed {
        for dir in paths::BUNDLE_DIRS {
            let p = target.join(dir);
            if p.is_dir() {
                dirs.push(DirReport {
                    name: dir.to_string(),
                    files: io::count_files(&p)?,
                });
            }
        }
    }

    let backups = backup::list(home)?.into_iter().map(|b| b.name).collect();

    Ok(StatusReport {
        installed,
        claude_md: target.join(paths::CLAUDE_MD).is_file(),
        settings: paths::settings_path(&target).is_file(),
        settings_template: paths::settings_template_path(&target).is_file(),
        settings_local: paths::settings_local_path(&target).is_file(),
        dirs,
        backups,
        target,
    })
}
