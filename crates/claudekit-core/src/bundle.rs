use crate::error::{KitError, Result};
use crate::paths;
use std::path::{Path, PathBuf};

/// A source configuration bundle on disk.
///
/// A bundle is any directory with a `CLAUDE.md` at its top level, plus any
/// subset of the known subdirectories (`agents`, `commands`, `rules`,
/// `skills`) and optionally a `settings.json`. Missing subdirectories are
/// skipped at install time, not an error.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub root: PathBuf,
    /// Known bundle directories actually present under `root`, in the
    /// canonical order of `paths::BUNDLE_DIRS`.
    pub dirs: Vec<String>,
    pub has_settings: bool,
}

impl Bundle {
    /// Load and validate a bundle rooted at `root`.
    ///
    /// The only hard precondition: `CLAUDE.md` must exist directly under
    /// `root`. Fails before anything else happens, so a bad invocation
    /// never touches the target.
    pub fn load(root: &Path) -> Result<Bundle> {
        if !root.join(paths::CLAUDE_MD).is_file() {
            return Err(KitError::BundleMissing(root.to_path_buf()));
        }

        let dirs = paths::BUNDLE_DIRS
            .iter()
            .filter(|d| root.join(d).is_dir())
            .map(|d| d.to_string())
            .collect();

        Ok(Bundle {
            root: root.to_path_buf(),
            dirs,
            has_settings: root.join(paths::SETTINGS_FILE).is_file(),
        })
    }

    pub fn dir_path(&self, dir: &str) -> PathBuf {
        self.root.join(dir)
    }

    pub fn claude_md_path(&self) -> PathBuf {
        self.root.join(paths::CLAUDE_MD)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(paths::SETTINGS_FILE)
    }
}
