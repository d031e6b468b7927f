use crate::error::{KitError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Target directory under `$HOME`.
pub const CLAUDE_DIR: &str = ".claude";

/// Prefix for backup sibling directories under `$HOME`.
pub const BACKUP_PREFIX: &str = ".claude-backup-";

/// Bundle subdirectories copied recursively into the target.
pub const BUNDLE_DIRS: &[&str] = &["agents", "commands", "rules", "skills"];

pub const CLAUDE_MD: &str = "CLAUDE.md";
pub const SETTINGS_FILE: &str = "settings.json";
/// Where the incoming settings land when the target already has its own.
pub const SETTINGS_TEMPLATE_FILE: &str = "settings.template.json";
/// User override file, never shipped in a bundle.
pub const SETTINGS_LOCAL_FILE: &str = "settings.local.json";

/// Backup timestamp format. Lexicographic order equals chronological order.
pub const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Resolve the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(KitError::HomeNotFound)
}

pub fn claude_dir(home: &Path) -> PathBuf {
    home.join(CLAUDE_DIR)
}

pub fn backup_dir(home: &Path, stamp: &str) -> PathBuf {
    home.join(format!("{BACKUP_PREFIX}{stamp}"))
}

pub fn settings_path(target: &Path) -> PathBuf {
    target.join(SETTINGS_FILE)
}

pub fn settings_template_path(target: &Path) -> PathBuf {
    target.join(SETTINGS_TEMPLATE_FILE)
}

pub fn settings_local_path(target: &Path) -> PathBuf {
    target.join(SETTINGS_LOCAL_FILE)
}

// ---------------------------------------------------------------------------
// Backup name validation
// ---------------------------------------------------------------------------

static BACKUP_RE: OnceLock<Regex> = OnceLock::new();

fn backup_re() -> &'static Regex {
    // Optional -<n> suffix disambiguates two backups taken in the same second.
    BACKUP_RE.get_or_init(|| Regex::new(r"^\.claude-backup-\d{8}-\d{6}(-\d+)?$").unwrap())
}

pub fn is_backup_name(name: &str) -> bool {
    backup_re().is_match(name)
}

/// Extract the stamp portion of a backup directory name.
pub fn backup_stamp(name: &str) -> Option<&str> {
    if is_backup_name(name) {
        name.strip_prefix(BACKUP_PREFIX)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
