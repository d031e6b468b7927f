use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitError {
    #[error("not a configuration bundle: CLAUDE.md not found in {0}")]
    BundleMissing(PathBuf),

    #[error("no backups found next to {0}")]
    NoBackups(PathBuf),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KitError>;
