use crate::error::Result;
use crate::{io, paths};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// A timestamped full-copy backup of the target directory, living as a
/// sibling of `~/.claude` (e.g. `~/.claude-backup-20260830-101500`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub path: PathBuf,
    pub name: String,
}

impl Backup {
    /// Creation time parsed from the directory name. A same-second
    /// collision suffix (`-2`) does not change the parsed time.
    pub fn created(&self) -> Option<NaiveDateTime> {
        let stamp = paths::backup_stamp(&self.name)?;
        // "YYYYMMDD-HHMMSS" is 15 chars; anything beyond is the suffix.
        NaiveDateTime::parse_from_str(stamp.get(..15)?, paths::STAMP_FORMAT).ok()
    }
}

/// Copy the entire target directory to a fresh backup sibling.
/// The caller guarantees the target exists.
pub fn create(home: &Path) -> Result<Backup> {
    let target = paths::claude_dir(home);
    let stamp = Local::now().format(paths::STAMP_FORMAT).to_string();

    // Two installs inside one second would collide; suffix keeps the
    // lexicographic-equals-chronological property.
    let mut path = paths::backup_dir(home, &stamp);
    let mut n = 1;
    while path.exists() {
        n += 1;
        path = paths::backup_dir(home, &format!("{stamp}-{n}"));
    }

    io::copy_dir_all(&target, &path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Backup { path, name })
}

/// All backups next to the target, sorted ascending by name
/// (oldest first; names sort in creation order).
pub fn list(home: &Path) -> Result<Vec<Backup>> {
    let mut backups = Vec::new();
    if !home.is_dir() {
        return Ok(backups);
    }
    for entry in std::fs::read_dir(home)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() && paths::is_backup_name(&name) {
            backups.push(Backup {
                path: entry.path(),
                name,
            });
        }
    }
    backups.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(backups)
}

/// The most recent backup, if any.
pub fn latest(home: &Path) -> Result<Option<Backup>> {
    Ok(list(home)?.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_backup(home: &Path, stamp: &str, marker: &str) {
        let dir = paths::backup_dir(home, stamp);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("CLAUDE.md"), marker).unwrap();
    }

    #[test]
    fn create_copies_whole_target() {
        let home = TempDir::new().unwrap();
        let target = paths::claude_dir(home.path());
        std::fs::create_dir_all(target.join("agents")).unwrap();
        std::fs::write(target.join("CLAUDE.md"), "rules").unwrap();
        std::fs::write(target.join("agents/reviewer.md"), "persona").unwrap();

        let backup = create(home.path()).unwrap();

        assert!(paths::is_backup_name(&backup.name));
        assert_eq!(
            std::fs::read_to_string(backup.path.join("CLAUDE.md")).unwrap(),
            "rules"
        );
        assert_eq!(
            std::fs::read_to_string(backup.path.join("agents/reviewer.md")).unwrap(),
            "persona"
        );
        // The target itself is untouched.
        assert!(target.join("CLAUDE.md").exists());
    }

    #[test]
    fn create_twice_in_same_second_gets_suffix() {
        let home = TempDir::new().unwrap();
        let target = paths::claude_dir(home.path());
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("CLAUDE.md"), "rules").unwrap();

        let first = create(home.path()).unwrap();
        let second = create(home.path()).unwrap();

        assert_ne!(first.path, second.path);
        assert!(second.name > first.name, "later backup must sort later");
    }

    #[test]
    fn list_sorted_oldest_first() {
        let home = TempDir::new().unwrap();
        seed_backup(home.path(), "20260102-000000", "b");
        seed_backup(home.path(), "20260101-000000", "a");
        // Unrelated dirs and files are ignored.
        std::fs::create_dir_all(home.path().join(".claude")).unwrap();
        std::fs::write(home.path().join(".claude-backup-notes.txt"), "x").unwrap();

        let names: Vec<String> = list(home.path()).unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                ".claude-backup-20260101-000000",
                ".claude-backup-20260102-000000"
            ]
        );
    }

    #[test]
    fn latest_picks_greatest_name() {
        let home = TempDir::new().unwrap();
        seed_backup(home.path(), "20260101-000000", "a");
        seed_backup(home.path(), "20260103-120000", "c");
        seed_backup(home.path(), "20260102-000000", "b");

        let latest = latest(home.path()).unwrap().unwrap();
        assert_eq!(latest.name, ".claude-backup-20260103-120000");
    }

    #[test]
    fn latest_none_when_empty() {
        let home = TempDir::new().unwrap();
        assert!(latest(home.path()).unwrap().is_none());
    }

    #[test]
    fn created_parses_stamp() {
        let b = Backup {
            path: PathBuf::from("/h/.claude-backup-20260830-101500"),
            name: ".claude-backup-20260830-101500".to_string(),
        };
        let dt = b.created().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-08-30 10:15:00");

        let suffixed = Backup {
            path: PathBuf::from("/h/.claude-backup-20260830-101500-2"),
            name: ".claude-backup-20260830-101500-2".to_string(),
        };
        assert_eq!(suffixed.created(), b.created());
    }
}
