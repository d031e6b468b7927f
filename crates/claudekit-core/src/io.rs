use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting installed files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Copy one file, overwriting the destination if it exists.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let data = std::fs::read(src)?;
    atomic_write(dst, &data)
}

/// Recursively copy `src` into `dst`, overwriting same-named files
/// (last-writer-wins; no merge). Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<usize> {
    ensure_dir(dst)?;
    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir_all(&entry.path(), &target)?;
        } else {
            copy_file(&entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Recursively count regular files under `dir`. Zero if it doesn't exist.
pub fn count_files(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            count += count_files(&entry.path())?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CLAUDE.md");
        atomic_write(&path, b"# Rules").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Rules");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c/settings.json");
        atomic_write(&path, b"{}").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn copy_dir_all_copies_nested_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("skills/review")).unwrap();
        std::fs::write(src.join("top.md"), "top").unwrap();
        std::fs::write(src.join("skills/review/SKILL.md"), "skill").unwrap();

        let dst = dir.path().join("dst");
        let copied = copy_dir_all(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(std::fs::read_to_string(dst.join("top.md")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("skills/review/SKILL.md")).unwrap(),
            "skill"
        );
    }

    #[test]
    fn copy_dir_all_overwrites_existing_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(src.join("rule.md"), "new").unwrap();
        std::fs::write(dst.join("rule.md"), "old").unwrap();
        std::fs::write(dst.join("keep.md"), "kept").unwrap();

        copy_dir_all(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("rule.md")).unwrap(), "new");
        // Files only present in the destination survive — copy, not sync.
        assert_eq!(
            std::fs::read_to_string(dst.join("keep.md")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn count_files_missing_dir_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_files(&dir.path().join("absent")).unwrap(), 0);
    }

    #[test]
    fn count_files_recurses() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        std::fs::write(dir.path().join("one.md"), "").unwrap();
        std::fs::write(dir.path().join("a/two.md"), "").unwrap();
        std::fs::write(dir.path().join("a/b/three.md"), "").unwrap();
        assert_eq!(count_files(dir.path()).unwrap(), 3);
    }
}
