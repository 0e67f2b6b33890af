use super::StorageBackend;
use crate::error::{DraftpadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based key-value backend. Each key maps to one file under `root`;
/// the file's entire contents are the value.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DraftpadError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(DraftpadError::Io)?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        let path = self.key_path(key);
        // Sibling temp file plus rename keeps the value whole even if the
        // write is interrupted.
        let tmp = self.root.join(format!("{}.tmp", key));
        fs::write(&tmp, value).map_err(DraftpadError::Io)?;
        fs::rename(&tmp, &path).map_err(DraftpadError::Io)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(DraftpadError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        assert_eq!(backend.read("savedMessages").unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        backend.write("activeMessageId", "123-0").unwrap();
        assert_eq!(
            backend.read("activeMessageId").unwrap().as_deref(),
            Some("123-0")
        );
    }

    #[test]
    fn write_replaces_the_full_value() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.write("savedMessages", "[1,2,3]").unwrap();
        backend.write("savedMessages", "[]").unwrap();
        assert_eq!(backend.read("savedMessages").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.write("activeMessageId", "x").unwrap();
        backend.remove("activeMessageId").unwrap();
        backend.remove("activeMessageId").unwrap();
        assert_eq!(backend.read("activeMessageId").unwrap(), None);
    }
}
