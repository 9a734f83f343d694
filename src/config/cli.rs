use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`; absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.resolve(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EtlError::SourceReadError {
                path: full_path.display().to_string(),
                source,
            }),
        }
    }

    /// Writes to a hidden sibling first and renames it over the target.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source: std::io::Error| EtlError::OutputWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let temp_path = temp_sibling(&full_path);
        fs::write(&temp_path, data).map_err(write_error)?;
        if let Err(e) = fs::rename(&temp_path, &full_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(storage.read_file("absent.csv").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_creates_parent_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/out/devices.csv", b"id\n").await.unwrap();

        let out_dir = dir.path().join("nested/out");
        assert_eq!(fs::read(out_dir.join("devices.csv")).unwrap(), b"id\n");
        assert!(!out_dir.join(".devices.csv.tmp").exists());
        assert_eq!(
            storage.read_file("nested/out/devices.csv").await.unwrap(),
            Some(b"id\n".to_vec())
        );
    }

    #[tokio::test]
    async fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("devices.csv", b"old").await.unwrap();
        storage.write_file("devices.csv", b"new").await.unwrap();

        assert_eq!(fs::read(dir.path().join("devices.csv")).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blocker"), b"x").unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage
            .write_file("blocker/devices.csv", b"id\n")
            .await
            .unwrap_err();

        assert!(matches!(err, EtlError::OutputWriteError { .. }));
    }
}
