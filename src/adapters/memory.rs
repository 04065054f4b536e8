use crate::core::Storage;
use crate::utils::error::Result;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory storage backend. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    read_only: Arc<Mutex<HashSet<String>>>,
    unreadable: Arc<Mutex<HashSet<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn insert(&self, path: &str, data: impl Into<Vec<u8>>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.to_string(), data.into());
        }
    }

    /// 之後對此路徑的寫入都會失敗
    pub fn deny_writes(self, path: &str) -> Self {
        if let Ok(mut read_only) = self.read_only.lock() {
            read_only.insert(path.to_string());
        }
        self
    }

    /// 檔案仍存在，但讀取一律失敗
    pub fn deny_reads(self, path: &str) -> Self {
        if let Ok(mut unreadable) = self.unreadable.lock() {
            unreadable.insert(path.to_string());
        }
        self
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().ok()?.get(path).cloned()
    }

    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|data| String::from_utf8(data).ok())
    }

    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default();
        paths.sort();
        paths
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "memory storage lock poisoned")
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let denied = self
            .unreadable
            .lock()
            .map_err(|_| poisoned())?
            .contains(path);
        if denied {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{}: permission denied", path),
            )
            .into());
        }

        let files = self.files.lock().map_err(|_| poisoned())?;
        let data = files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}: no such file", path))
        })?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let denied = self
            .read_only
            .lock()
            .map_err(|_| poisoned())?
            .contains(path);
        if denied {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{}: permission denied", path),
            )
            .into());
        }

        let mut files = self.files.lock().map_err(|_| poisoned())?;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let files = self.files.lock().map_err(|_| poisoned())?;
        Ok(files.contains_key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let storage = MemoryStorage::new();
        tokio_test::block_on(async {
            storage.write_file("a.csv", b"x y").await.unwrap();
            assert!(storage.exists("a.csv").await.unwrap());
            assert_eq!(storage.read_file("a.csv").await.unwrap(), b"x y");
        });
    }

    #[test]
    fn test_denied_read_fails_but_file_exists() {
        let storage = MemoryStorage::new()
            .with_file("locked.csv", "山 yama")
            .deny_reads("locked.csv");
        tokio_test::block_on(async {
            assert!(storage.exists("locked.csv").await.unwrap());
            assert!(storage.read_file("locked.csv").await.is_err());
        });
    }

    #[test]
    fn test_denied_write_fails() {
        let storage = MemoryStorage::new().deny_writes("locked.csv");
        let result = tokio_test::block_on(storage.write_file("locked.csv", b"x"));
        assert!(result.is_err());
        assert!(storage.get("locked.csv").is_none());
    }
}
