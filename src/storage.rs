// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{error::Result, metadata};

pub(crate) trait IsPersistent {
    fn is_persistent(&self) -> bool;
}

impl<T: IsPersistent + ?Sized> IsPersistent for Box<T> {
    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// A single persisted value keyed by the backend's construction. Absent
/// values read back as `None`.
#[async_trait]
pub(crate) trait Storage<T>: Send + Sync + IsPersistent {
    async fn get(&mut self) -> Result<Option<T>>;
    async fn update(&mut self, data: &T) -> Result<()>;
}

#[async_trait]
impl<Tn: Sync, T: Storage<Tn> + ?Sized> Storage<Tn> for Box<T> {
    async fn get(&mut self) -> Result<Option<Tn>> {
        (**self).get().await
    }

    async fn update(&mut self, data: &Tn) -> Result<()> {
        (**self).update(data).await
    }
}

pub(crate) struct Memory<T> {
    data: Arc<RwLock<Option<T>>>,
}

impl<T> Memory<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

// Clones share the underlying cell, so a clone behaves like a second handle
// on the same store.
impl<T> Clone for Memory<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> IsPersistent for Memory<T> {
    fn is_persistent(&self) -> bool {
        false
    }
}

#[async_trait]
impl<T: Send + Sync + Clone> Storage<T> for Memory<T> {
    async fn get(&mut self) -> Result<Option<T>> {
        let data = Arc::clone(&self.data);
        let guard = data.read().await;
        Ok(guard.clone())
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        let target_data = Arc::clone(&self.data);
        let mut guard = target_data.write_owned().await;
        *guard = Some(data.clone());
        Ok(())
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }
}

pub(crate) struct File {
    path: PathBuf,
}

impl File {
    /// Storage for the preference named `key` under the project data
    /// directory, one JSON document per key.
    pub(crate) fn new(key: &str) -> Option<Self> {
        metadata::PROJECT_DIRS.as_ref().map(|dirs| Self {
            path: dirs.data_dir().to_owned().join(format!("{key}.json")),
        })
    }

    pub(crate) fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }
}

impl IsPersistent for File {
    fn is_persistent(&self) -> bool {
        true
    }
}

#[async_trait]
impl<T: Send + Serialize + Sync + for<'de> Deserialize<'de>> Storage<T> for File {
    async fn get(&mut self) -> Result<Option<T>> {
        match fs::File::open(&self.path) {
            Ok(fp) => Ok(Some(serde_json::from_reader::<fs::File, T>(fp)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer(file, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_round_trip_and_malformed_reads() {
        let path = std::env::temp_dir().join(format!(
            "pressgate-storage-test-{}.json",
            std::process::id()
        ));
        let mut storage = File::at(&path);

        let missing: Option<Vec<String>> = storage.get().await.unwrap();
        assert!(missing.is_none());

        storage.update(&vec!["2".to_owned()]).await.unwrap();
        let read: Option<Vec<String>> = storage.get().await.unwrap();
        assert_eq!(read, Some(vec!["2".to_owned()]));

        // A corrupted document is an error here; hydration turns it into a
        // default further up.
        fs::write(&path, "{not json").unwrap();
        assert!(Storage::<Vec<String>>::get(&mut storage).await.is_err());

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn memory_clones_share_state() {
        let mut writer = Memory::new();
        let mut reader = writer.clone();

        writer.update(&1_u8).await.unwrap();
        assert_eq!(reader.get().await.unwrap(), Some(1_u8));
        assert!(!writer.is_persistent());
    }
}
