//! Filesystem storage for overflow documents.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument, warn};

use overflow_core::error::{Error, StoreError};
use overflow_core::traits::{Mutation, apply_mutation};
use overflow_core::{Collection, Filter, FindQuery, Record, RecordId, Result, Store};

fn map_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |err| {
        Error::from(StoreError::Io {
            message: format!("{}: {}", path.display(), err),
        })
    }
}

/// Filesystem-backed document store.
///
/// Layout under the root directory:
///
/// ```text
/// <root>/collections/<collection>/<id>.json
/// <root>/store.lock
/// ```
///
/// Writes go to a temporary file that is renamed into place. Every mutation
/// holds an exclusive lock on `store.lock`, so several processes can share one
/// data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

/// Holds the exclusive store lock until dropped.
struct LockGuard(File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(err) = FileExt::unlock(&self.0) {
            warn!(error = %err, "Failed to release store lock");
        }
    }
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join("collections").join(collection.as_str())
    }

    fn record_path(&self, collection: Collection, id: &RecordId) -> PathBuf {
        self.collection_dir(collection)
            .join(format!("{}.json", id.as_str()))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    fn lock(&self) -> Result<LockGuard> {
        let path = self.lock_path();
        fs::create_dir_all(&self.root).map_err(map_io(&self.root))?;

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(map_io(&path))?;
        file.lock_exclusive().map_err(map_io(&path))?;

        Ok(LockGuard(file))
    }

    fn read_record(&self, path: &Path) -> Result<Record> {
        let content = fs::read_to_string(path).map_err(map_io(path))?;
        serde_json::from_str(&content).map_err(|e| {
            StoreError::Corrupt {
                id: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_record(&self, path: &Path, record: &Record) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io(parent))?;
        }

        let content = serde_json::to_string_pretty(record).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io(&temp_path))?;
        fs::rename(&temp_path, path).map_err(map_io(path))?;
        Ok(())
    }

    /// Every document of a collection, in file name order.
    fn read_all(&self, collection: Collection) -> Result<Vec<Record>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(map_io(&dir))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        paths.iter().map(|p| self.read_record(p)).collect()
    }
}

#[async_trait]
impl Store for FileStore {
    #[instrument(skip(self, filter))]
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64> {
        let records = self.read_all(collection)?;
        Ok(records.iter().filter(|r| filter.matches(r)).count() as u64)
    }

    #[instrument(skip(self, query))]
    async fn find(&self, collection: Collection, query: &FindQuery) -> Result<Vec<Record>> {
        let records = self.read_all(collection)?;
        Ok(query.apply(records))
    }

    #[instrument(skip(self))]
    async fn get(&self, collection: Collection, id: &RecordId) -> Result<Option<Record>> {
        let path = self.record_path(collection, id);
        if !path.exists() {
            return Ok(None);
        }
        self.read_record(&path).map(Some)
    }

    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn insert(&self, collection: Collection, record: Record) -> Result<()> {
        let _lock = self.lock()?;
        let path = self.record_path(collection, record.id());

        if path.exists() {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
                id: record.id().to_string(),
            }
            .into());
        }

        self.write_record(&path, &record)?;
        debug!(path = %path.display(), "Created document");
        Ok(())
    }

    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn replace(&self, collection: Collection, record: Record) -> Result<()> {
        let _lock = self.lock()?;
        let path = self.record_path(collection, record.id());

        if !path.exists() {
            return Err(Error::not_found("record", record.id().as_str()));
        }

        self.write_record(&path, &record)?;
        debug!(path = %path.display(), "Replaced document");
        Ok(())
    }

    #[instrument(skip(self, mutate))]
    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        mutate: Mutation,
    ) -> Result<Option<Record>> {
        let _lock = self.lock()?;
        let path = self.record_path(collection, id);

        if !path.exists() {
            return Ok(None);
        }

        let record = apply_mutation(self.read_record(&path)?, mutate)?;
        self.write_record(&path, &record)?;
        debug!(path = %path.display(), "Updated document");
        Ok(Some(record))
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<bool> {
        let _lock = self.lock()?;
        let path = self.record_path(collection, id);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(map_io(&path))?;
        debug!(path = %path.display(), "Deleted document");
        Ok(true)
    }
}
