use crate::io::store::KeyValueStore;
use crate::model::file_record::{FileRecord, NewFile, RecordIdGen};

/// The in-memory view of one subject bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    /// Files in insertion (display) order
    pub files: Vec<FileRecord>,
    /// The last write to the store failed; `files` holds changes the store lacks
    pub unsaved: bool,
}

/// Per-bucket persistence of file records over a key-value store.
///
/// Reads fail soft to an empty list. Appends rewrite the whole bucket from
/// the in-memory copy, so a concurrent writer of the same bucket is
/// overwritten (last writer wins).
pub struct FileStore<S> {
    store: S,
    ids: RecordIdGen,
}

impl<S: KeyValueStore> FileStore<S> {
    pub fn new(store: S) -> Self {
        FileStore {
            store,
            ids: RecordIdGen::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the records stored under `key`. Missing or unreadable entries
    /// come back as an empty list.
    pub fn load(&self, key: &str) -> Vec<FileRecord> {
        match self.try_load(key) {
            Ok(files) => files,
            Err(reason) => {
                tracing::warn!(bucket = key, %reason, "could not read bucket, showing it empty");
                Vec::new()
            }
        }
    }

    /// Load with the failure reason kept, for diagnostics.
    pub fn try_load(&self, key: &str) -> Result<Vec<FileRecord>, String> {
        let raw = self.store.get_item(key).map_err(|e| e.to_string())?;
        match raw {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|e| e.to_string()),
        }
    }

    pub fn open(&self, key: &str) -> Bucket {
        Bucket {
            key: key.to_string(),
            files: self.load(key),
            unsaved: false,
        }
    }

    /// Add `file` to the end of `bucket` and write the whole list back.
    ///
    /// A failed write is logged and flagged on the bucket; the new record
    /// stays in memory for the rest of the session.
    pub fn append(&mut self, bucket: &mut Bucket, file: NewFile) -> FileRecord {
        let record = file.into_record(self.ids.next_id());
        bucket.files.push(record.clone());

        let written = serde_json::to_string(&bucket.files)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.store
                    .set_item(&bucket.key, &json)
                    .map_err(|e| e.to_string())
            });

        match written {
            Ok(()) => {
                bucket.unsaved = false;
                tracing::info!(bucket = %bucket.key, id = %record.id, "file added");
            }
            Err(reason) => {
                bucket.unsaved = true;
                tracing::error!(bucket = %bucket.key, %reason, "could not save bucket");
            }
        }
        record
    }

    /// Open `key`, append `file`, and return the record.
    pub fn append_to(&mut self, key: &str, file: NewFile) -> FileRecord {
        let mut bucket = self.open(key);
        self.append(&mut bucket, file)
    }
}
