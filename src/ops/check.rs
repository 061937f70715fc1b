use serde::Serialize;

use crate::io::file_store::FileStore;
use crate::io::store::KeyValueStore;
use crate::model::catalogue::Catalogue;

/// Structured result from `dufatna check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    /// No bucket is corrupt
    pub valid: bool,
    pub buckets: Vec<BucketReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketHealth {
    /// Parses and holds at least one record
    Ok,
    /// Nothing stored, or an empty list
    Empty,
    /// Stored value is unreadable or not a list of records
    Corrupt,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketReport {
    pub key: String,
    /// Catalogue labels leading to the subject
    pub path: Vec<String>,
    pub status: BucketHealth,
    pub files: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Inspect every subject bucket in the catalogue. Read-only.
pub fn check_store<S: KeyValueStore>(catalogue: &Catalogue, files: &FileStore<S>) -> CheckResult {
    let buckets: Vec<BucketReport> = catalogue
        .subjects()
        .into_iter()
        .map(|(path, key)| {
            let path = path.into_iter().map(str::to_string).collect();
            match files.try_load(key) {
                Ok(records) => BucketReport {
                    key: key.to_string(),
                    path,
                    status: if records.is_empty() {
                        BucketHealth::Empty
                    } else {
                        BucketHealth::Ok
                    },
                    files: records.len(),
                    error: None,
                },
                Err(reason) => BucketReport {
                    key: key.to_string(),
                    path,
                    status: BucketHealth::Corrupt,
                    files: 0,
                    error: Some(reason),
                },
            }
        })
        .collect();

    CheckResult {
        valid: buckets.iter().all(|b| b.status != BucketHealth::Corrupt),
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::file_record::NewFile;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_store_is_all_empty() {
        let result = check_store(&Catalogue::builtin(), &FileStore::new(MemoryStore::new()));
        assert!(result.valid);
        assert_eq!(result.buckets.len(), 2);
        assert!(result.buckets.iter().all(|b| b.status == BucketHealth::Empty));
    }

    #[test]
    fn reports_ok_and_corrupt_buckets() {
        let mut store = MemoryStore::new();
        store
            .set_item("ministerial-anesthesia-basics", "{oops")
            .unwrap();
        let mut files = FileStore::new(store);
        files.append_to(
            "ministerial-intensive-care",
            NewFile {
                name: "a".into(),
                url: "https://example.com/a".into(),
            },
        );

        let result = check_store(&Catalogue::builtin(), &files);
        assert!(!result.valid);
        let icu = &result.buckets[0];
        assert_eq!(icu.key, "ministerial-intensive-care");
        assert_eq!(icu.status, BucketHealth::Ok);
        assert_eq!(icu.files, 1);
        let anes = &result.buckets[1];
        assert_eq!(anes.status, BucketHealth::Corrupt);
        assert!(anes.error.is_some());
    }

    #[test]
    fn check_does_not_write() {
        let mut store = MemoryStore::new();
        store.set_item("ministerial-intensive-care", "junk").unwrap();
        let files = FileStore::new(store);
        check_store(&Catalogue::builtin(), &files);
        assert_eq!(
            files.store().get_item("ministerial-intensive-care").unwrap(),
            Some("junk".to_string())
        );
    }
}
