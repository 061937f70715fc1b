use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A file link stored in a subject bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// A validated file that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub name: String,
    pub url: String,
}

/// Issues record ids from the wall clock (milliseconds since the epoch).
///
/// Each id is strictly greater than the one before it, so two files added in
/// the same millisecond (or across a clock step backwards) still get distinct ids.
#[derive(Debug, Default)]
pub struct RecordIdGen {
    last: i64,
}

impl RecordIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> String {
        let id = if now_ms > self.last {
            now_ms
        } else {
            self.last + 1
        };
        self.last = id;
        id.to_string()
    }
}

impl NewFile {
    pub fn into_record(self, id: String) -> FileRecord {
        FileRecord {
            id,
            name: self.name,
            url: self.url,
        }
    }
}
