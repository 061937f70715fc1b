use std::time::{Duration, Instant};

use url::Url;

use crate::model::file_record::NewFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddFileError {
    #[error("file name and link are both required")]
    MissingField,
    #[error("please enter a valid link")]
    InvalidUrl,
}

/// Check a file name and link before anything touches the store.
///
/// Both must be non-blank; the link must parse as an absolute URL. The name
/// is kept as typed, the link without surrounding whitespace.
pub fn validate_new_file(name: &str, url: &str) -> Result<NewFile, AddFileError> {
    if name.trim().is_empty() || url.trim().is_empty() {
        return Err(AddFileError::MissingField);
    }
    Url::parse(url.trim()).map_err(|_| AddFileError::InvalidUrl)?;
    Ok(NewFile {
        name: name.to_string(),
        url: url.trim().to_string(),
    })
}

/// A validated file waiting out the simulated save delay
#[derive(Debug, Clone)]
pub struct PendingAdd {
    /// Bucket the add was started in
    pub bucket: String,
    pub file: NewFile,
    pub due: Instant,
}

impl PendingAdd {
    pub fn new(bucket: &str, file: NewFile, now: Instant, delay: Duration) -> Self {
        PendingAdd {
            bucket: bucket.to_string(),
            file,
            due: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::file_store::FileStore;
    use crate::io::store::MemoryStore;

    #[test]
    fn accepts_absolute_urls() {
        let f = validate_new_file("Lecture 1", "https://example.com/l1.pdf").unwrap();
        assert_eq!(f.name, "Lecture 1");
        assert_eq!(f.url, "https://example.com/l1.pdf");
        assert!(validate_new_file("x", "ftp://files.example.org/a").is_ok());
        let padded = validate_new_file("x", "  https://example.com/a ").unwrap();
        assert_eq!(padded.url, "https://example.com/a");
    }

    #[test]
    fn rejects_relative_or_garbage_urls() {
        assert_eq!(
            validate_new_file("x", "not-a-url"),
            Err(AddFileError::InvalidUrl)
        );
        assert_eq!(
            validate_new_file("x", "/files/a.pdf"),
            Err(AddFileError::InvalidUrl)
        );
        assert_eq!(
            validate_new_file("x", "example.com/a.pdf"),
            Err(AddFileError::InvalidUrl)
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            validate_new_file("   ", "https://example.com"),
            Err(AddFileError::MissingField)
        );
        assert_eq!(validate_new_file("x", " "), Err(AddFileError::MissingField));
    }

    #[test]
    fn rejected_add_leaves_bucket_unchanged() {
        let key = "ministerial-intensive-care";
        let mut fs = FileStore::new(MemoryStore::new());
        fs.append_to(
            key,
            validate_new_file("ok", "https://example.com/ok").unwrap(),
        );
        let before = fs.load(key).len();

        if let Ok(file) = validate_new_file("bad", "not-a-url") {
            fs.append_to(key, file);
        }

        assert_eq!(fs.load(key).len(), before);
    }

    #[test]
    fn pending_add_becomes_due() {
        let now = Instant::now();
        let file = validate_new_file("a", "https://example.com").unwrap();
        let pending = PendingAdd::new("k", file, now, Duration::from_millis(500));
        assert!(!pending.is_due(now + Duration::from_millis(499)));
        assert!(pending.is_due(now + Duration::from_millis(500)));
    }
}
