//! Content store contract plus the naming rules shared by every backend.
//!
//! A stored file is addressed two ways: by its bare generated name
//! (`1718000000000-123456789.jpg`) inside the store, and by its public
//! reference (`/uploads/1718000000000-123456789.jpg`) kept in report records.

use std::path::Path;

use async_trait::async_trait;
use axum::body::Bytes;
use rand::Rng;
use thiserror::Error;

use crate::shared::constants::UPLOADS_PATH_PREFIX;

/// How many fresh names a store tries before giving up on a write
pub(crate) const MAX_NAME_ATTEMPTS: usize = 3;

/// Longest original extension carried over to a generated name
const MAX_EXTENSION_LEN: usize = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid file reference '{0}'")]
    InvalidReference(String),

    #[error("failed to {action} '{name}': {source}")]
    Io {
        action: &'static str,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not allocate a unique file name after {0} attempts")]
    NameExhausted(usize),
}

/// Result of removing one referenced file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    /// Nothing was stored under the reference (already gone)
    Missing,
}

/// Durable location for uploaded bytes.
///
/// Implementations must never overwrite an existing file: `put` always lands
/// under a name that did not exist before the call.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store `data` under a new unique name keeping `extension`, returning its reference
    async fn put(&self, data: Bytes, extension: Option<&str>) -> Result<String, StorageError>;

    /// Read a stored file by its bare name; `None` when absent
    async fn get(&self, file_name: &str) -> Result<Option<Bytes>, StorageError>;

    /// Remove the file behind a reference
    async fn delete(&self, reference: &str) -> Result<DeleteOutcome, StorageError>;
}

/// Generate `<unix-millis>-<random>[.<ext>]`
pub fn generate_file_name(extension: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::rng().random_range(0..1_000_000_000);

    match extension {
        Some(ext) => format!("{}-{}.{}", millis, random, ext),
        None => format!("{}-{}", millis, random),
    }
}

/// Extension of an uploaded file's original name, if it is safe to reuse.
///
/// Only short ASCII alphanumeric extensions survive, so a client-supplied
/// name can never inject separators into the stored name.
pub fn extension_of(original_filename: &str) -> Option<String> {
    let ext = Path::new(original_filename).extension()?.to_str()?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_string())
}

pub fn reference_for(file_name: &str) -> String {
    format!("{}{}", UPLOADS_PATH_PREFIX, file_name)
}

/// Resolve a `/uploads/<name>` reference back to the bare stored name
pub fn file_name_from_reference(reference: &str) -> Result<&str, StorageError> {
    let name = reference
        .strip_prefix(UPLOADS_PATH_PREFIX)
        .ok_or_else(|| StorageError::InvalidReference(reference.to_string()))?;

    validate_file_name(name)?;
    Ok(name)
}

/// A stored name is a single path component made of `[A-Za-z0-9._-]`, not starting with a dot
pub fn validate_file_name(name: &str) -> Result<(), StorageError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidReference(name.to_string()))
    }
}

/// Content type served for a stored file, inferred from its extension
pub fn content_type_for_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_name_shape() {
        let name = generate_file_name(Some("png"));
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");

        let (millis, random) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert!(random.parse::<u32>().unwrap() < 1_000_000_000);
        assert!(validate_file_name(&name).is_ok());
    }

    #[test]
    fn test_generated_name_without_extension() {
        let name = generate_file_name(None);
        assert!(!name.contains('.'));
        assert_eq!(name.split('-').count(), 2);
    }

    #[test]
    fn test_generated_names_do_not_repeat() {
        let names: HashSet<String> = (0..500).map(|_| generate_file_name(Some("jpg"))).collect();
        assert_eq!(names.len(), 500);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("flood.JPG"), Some("JPG".to_string()));
        assert_eq!(extension_of("photo.final.png"), Some("png".to_string()));
        assert_eq!(extension_of("no_extension"), None);
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("weird.p/ng"), None);
        assert_eq!(extension_of("a.verylongextension"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn test_reference_round_trip() {
        let reference = reference_for("1700000000000-42.png");
        assert_eq!(reference, "/uploads/1700000000000-42.png");
        assert_eq!(
            file_name_from_reference(&reference).unwrap(),
            "1700000000000-42.png"
        );
    }

    #[test]
    fn test_reference_rejects_traversal_and_foreign_paths() {
        assert!(file_name_from_reference("/uploads/../secret").is_err());
        assert!(file_name_from_reference("/uploads/a/b.png").is_err());
        assert!(file_name_from_reference("/uploads/").is_err());
        assert!(file_name_from_reference("/static/a.png").is_err());
        assert!(file_name_from_reference("a.png").is_err());
    }

    #[test]
    fn test_content_type_for_name() {
        assert_eq!(content_type_for_name("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for_name("a.png"), "image/png");
        assert_eq!(content_type_for_name("a.webp"), "image/webp");
        assert_eq!(content_type_for_name("a"), "application/octet-stream");
    }
}
