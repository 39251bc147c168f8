use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use axum::body::Bytes;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::content_store::{
    file_name_from_reference, generate_file_name, reference_for, validate_file_name,
    ContentStore, DeleteOutcome, StorageError, MAX_NAME_ATTEMPTS,
};

/// Flat directory content store. Every upload lives directly under `root`.
pub struct LocalContentStore {
    root: PathBuf,
}

impl LocalContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the content directory if it does not exist yet
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                action: "create directory",
                name: self.root.display().to_string(),
                source,
            })
    }

    async fn write_new(&self, name: &str, data: &[u8]) -> std::io::Result<()> {
        let path = self.root.join(name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written = async {
            file.write_all(data).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            // Never leave a truncated file behind a name nobody will reference
            if let Err(cleanup) = fs::remove_file(&path).await {
                warn!("Failed to remove partial upload {}: {}", path.display(), cleanup);
            }
            return Err(e);
        }

        Ok(())
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn put(&self, data: Bytes, extension: Option<&str>) -> Result<String, StorageError> {
        self.ensure_root().await?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = generate_file_name(extension);

            match self.write_new(&name, &data).await {
                Ok(()) => {
                    debug!("Stored upload {} ({} bytes)", name, data.len());
                    return Ok(reference_for(&name));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!("Generated upload name {} already taken, retrying", name);
                }
                Err(source) => {
                    return Err(StorageError::Io {
                        action: "write",
                        name,
                        source,
                    })
                }
            }
        }

        Err(StorageError::NameExhausted(MAX_NAME_ATTEMPTS))
    }

    async fn get(&self, file_name: &str) -> Result<Option<Bytes>, StorageError> {
        validate_file_name(file_name)?;

        match fs::read(self.root.join(file_name)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                action: "read",
                name: file_name.to_string(),
                source,
            }),
        }
    }

    async fn delete(&self, reference: &str) -> Result<DeleteOutcome, StorageError> {
        let name = file_name_from_reference(reference)?;

        match fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(DeleteOutcome::Removed),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DeleteOutcome::Missing),
            Err(source) => Err(StorageError::Io {
                action: "delete",
                name: name.to_string(),
                source,
            }),
        }
    }
}
