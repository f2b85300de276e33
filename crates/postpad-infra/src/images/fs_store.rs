//! Filesystem-backed image blob store.
//!
//! Blobs live flat in a private images directory. A stored blob is
//! addressed by a generated UUID file name, which is the opaque reference
//! recorded on the post.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use postpad_core::error::ImageStoreError;
use postpad_core::ports::ImageStore;

pub struct FsImageStore {
    base_dir: PathBuf,
}

impl FsImageStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// References are bare file names; anything that could resolve
    /// outside the private directory is answered as a miss.
    fn resolve(&self, reference: &str) -> Result<PathBuf, ImageStoreError> {
        if reference.is_empty()
            || reference.contains(['/', '\\'])
            || reference == "."
            || reference == ".."
        {
            return Err(ImageStoreError::NotFound(reference.to_string()));
        }
        Ok(self.base_dir.join(reference))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, bytes: &[u8]) -> Result<String, ImageStoreError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        let reference = Uuid::new_v4().to_string();
        let path = self.base_dir.join(&reference);
        fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(%reference, size = bytes.len(), "Image saved");
        Ok(reference)
    }

    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageStoreError> {
        let path = self.resolve(reference)?;
        fs::read(&path).await.map_err(|_| {
            tracing::warn!(%reference, "Image missing or unreadable");
            ImageStoreError::NotFound(reference.to_string())
        })
    }

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError> {
        let path = self.resolve(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStoreError::WriteFailed(e.to_string())),
        }
    }
}
