use async_trait::async_trait;

use crate::error::ImageStoreError;

/// Image blob store - durably stores image bytes under a private
/// directory and hands back an opaque reference.
///
/// There is no update operation: replacing an image means saving a new
/// blob under a new reference and discarding the old one.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the bytes under a freshly generated name and return that
    /// name as the reference.
    async fn save(&self, bytes: &[u8]) -> Result<String, ImageStoreError>;

    /// Resolve a reference back to its bytes.
    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageStoreError>;

    /// Best-effort removal of a blob. A reference that no longer resolves
    /// is not an error.
    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError>;
}
