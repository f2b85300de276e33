use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - the durable collection all reads and writes funnel
/// through. Every mutation commits immediately; there is no transaction
/// boundary spanning multiple operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Insert a new post. The repository records insertion order so that
    /// timestamp ties enumerate newest-inserted first.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace the stored row identified by `post.id`.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by its ID. Returns `RepoError::NotFound` when no row
    /// matches.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Full snapshot of the collection, newest first (`updated_at`
    /// descending, ties broken by insertion order, newest-inserted first).
    /// Later mutations never alter an already-returned snapshot.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;
}
