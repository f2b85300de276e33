//! The post store - sole owner of the durable post collection.
//!
//! Wraps the repository port with title validation, timestamp handling,
//! cascading image cleanup, and change-event publishing. Constructed
//! explicitly and passed by handle wherever it is needed; there is no
//! process-wide singleton.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::{ChangeFeed, ImageStore, PostEvent, PostRepository};

pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    images: Arc<dyn ImageStore>,
    feed: Arc<dyn ChangeFeed>,
}

impl PostStore {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        images: Arc<dyn ImageStore>,
        feed: Arc<dyn ChangeFeed>,
    ) -> Self {
        Self { repo, images, feed }
    }

    /// Create a new post with a fresh ID and the current timestamp.
    ///
    /// The title must be non-empty; the image reference is optional.
    /// Commits immediately. A commit failure is returned as a recoverable
    /// error, never a panic.
    pub async fn create(
        &self,
        title: &str,
        image_ref: Option<String>,
    ) -> Result<Post, DomainError> {
        let title = validated_title(title)?;

        let post = Post::new(title, image_ref);
        let saved = self.repo.insert(post).await?;
        tracing::debug!(post_id = %saved.id, "Post created");

        self.feed.publish(PostEvent::Created(saved.clone()));
        Ok(saved)
    }

    /// Update a post's title, always refreshing the timestamp even when
    /// the title is unchanged. The image reference is replaced only when
    /// a new one is supplied; a replaced blob is discarded best-effort.
    pub async fn update(
        &self,
        id: Uuid,
        new_title: &str,
        new_image_ref: Option<String>,
    ) -> Result<Post, DomainError> {
        let title = validated_title(new_title)?;

        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        let previous_ref = match new_image_ref {
            Some(reference) => post.image_ref.replace(reference),
            None => None,
        };

        post.title = title;
        post.updated_at = Some(Utc::now());

        let saved = self.repo.update(post).await?;
        tracing::debug!(post_id = %saved.id, "Post updated");

        if let Some(old_ref) = previous_ref {
            if saved.image_ref.as_deref() != Some(old_ref.as_str()) {
                self.discard_blob(&old_ref).await;
            }
        }

        self.feed.publish(PostEvent::Updated(saved.clone()));
        Ok(saved)
    }

    /// Delete a post and, cascading, the image blob it references.
    ///
    /// Deleting a post that is no longer in the store is a caller error
    /// and reported as `NotFound`.
    pub async fn delete(&self, post: &Post) -> Result<(), DomainError> {
        match self.repo.delete(post.id).await {
            Ok(()) => {}
            Err(RepoError::NotFound) => return Err(DomainError::NotFound { id: post.id }),
            Err(e) => return Err(e.into()),
        }
        tracing::debug!(post_id = %post.id, "Post deleted");

        if let Some(reference) = &post.image_ref {
            self.discard_blob(reference).await;
        }

        self.feed.publish(PostEvent::Deleted(post.id));
        Ok(())
    }

    /// Full snapshot of the collection, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list().await?)
    }

    /// Blob removal never fails a post operation; the read path tolerates
    /// dangling references anyway.
    async fn discard_blob(&self, reference: &str) {
        if let Err(e) = self.images.delete(reference).await {
            tracing::warn!(reference, error = %e, "Failed to remove orphaned image blob");
        }
    }
}

fn validated_title(title: &str) -> Result<String, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}
