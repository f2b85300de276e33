//! In-memory port implementations for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::{ImageStoreError, RepoError};
use crate::ports::{ChangeFeed, ImageStore, PostEvent, PostRepository};

/// Vec-backed repository honoring the enumeration order contract.
#[derive(Default)]
pub(crate) struct MemoryRepo {
    posts: Mutex<Vec<Post>>,
    deletes_fail: AtomicBool,
}

impl MemoryRepo {
    pub(crate) fn fail_deletes(&self, fail: bool) {
        self.deletes_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostRepository for MemoryRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint("Post already exists".to_string()));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        // Insertion order (the Vec position) stays put; only the row changes
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.deletes_fail.load(Ordering::SeqCst) {
            return Err(RepoError::Query("Simulated commit failure".to_string()));
        }
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.lock().unwrap();
        // Reverse first so the stable sort leaves timestamp ties in
        // newest-inserted-first order
        let mut snapshot: Vec<Post> = posts.iter().rev().cloned().collect();
        snapshot.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(snapshot)
    }
}

/// Repository whose writes always fail, for commit-failure paths.
pub(crate) struct FailingRepo;

#[async_trait]
impl PostRepository for FailingRepo {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Connection("Database unavailable".to_string()))
    }

    async fn insert(&self, _post: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query("Commit failed".to_string()))
    }

    async fn update(&self, _post: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query("Commit failed".to_string()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Query("Commit failed".to_string()))
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("Database unavailable".to_string()))
    }
}

/// Image store that records deletions; loads always miss.
#[derive(Default)]
pub(crate) struct RecordingImageStore {
    deleted: Mutex<Vec<String>>,
}

impl RecordingImageStore {
    pub(crate) fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn save(&self, _bytes: &[u8]) -> Result<String, ImageStoreError> {
        Ok(Uuid::new_v4().to_string())
    }

    async fn load(&self, reference: &str) -> Result<Vec<u8>, ImageStoreError> {
        Err(ImageStoreError::NotFound(reference.to_string()))
    }

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError> {
        self.deleted.lock().unwrap().push(reference.to_string());
        Ok(())
    }
}

/// Change feed that records everything published to it.
#[derive(Default)]
pub(crate) struct RecordingFeed {
    events: Mutex<Vec<PostEvent>>,
}

impl RecordingFeed {
    pub(crate) fn events(&self) -> Vec<PostEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ChangeFeed for RecordingFeed {
    fn publish(&self, event: PostEvent) {
        self.events.lock().unwrap().push(event);
    }
}
