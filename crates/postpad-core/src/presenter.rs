//! List/search presentation logic.
//!
//! Keeps an always-sorted cached snapshot of the store and an optional
//! filtered view over it, and keeps both consistent through deletions.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::store::PostStore;

pub struct PostsPresenter {
    store: Arc<PostStore>,
    base: Vec<Post>,
    filtered: Vec<Post>,
    search_active: bool,
    search_term: String,
}

impl PostsPresenter {
    pub fn new(store: Arc<PostStore>) -> Self {
        Self {
            store,
            base: Vec::new(),
            filtered: Vec::new(),
            search_active: false,
            search_term: String::new(),
        }
    }

    /// Replace the cached base list with a fresh snapshot from the store.
    /// This is the only way the base list is repopulated. An active
    /// search is recomputed against the new snapshot.
    pub async fn refresh(&mut self) -> Result<(), DomainError> {
        self.base = self.store.list().await?;
        self.refilter();
        Ok(())
    }

    /// Engage or disengage search mode. The term is kept independently;
    /// a non-empty term only filters while search mode is engaged.
    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    /// Set the search term and recompute the filtered view from the
    /// current base list. The base list itself is never mutated.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
    }

    /// True iff search mode is engaged AND the term is non-empty. Two
    /// independent flags combined here, never a single cached state.
    pub fn is_filtering(&self) -> bool {
        self.search_active && !self.search_term.is_empty()
    }

    /// The rows a list view should currently display.
    pub fn visible(&self) -> &[Post] {
        if self.is_filtering() {
            &self.filtered
        } else {
            &self.base
        }
    }

    /// Remove the post from the in-memory lists first, then delete it
    /// durably, so a re-render between the two steps never shows a stale
    /// row. If the durable delete fails the view is re-synced from the
    /// store and the error is returned.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), DomainError> {
        let Some(post) = self.base.iter().find(|p| p.id == id).cloned() else {
            return Err(DomainError::NotFound { id });
        };

        self.base.retain(|p| p.id != id);
        self.filtered.retain(|p| p.id != id);

        if let Err(err) = self.store.delete(&post).await {
            if let Err(refresh_err) = self.refresh().await {
                tracing::warn!(error = %refresh_err, "Failed to re-sync view after delete failure");
            }
            return Err(err);
        }
        Ok(())
    }

    /// Case-insensitive substring match on titles, recomputed from the
    /// current base list.
    fn refilter(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .base
            .iter()
            .filter(|post| post.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}
