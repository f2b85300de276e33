use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a titled, timestamped note with an optional image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    /// Set on create and refreshed on every update; a single field serves
    /// both roles, so edit history is not preserved. Optional at the
    /// storage layer; views render "No date" when absent.
    pub updated_at: Option<DateTime<Utc>>,
    /// Opaque reference into the image store. `None` means no image was
    /// chosen and views substitute a placeholder.
    pub image_ref: Option<String>,
}

impl Post {
    /// Create a new post with a generated ID and the current timestamp.
    pub fn new(title: String, image_ref: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            updated_at: Some(Utc::now()),
            image_ref,
        }
    }
}
