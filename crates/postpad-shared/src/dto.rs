//! Data Transfer Objects - types exchanged with the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postpad_core::domain::Post;

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    /// Reference returned by the image store, when a photo was chosen.
    pub image_ref: Option<String>,
}

/// Request to update a post. The stored image is replaced only when
/// `image_ref` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: String,
    pub title: String,
    pub image_ref: Option<String>,
}

/// A single rendered list row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    /// Human-readable timestamp, or the literal "No date" when the row
    /// has none.
    pub date: String,
    /// False means the view substitutes a placeholder image.
    pub has_image: bool,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            date: post
                .updated_at
                .map(format_date)
                .unwrap_or_else(|| "No date".to_string()),
            has_image: post.image_ref.is_some(),
        }
    }
}

/// Map a visible slice of posts to renderable rows, order preserved.
pub fn view_rows(posts: &[Post]) -> Vec<PostView> {
    posts.iter().map(PostView::from).collect()
}

/// Medium date, short time - e.g. "Jul 16, 2024 at 17:42".
fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %e, %Y at %H:%M").to_string()
}
