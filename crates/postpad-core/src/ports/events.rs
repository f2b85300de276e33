use uuid::Uuid;

use crate::domain::Post;

/// Event published after every successful store mutation so that live
/// views can resynchronize.
#[derive(Debug, Clone)]
pub enum PostEvent {
    Created(Post),
    Updated(Post),
    Deleted(Uuid),
}

/// Change feed - an explicit publish interface replacing an implicit
/// observer back-reference. Subscription is adapter-specific; publishing
/// to a feed nobody listens on is a no-op.
pub trait ChangeFeed: Send + Sync {
    fn publish(&self, event: PostEvent);
}
