//! In-process change feed.
//!
//! Fans mutation events out over a tokio broadcast channel to whatever
//! views are alive in this process. Works within a single process only.

use tokio::sync::broadcast;

use postpad_core::ports::{ChangeFeed, PostEvent};

pub struct InMemoryChangeFeed {
    sender: broadcast::Sender<PostEvent>,
}

impl InMemoryChangeFeed {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size);
        Self { sender }
    }

    /// Open a new subscription. A receiver that falls behind the buffer
    /// observes a `Lagged` error and should trigger a full refresh.
    pub fn subscribe(&self) -> broadcast::Receiver<PostEvent> {
        self.sender.subscribe()
    }
}

impl Default for InMemoryChangeFeed {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ChangeFeed for InMemoryChangeFeed {
    fn publish(&self, event: PostEvent) {
        // Ignore send errors (no subscribers)
        match self.sender.send(event) {
            Ok(subscribers) => {
                tracing::debug!(subscribers, "Change event published");
            }
            Err(_) => {
                tracing::debug!("No subscribers for change event");
            }
        }
    }
}
