//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod events;
mod image_store;
mod repository;

pub use events::{ChangeFeed, PostEvent};
pub use image_store::ImageStore;
pub use repository::PostRepository;
