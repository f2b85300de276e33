//! Change-event distribution.

mod memory;

pub use memory::InMemoryChangeFeed;
