//! # Postpad Infrastructure
//!
//! Concrete implementations of the ports defined in `postpad-core`:
//! SQLite persistence via SeaORM, filesystem image storage under the
//! platform's per-app document directory, and the in-process change feed.

pub mod config;
pub mod database;
pub mod events;
pub mod images;
pub mod telemetry;

pub use config::StoragePaths;
pub use database::SqlitePostRepository;
pub use events::InMemoryChangeFeed;
pub use images::FsImageStore;
