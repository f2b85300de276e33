//! SQLite persistence for posts.

mod connection;
pub mod entity;
mod migration;
mod sqlite_repo;

pub use connection::{connect, connect_in_memory};
pub use migration::Migrator;
pub use sqlite_repo::SqlitePostRepository;
