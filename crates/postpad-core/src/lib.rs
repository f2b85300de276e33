//! # Postpad Core
//!
//! The domain layer of the postpad note store.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod store;

pub use domain::Post;
pub use error::DomainError;
pub use presenter::PostsPresenter;
pub use store::PostStore;

#[cfg(test)]
pub(crate) mod testing;
