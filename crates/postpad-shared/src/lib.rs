//! # Postpad Shared
//!
//! Types crossing the presentation boundary: request DTOs and the row
//! model a list view renders.

pub mod dto;

pub use dto::{CreatePostRequest, PostView, UpdatePostRequest, view_rows};
