//! SeaORM entities matching the database schema.

pub mod post;
