//! SeaORM entities for the post collection.

pub mod post;
