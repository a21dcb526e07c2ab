//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! With default features disabled only the in-memory store is built.

pub mod store;

pub use store::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
pub use store::{PostgresPostStore, connect};
