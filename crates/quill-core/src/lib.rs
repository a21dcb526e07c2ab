//! # Quill Core
//!
//! The domain layer of Quill. Domain types, the store port, and the
//! fixture generator live here, with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod fixtures;
pub mod ports;

pub use error::StoreError;
