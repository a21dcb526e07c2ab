//! Store-level error types.

use thiserror::Error;

/// Store errors - the backing document store is unreachable or a read/write
/// failed. Lookup misses are not errors; they surface as absent values
/// (`Option`/`bool`) on the port.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),
}
