//! Domain error types.

use store::{BookId, StoreError};
use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error reported by one of the stores.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A referenced book is not in the catalog.
    #[error("book not found: {0}")]
    BookNotFound(BookId),
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;
