//! Checkout error types.

use domain::DomainError;
use store::{CustomerId, StoreError};
use thiserror::Error;

/// Errors that can occur while turning a cart or wishlist into an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The source cart or wishlist has no items.
    #[error("items required")]
    ItemsRequired,

    /// The buyer of a gift is not a valid customer handle.
    #[error("invalid buyer: {0}")]
    InvalidBuyer(CustomerId),

    /// Domain error, including a line that references a missing book.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store error, such as a missing cart or wishlist.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CheckoutError {
    /// Returns true if the error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        match self {
            CheckoutError::Domain(DomainError::BookNotFound(_)) => true,
            CheckoutError::Domain(DomainError::Store(e)) | CheckoutError::Store(e) => {
                e.is_not_found()
            }
            CheckoutError::ItemsRequired | CheckoutError::InvalidBuyer(_) => false,
        }
    }
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
