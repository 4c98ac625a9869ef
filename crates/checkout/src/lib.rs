//! Checkout and gifting.
//!
//! Both workflows read a source aggregate (a cart or a wishlist), price every
//! line against the current catalog and then create an order in a single
//! store write. Every fallible read happens before that write, so a failed
//! checkout never leaves a partial order behind. The source aggregate is left
//! as it was; discarding it is up to the caller.

pub mod coordinator;
pub mod error;

pub use coordinator::{CheckoutCoordinator, GiftedOrder, PlacedOrder};
pub use error::CheckoutError;
