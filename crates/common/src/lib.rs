//! Shared types used across the bookstore crates.
//!
//! Every entity kind gets its own integer handle type so a cart id can never
//! be passed where a book id is expected.

mod money;
mod types;

pub use money::Money;
pub use types::{
    BookId, CartId, CartItemId, CustomerId, OrderId, OrderItemId, WishlistId, WishlistItemId,
};
