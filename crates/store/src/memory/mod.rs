//! In-memory store implementations.
//!
//! Each store is `Clone` and shares its state through an `Arc`, so clones
//! handed to different services observe the same data.

mod basket;
mod book;
mod cart;
mod order;
mod wishlist;

pub use book::InMemoryBookStore;
pub use cart::InMemoryCartStore;
pub use order::InMemoryOrderStore;
pub use wishlist::InMemoryWishlistStore;
