//! Domain services for the bookstore.
//!
//! This crate sits between the transport layer and the entity stores:
//! - `CatalogService` for book CRUD and catalog queries
//! - `CartService` and `WishlistService`, which check that a book exists
//!   before it is put into a cart or wishlist
//! - `OrderService` for direct order placement and administrative edits

pub mod cart;
pub mod catalog;
pub mod error;
pub mod orders;
pub mod wishlist;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use error::DomainError;
pub use orders::OrderService;
pub use wishlist::WishlistService;
