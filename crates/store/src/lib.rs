//! Entity stores for the bookstore core.
//!
//! Each store is a trait with an in-memory implementation. The in-memory
//! stores are cheap to clone and share their state, so one instance is built
//! per process and handed to every service that needs it.

pub mod basket;
pub mod book;
pub mod error;
pub mod memory;
pub mod order;
pub mod query;
pub mod store;

pub use basket::{Cart, CartItem, Wishlist, WishlistItem};
pub use book::{Book, NewBook};
pub use common::{
    BookId, CartId, CartItemId, CustomerId, Money, OrderId, OrderItemId, WishlistId,
    WishlistItemId,
};
pub use error::{Result, StoreError};
pub use memory::{InMemoryBookStore, InMemoryCartStore, InMemoryOrderStore, InMemoryWishlistStore};
pub use order::{NewOrderItem, Order, OrderItem, OrderStatus};
pub use query::{BookQuery, SortDirection, SortField};
pub use store::{BookStore, CartStore, OrderStore, WishlistStore};
