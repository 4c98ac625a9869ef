//! Cart and wishlist aggregates.
//!
//! Both are a header owned by a customer plus an ordered list of line items,
//! at most one per book. The shared shape is captured by [`Basket`] and
//! [`BasketLine`] so a single in-memory table serves both stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BookId, CartId, CartItemId, CustomerId, WishlistId, WishlistItemId};

/// A customer's shopping cart header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub customer_id: CustomerId,
    pub created_at: DateTime<Utc>,
}

/// A line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub book_id: BookId,
    pub quantity: i64,
}

/// A customer's wishlist header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: WishlistId,
    pub customer_id: CustomerId,
    pub created_at: DateTime<Utc>,
}

/// A line in a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub wishlist_id: WishlistId,
    pub book_id: BookId,
    pub quantity: i64,
}

/// Header of an aggregate that owns a list of book lines.
pub trait Basket: Clone + Send + Sync + 'static {
    type Id: Copy + Ord + From<u64> + std::fmt::Display + Send + Sync;
    type Line: BasketLine<Parent = Self::Id>;

    /// Entity name used in error messages and metrics labels.
    const ENTITY: &'static str;

    fn open(id: Self::Id, customer_id: CustomerId, created_at: DateTime<Utc>) -> Self;
    fn id(&self) -> Self::Id;
    fn customer_id(&self) -> CustomerId;
}

/// A line item inside a [`Basket`].
pub trait BasketLine: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + From<u64> + std::fmt::Display + Send + Sync;
    type Parent;

    const ENTITY: &'static str;

    fn create(id: Self::Id, parent: Self::Parent, book_id: BookId, quantity: i64) -> Self;
    fn id(&self) -> Self::Id;
    fn book_id(&self) -> BookId;
    fn quantity_mut(&mut self) -> &mut i64;
}

impl Basket for Cart {
    type Id = CartId;
    type Line = CartItem;

    const ENTITY: &'static str = "cart";

    fn open(id: CartId, customer_id: CustomerId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id,
            created_at,
        }
    }

    fn id(&self) -> CartId {
        self.id
    }

    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl BasketLine for CartItem {
    type Id = CartItemId;
    type Parent = CartId;

    const ENTITY: &'static str = "cart item";

    fn create(id: CartItemId, cart_id: CartId, book_id: BookId, quantity: i64) -> Self {
        Self {
            id,
            cart_id,
            book_id,
            quantity,
        }
    }

    fn id(&self) -> CartItemId {
        self.id
    }

    fn book_id(&self) -> BookId {
        self.book_id
    }

    fn quantity_mut(&mut self) -> &mut i64 {
        &mut self.quantity
    }
}

impl Basket for Wishlist {
    type Id = WishlistId;
    type Line = WishlistItem;

    const ENTITY: &'static str = "wishlist";

    fn open(id: WishlistId, customer_id: CustomerId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id,
            created_at,
        }
    }

    fn id(&self) -> WishlistId {
        self.id
    }

    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl BasketLine for WishlistItem {
    type Id = WishlistItemId;
    type Parent = WishlistId;

    const ENTITY: &'static str = "wishlist item";

    fn create(
        id: WishlistItemId,
        wishlist_id: WishlistId,
        book_id: BookId,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            wishlist_id,
            book_id,
            quantity,
        }
    }

    fn id(&self) -> WishlistItemId {
        self.id
    }

    fn book_id(&self) -> BookId {
        self.book_id
    }

    fn quantity_mut(&mut self) -> &mut i64 {
        &mut self.quantity
    }
}
