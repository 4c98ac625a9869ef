//! HTTP route handlers.

pub mod books;
pub mod carts;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod wishlists;

use serde::{Deserialize, Serialize};
use store::{BookId, CartId, CartItemId, CustomerId, OrderId, WishlistId, WishlistItemId};

use crate::error::ApiError;

/// Converts a raw id from a path or body into a handle.
///
/// Zero and negative ids are rejected here, before any service is called.
pub(crate) trait FromRawId: Sized {
    const ENTITY: &'static str;

    fn from_raw(raw: i64) -> Option<Self>;

    fn parse(raw: i64) -> Result<Self, ApiError> {
        Self::from_raw(raw).ok_or_else(|| ApiError::invalid_id(Self::ENTITY, raw))
    }
}

macro_rules! raw_id {
    ($($ty:ty => $entity:literal),* $(,)?) => {
        $(
            impl FromRawId for $ty {
                const ENTITY: &'static str = $entity;

                fn from_raw(raw: i64) -> Option<Self> {
                    <$ty>::from_i64(raw)
                }
            }
        )*
    };
}

raw_id!(
    BookId => "book",
    CartId => "cart",
    CartItemId => "cart item",
    CustomerId => "customer",
    OrderId => "order",
    WishlistId => "wishlist",
    WishlistItemId => "wishlist item",
);

/// Body of list responses.
#[derive(Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Body naming the customer that owns a cart or wishlist.
#[derive(Deserialize)]
pub struct OwnerRequest {
    pub customer_id: i64,
}

/// Body of `POST .../items`. Quantity defaults to one.
#[derive(Deserialize)]
pub struct AddItemRequest {
    pub book_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}
