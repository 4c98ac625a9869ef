use std::sync::Arc;

use async_trait::async_trait;

use super::basket::BasketTable;
use crate::store::WishlistStore;
use crate::{BookId, CustomerId, Result, Wishlist, WishlistId, WishlistItem, WishlistItemId};

/// In-memory wishlist store.
#[derive(Clone, Default)]
pub struct InMemoryWishlistStore {
    table: Arc<BasketTable<Wishlist>>,
}

impl InMemoryWishlistStore {
    /// Creates a new empty wishlist store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistStore for InMemoryWishlistStore {
    async fn create_wishlist(&self, customer_id: CustomerId) -> Result<Wishlist> {
        Ok(self.table.create(customer_id).await)
    }

    async fn for_customer(&self, customer_id: CustomerId) -> Result<Wishlist> {
        Ok(self.table.for_customer(customer_id).await)
    }

    async fn get_wishlist(&self, id: WishlistId) -> Result<(Wishlist, Vec<WishlistItem>)> {
        self.table.get(id).await
    }

    async fn list_wishlists(&self) -> Result<Vec<Wishlist>> {
        Ok(self.table.list().await)
    }

    async fn update_wishlist(&self, wishlist: Wishlist) -> Result<()> {
        self.table.update(wishlist).await
    }

    async fn delete_wishlist(&self, id: WishlistId) -> Result<()> {
        self.table.delete(id).await
    }

    async fn add_item(
        &self,
        wishlist_id: WishlistId,
        book_id: BookId,
        quantity: i64,
    ) -> Result<WishlistItem> {
        self.table.add_line(wishlist_id, book_id, quantity).await
    }

    async fn update_item(
        &self,
        wishlist_id: WishlistId,
        item_id: WishlistItemId,
        quantity: i64,
    ) -> Result<()> {
        self.table.update_line(wishlist_id, item_id, quantity).await
    }

    async fn delete_item(&self, wishlist_id: WishlistId, item_id: WishlistItemId) -> Result<()> {
        self.table.delete_line(wishlist_id, item_id).await
    }
}
