use std::sync::Arc;

use async_trait::async_trait;

use super::basket::BasketTable;
use crate::store::CartStore;
use crate::{BookId, Cart, CartId, CartItem, CartItemId, CustomerId, Result};

/// In-memory cart store.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    table: Arc<BasketTable<Cart>>,
}

impl InMemoryCartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn create_cart(&self, customer_id: CustomerId) -> Result<Cart> {
        Ok(self.table.create(customer_id).await)
    }

    async fn for_customer(&self, customer_id: CustomerId) -> Result<Cart> {
        Ok(self.table.for_customer(customer_id).await)
    }

    async fn get_cart(&self, id: CartId) -> Result<(Cart, Vec<CartItem>)> {
        self.table.get(id).await
    }

    async fn list_carts(&self) -> Result<Vec<Cart>> {
        Ok(self.table.list().await)
    }

    async fn update_cart(&self, cart: Cart) -> Result<()> {
        self.table.update(cart).await
    }

    async fn delete_cart(&self, id: CartId) -> Result<()> {
        self.table.delete(id).await
    }

    async fn add_item(
        &self,
        cart_id: CartId,
        book_id: BookId,
        quantity: i64,
    ) -> Result<CartItem> {
        self.table.add_line(cart_id, book_id, quantity).await
    }

    async fn update_item(
        &self,
        cart_id: CartId,
        item_id: CartItemId,
        quantity: i64,
    ) -> Result<()> {
        self.table.update_line(cart_id, item_id, quantity).await
    }

    async fn delete_item(&self, cart_id: CartId, item_id: CartItemId) -> Result<()> {
        self.table.delete_line(cart_id, item_id).await
    }
}
