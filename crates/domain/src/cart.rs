//! Cart service.

use store::{BookId, BookStore, Cart, CartId, CartItem, CartItemId, CartStore, CustomerId};

use crate::catalog::CatalogService;
use crate::error::Result;

/// Service for managing shopping carts.
///
/// Adds go through the catalog first so a cart line always points at a book
/// that existed when it was added. The catalog lookup and the cart write are
/// separate store calls; no lock is held across them.
pub struct CartService<C: CartStore, B: BookStore> {
    carts: C,
    catalog: CatalogService<B>,
}

impl<C: CartStore, B: BookStore> CartService<C, B> {
    /// Creates a new cart service.
    pub fn new(carts: C, books: B) -> Self {
        Self {
            carts,
            catalog: CatalogService::new(books),
        }
    }

    /// Opens a new cart for a customer.
    #[tracing::instrument(skip(self))]
    pub async fn create_cart(&self, customer_id: CustomerId) -> Result<Cart> {
        Ok(self.carts.create_cart(customer_id).await?)
    }

    /// Returns the customer's cart, opening one on first access.
    #[tracing::instrument(skip(self))]
    pub async fn cart_for_customer(&self, customer_id: CustomerId) -> Result<Cart> {
        Ok(self.carts.for_customer(customer_id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self, id: CartId) -> Result<(Cart, Vec<CartItem>)> {
        Ok(self.carts.get_cart(id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_carts(&self) -> Result<Vec<Cart>> {
        Ok(self.carts.list_carts().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_cart(&self, cart: Cart) -> Result<()> {
        Ok(self.carts.update_cart(cart).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_cart(&self, id: CartId) -> Result<()> {
        Ok(self.carts.delete_cart(id).await?)
    }

    /// Puts a book into the cart, merging with an existing line for it.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(
        &self,
        cart_id: CartId,
        book_id: BookId,
        quantity: i64,
    ) -> Result<CartItem> {
        self.catalog.require_book(book_id).await?;
        let item = self.carts.add_item(cart_id, book_id, quantity).await?;
        tracing::debug!(item_id = %item.id, quantity = item.quantity, "cart line updated");
        Ok(item)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_item(
        &self,
        cart_id: CartId,
        item_id: CartItemId,
        quantity: i64,
    ) -> Result<()> {
        Ok(self.carts.update_item(cart_id, item_id, quantity).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, cart_id: CartId, item_id: CartItemId) -> Result<()> {
        Ok(self.carts.delete_item(cart_id, item_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use store::{InMemoryBookStore, InMemoryCartStore, Money, NewBook, StoreError};

    async fn service_with_book() -> (CartService<InMemoryCartStore, InMemoryBookStore>, BookId) {
        let books = InMemoryBookStore::new();
        let book = books
            .create(NewBook::new("Dune", "Frank Herbert", Money::from_cents(1999)))
            .await
            .unwrap();
        (CartService::new(InMemoryCartStore::new(), books), book.id)
    }

    #[tokio::test]
    async fn add_item_requires_existing_book() {
        let (service, _) = service_with_book().await;
        let cart = service.create_cart(CustomerId::new(1)).await.unwrap();

        let result = service.add_item(cart.id, BookId::new(99), 1).await;
        assert!(matches!(result, Err(DomainError::BookNotFound(_))));
        assert!(service.get_cart(cart.id).await.unwrap().1.is_empty());
    }

    #[tokio::test]
    async fn add_item_merges_lines() {
        let (service, book) = service_with_book().await;
        let cart = service.cart_for_customer(CustomerId::new(1)).await.unwrap();

        service.add_item(cart.id, book, 1).await.unwrap();
        let item = service.add_item(cart.id, book, 2).await.unwrap();
        assert_eq!(item.quantity, 3);
    }

    #[tokio::test]
    async fn add_item_to_missing_cart_surfaces_store_error() {
        let (service, book) = service_with_book().await;
        let result = service.add_item(CartId::new(5), book, 1).await;
        assert!(matches!(
            result,
            Err(DomainError::Store(StoreError::NotFound { entity: "cart", .. }))
        ));
    }
}
