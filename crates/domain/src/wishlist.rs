//! Wishlist service.

use store::{
    BookId, BookStore, CustomerId, Wishlist, WishlistId, WishlistItem, WishlistItemId,
    WishlistStore,
};

use crate::catalog::CatalogService;
use crate::error::Result;

/// Service for managing wishlists.
pub struct WishlistService<W: WishlistStore, B: BookStore> {
    wishlists: W,
    catalog: CatalogService<B>,
}

impl<W: WishlistStore, B: BookStore> WishlistService<W, B> {
    /// Creates a new wishlist service.
    pub fn new(wishlists: W, books: B) -> Self {
        Self {
            wishlists,
            catalog: CatalogService::new(books),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_wishlist(&self, customer_id: CustomerId) -> Result<Wishlist> {
        Ok(self.wishlists.create_wishlist(customer_id).await?)
    }

    /// Returns the customer's wishlist, opening one on first access.
    #[tracing::instrument(skip(self))]
    pub async fn wishlist_for_customer(&self, customer_id: CustomerId) -> Result<Wishlist> {
        Ok(self.wishlists.for_customer(customer_id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_wishlist(&self, id: WishlistId) -> Result<(Wishlist, Vec<WishlistItem>)> {
        Ok(self.wishlists.get_wishlist(id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_wishlists(&self) -> Result<Vec<Wishlist>> {
        Ok(self.wishlists.list_wishlists().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_wishlist(&self, wishlist: Wishlist) -> Result<()> {
        Ok(self.wishlists.update_wishlist(wishlist).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_wishlist(&self, id: WishlistId) -> Result<()> {
        Ok(self.wishlists.delete_wishlist(id).await?)
    }

    /// Puts a book on the wishlist, merging with an existing line for it.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(
        &self,
        wishlist_id: WishlistId,
        book_id: BookId,
        quantity: i64,
    ) -> Result<WishlistItem> {
        self.catalog.require_book(book_id).await?;
        Ok(self.wishlists.add_item(wishlist_id, book_id, quantity).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_item(
        &self,
        wishlist_id: WishlistId,
        item_id: WishlistItemId,
        quantity: i64,
    ) -> Result<()> {
        Ok(self
            .wishlists
            .update_item(wishlist_id, item_id, quantity)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_item(
        &self,
        wishlist_id: WishlistId,
        item_id: WishlistItemId,
    ) -> Result<()> {
        Ok(self.wishlists.delete_item(wishlist_id, item_id).await?)
    }
}
