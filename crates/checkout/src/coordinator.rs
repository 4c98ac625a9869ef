//! Checkout coordinator spanning the book, cart, wishlist and order stores.

use std::time::Instant;

use domain::CatalogService;
use serde::Serialize;
use store::{
    BookId, BookStore, CartId, CartStore, CustomerId, NewOrderItem, Order, OrderItem, OrderStore,
    WishlistId, WishlistStore,
};

use crate::error::{CheckoutError, Result};

/// An order created from a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// An order created from someone's wishlist.
///
/// The order belongs to the buyer; `recipient` is the wishlist owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub recipient: CustomerId,
}

/// Orchestrates checkout and gifting.
///
/// No store lock is held across calls into another store: the source
/// aggregate is copied out, each book is fetched on its own, and the order
/// is created last.
pub struct CheckoutCoordinator<B, C, W, O>
where
    B: BookStore,
    C: CartStore,
    W: WishlistStore,
    O: OrderStore,
{
    catalog: CatalogService<B>,
    carts: C,
    wishlists: W,
    orders: O,
}

impl<B, C, W, O> CheckoutCoordinator<B, C, W, O>
where
    B: BookStore,
    C: CartStore,
    W: WishlistStore,
    O: OrderStore,
{
    /// Creates a new checkout coordinator.
    pub fn new(books: B, carts: C, wishlists: W, orders: O) -> Self {
        Self {
            catalog: CatalogService::new(books),
            carts,
            wishlists,
            orders,
        }
    }

    /// Places an order for `customer_id` from the contents of a cart.
    ///
    /// Lines are priced at the current catalog price, not at whatever the
    /// book cost when it was added. The cart is not cleared.
    #[tracing::instrument(skip(self), fields(flow = "cart"))]
    pub async fn create_order_from_cart(
        &self,
        customer_id: CustomerId,
        cart_id: CartId,
    ) -> Result<PlacedOrder> {
        let start = Instant::now();
        let result = self.checkout_cart(customer_id, cart_id).await;
        record("cart", start, &result);

        let (order, items) = result?;
        metrics::counter!("checkout_orders_total").increment(1);
        tracing::info!(order_id = %order.id, total = %order.total, "cart checked out");
        Ok(PlacedOrder { order, items })
    }

    /// Buys the contents of a wishlist for its owner.
    ///
    /// The order is placed under `buyer_id`; the wishlist owner is returned
    /// as the recipient. The wishlist is not cleared.
    #[tracing::instrument(skip(self), fields(flow = "gift"))]
    pub async fn gift_from_wishlist(
        &self,
        wishlist_id: WishlistId,
        buyer_id: CustomerId,
    ) -> Result<GiftedOrder> {
        let start = Instant::now();
        let result = self.gift_wishlist(wishlist_id, buyer_id).await;
        record("gift", start, &result);

        let (order, items, recipient) = result?;
        metrics::counter!("gift_orders_total").increment(1);
        tracing::info!(
            order_id = %order.id,
            buyer = %buyer_id,
            recipient = %recipient,
            "wishlist gifted"
        );
        Ok(GiftedOrder {
            order,
            items,
            recipient,
        })
    }

    async fn checkout_cart(
        &self,
        customer_id: CustomerId,
        cart_id: CartId,
    ) -> Result<(Order, Vec<OrderItem>)> {
        let (_, lines) = self.carts.get_cart(cart_id).await?;
        let lines = lines.iter().map(|item| (item.book_id, item.quantity));
        let items = self.price_lines(lines).await?;
        Ok(self.orders.create(customer_id, items).await?)
    }

    async fn gift_wishlist(
        &self,
        wishlist_id: WishlistId,
        buyer_id: CustomerId,
    ) -> Result<(Order, Vec<OrderItem>, CustomerId)> {
        if !buyer_id.is_valid() {
            return Err(CheckoutError::InvalidBuyer(buyer_id));
        }
        let (wishlist, lines) = self.wishlists.get_wishlist(wishlist_id).await?;
        let lines = lines.iter().map(|item| (item.book_id, item.quantity));
        let items = self.price_lines(lines).await?;
        let (order, items) = self.orders.create(buyer_id, items).await?;
        Ok((order, items, wishlist.customer_id))
    }

    /// Builds order lines at the current catalog price.
    ///
    /// Fails on the first missing book, before anything is written.
    async fn price_lines(
        &self,
        lines: impl ExactSizeIterator<Item = (BookId, i64)>,
    ) -> Result<Vec<NewOrderItem>> {
        if lines.len() == 0 {
            return Err(CheckoutError::ItemsRequired);
        }
        let mut items = Vec::with_capacity(lines.len());
        for (book_id, quantity) in lines {
            let book = self.catalog.require_book(book_id).await?;
            items.push(NewOrderItem::new(book_id, book.price, quantity));
        }
        Ok(items)
    }
}

fn record<T>(flow: &'static str, start: Instant, result: &Result<T>) {
    metrics::histogram!("checkout_duration_seconds", "flow" => flow)
        .record(start.elapsed().as_secs_f64());
    if let Err(e) = result {
        metrics::counter!("checkout_failed_total", "flow" => flow).increment(1);
        tracing::warn!(error = %e, "checkout failed");
    }
}
