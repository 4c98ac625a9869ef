//! Order service.

use store::{BookStore, CustomerId, NewOrderItem, Order, OrderId, OrderItem, OrderStore};

use crate::catalog::CatalogService;
use crate::error::Result;

/// Service for placing orders directly and for administrative edits.
///
/// Orders built from a cart or a wishlist go through the checkout
/// coordinator instead, which prices the lines from the catalog. Here the
/// caller supplies the prices; only the book references are checked.
pub struct OrderService<O: OrderStore, B: BookStore> {
    orders: O,
    catalog: CatalogService<B>,
}

impl<O: OrderStore, B: BookStore> OrderService<O, B> {
    /// Creates a new order service.
    pub fn new(orders: O, books: B) -> Self {
        Self {
            orders,
            catalog: CatalogService::new(books),
        }
    }

    /// Places an order with caller-supplied lines.
    ///
    /// Every referenced book must exist; nothing is written if one is
    /// missing.
    #[tracing::instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        items: Vec<NewOrderItem>,
    ) -> Result<(Order, Vec<OrderItem>)> {
        for item in &items {
            self.catalog.require_book(item.book_id).await?;
        }
        let (order, items) = self.orders.create(customer_id, items).await?;
        tracing::info!(order_id = %order.id, total = %order.total, "order placed");
        Ok((order, items))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<(Order, Vec<OrderItem>)> {
        Ok(self.orders.get(id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.list().await?)
    }

    /// Lists the orders placed under a customer, including gift orders the
    /// customer paid for.
    #[tracing::instrument(skip(self))]
    pub async fn orders_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        Ok(self.orders.list_for_customer(customer_id).await?)
    }

    /// Replaces owner, total and status of an order.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id, status = %order.status))]
    pub async fn update_order(&self, order: Order) -> Result<()> {
        self.orders.update(order).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<()> {
        self.orders.delete(id).await?;
        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }
}
