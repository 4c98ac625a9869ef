use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::order::order_total;
use crate::store::OrderStore;
use crate::{
    CustomerId, NewOrderItem, Order, OrderId, OrderItem, OrderItemId, OrderStatus, Result,
    StoreError,
};

const ENTITY: &str = "order";

struct OrderRecord {
    order: Order,
    items: Vec<OrderItem>,
}

struct Ledger {
    next_order_id: u64,
    next_item_id: u64,
    orders: BTreeMap<OrderId, OrderRecord>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            next_order_id: 1,
            next_item_id: 1,
            orders: BTreeMap::new(),
        }
    }
}

/// In-memory order ledger.
///
/// A single lock guards the orders, their items and both id counters, so an
/// order and its items become visible in one step.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.ledger.read().await.orders.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(
        &self,
        customer_id: CustomerId,
        items: Vec<NewOrderItem>,
    ) -> Result<(Order, Vec<OrderItem>)> {
        if items.is_empty() {
            return Err(StoreError::invalid("order items required"));
        }
        for item in &items {
            item.validate()?;
        }
        let total = order_total(&items)?;

        let mut ledger = self.ledger.write().await;
        let order_id = OrderId::new(ledger.next_order_id);
        ledger.next_order_id += 1;

        let mut stored = Vec::with_capacity(items.len());
        for item in items {
            stored.push(OrderItem {
                id: OrderItemId::new(ledger.next_item_id),
                order_id,
                book_id: item.book_id,
                unit_price: item.unit_price,
                quantity: item.quantity,
            });
            ledger.next_item_id += 1;
        }

        let order = Order {
            id: order_id,
            customer_id,
            total,
            status: OrderStatus::Pending,
        };
        ledger.orders.insert(
            order_id,
            OrderRecord {
                order: order.clone(),
                items: stored.clone(),
            },
        );
        drop(ledger);

        metrics::counter!("orders_created_total").increment(1);
        tracing::debug!(%order_id, %customer_id, %total, "order stored");
        Ok((order, stored))
    }

    async fn get(&self, id: OrderId) -> Result<(Order, Vec<OrderItem>)> {
        let ledger = self.ledger.read().await;
        ledger
            .orders
            .get(&id)
            .map(|r| (r.order.clone(), r.items.clone()))
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.orders.values().map(|r| r.order.clone()).collect())
    }

    async fn list_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        let ledger = self.ledger.read().await;
        Ok(ledger
            .orders
            .values()
            .filter(|r| r.order.customer_id == customer_id)
            .map(|r| r.order.clone())
            .collect())
    }

    async fn update(&self, order: Order) -> Result<()> {
        if order.total.is_negative() {
            return Err(StoreError::invalid("total cannot be negative"));
        }

        let mut ledger = self.ledger.write().await;
        let record = ledger
            .orders
            .get_mut(&order.id)
            .ok_or_else(|| StoreError::not_found(ENTITY, order.id))?;
        record.order = order;
        Ok(())
    }

    async fn delete(&self, id: OrderId) -> Result<()> {
        let mut ledger = self.ledger.write().await;
        ledger
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BookId, Money};

    fn line(book: u64, cents: i64) -> NewOrderItem {
        NewOrderItem::new(BookId::new(book), Money::from_cents(cents), 1)
    }

    #[tokio::test]
    async fn create_stamps_ids_and_total() {
        let store = InMemoryOrderStore::new();
        let (order, items) = store
            .create(
                CustomerId::new(4),
                vec![line(1, 1000), NewOrderItem::new(BookId::new(2), Money::from_cents(250), 2)],
            )
            .await
            .unwrap();

        assert_eq!(order.id, OrderId::new(1));
        assert_eq!(order.customer_id, CustomerId::new(4));
        assert_eq!(order.total, Money::from_cents(1500));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.order_id == order.id));
        assert_ne!(items[0].id, items[1].id);

        let (stored, stored_items) = store.get(order.id).await.unwrap();
        assert_eq!(stored, order);
        assert_eq!(stored_items, items);
    }

    #[tokio::test]
    async fn create_rejects_empty_orders() {
        let store = InMemoryOrderStore::new();
        let result = store.create(CustomerId::new(1), vec![]).await;
        assert!(matches!(result, Err(StoreError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn invalid_line_leaves_no_partial_order() {
        let store = InMemoryOrderStore::new();
        let items = vec![line(1, 1000), line(2, 500), line(3, -1)];

        let result = store.create(CustomerId::new(1), items).await;
        assert!(matches!(result, Err(StoreError::InvalidArgument(_))));
        assert_eq!(store.order_count().await, 0);
        assert!(store.list().await.unwrap().is_empty());

        let (order, items) = store
            .create(CustomerId::new(1), vec![line(1, 1000)])
            .await
            .unwrap();
        assert_eq!(order.id, OrderId::new(1));
        assert_eq!(items[0].id, OrderItemId::new(1));
    }

    #[tokio::test]
    async fn overflowing_total_is_rejected_before_insert() {
        let store = InMemoryOrderStore::new();

        let huge_line = NewOrderItem::new(
            BookId::new(1),
            Money::from_cents(1_000_000),
            i64::MAX / 1000,
        );
        let result = store.create(CustomerId::new(1), vec![huge_line]).await;
        assert!(matches!(
            result,
            Err(StoreError::InvalidArgument(ref msg)) if msg == "total overflow"
        ));

        let result = store
            .create(CustomerId::new(1), vec![line(1, i64::MAX), line(2, 1)])
            .await;
        assert!(matches!(
            result,
            Err(StoreError::InvalidArgument(ref msg)) if msg == "total overflow"
        ));

        assert_eq!(store.order_count().await, 0);
        let (order, _) = store
            .create(CustomerId::new(1), vec![line(1, i64::MAX)])
            .await
            .unwrap();
        assert_eq!(order.id, OrderId::new(1));
        assert_eq!(order.total, Money::from_cents(i64::MAX));
    }

    #[tokio::test]
    async fn update_edits_header_only() {
        let store = InMemoryOrderStore::new();
        let (mut order, items) = store
            .create(CustomerId::new(1), vec![line(1, 1000)])
            .await
            .unwrap();

        order.status = OrderStatus::Shipped;
        order.total = Money::from_cents(900);
        store.update(order.clone()).await.unwrap();

        let (stored, stored_items) = store.get(order.id).await.unwrap();
        assert_eq!(stored.status, OrderStatus::Shipped);
        assert_eq!(stored.total, Money::from_cents(900));
        assert_eq!(stored_items, items);
    }

    #[tokio::test]
    async fn update_rejects_negative_total_and_missing_orders() {
        let store = InMemoryOrderStore::new();
        let (mut order, _) = store
            .create(CustomerId::new(1), vec![line(1, 1000)])
            .await
            .unwrap();

        order.total = Money::from_cents(-1);
        assert!(matches!(
            store.update(order.clone()).await,
            Err(StoreError::InvalidArgument(_))
        ));

        order.total = Money::zero();
        order.id = OrderId::new(50);
        assert!(store.update(order).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_and_list_for_customer() {
        let store = InMemoryOrderStore::new();
        let (first, _) = store
            .create(CustomerId::new(1), vec![line(1, 100)])
            .await
            .unwrap();
        store
            .create(CustomerId::new(2), vec![line(1, 100)])
            .await
            .unwrap();

        let mine = store.list_for_customer(CustomerId::new(1)).await.unwrap();
        assert_eq!(mine, vec![first.clone()]);

        store.delete(first.id).await.unwrap();
        assert!(store.get(first.id).await.is_err());
        assert!(store.delete(first.id).await.unwrap_err().is_not_found());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
