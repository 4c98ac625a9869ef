use serde::{Deserialize, Serialize};

use crate::{BookId, CustomerId, Money, OrderId, OrderItemId, Result, StoreError};

/// Administrative status of an order.
///
/// The core never moves an order between statuses by itself; changes only
/// come through [`crate::OrderStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order header. The total is frozen at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub total: Money,
    #[serde(default)]
    pub status: OrderStatus,
}

/// A line of a placed order, priced at the moment the order was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub book_id: BookId,
    pub unit_price: Money,
    pub quantity: i64,
}

impl OrderItem {
    /// Returns unit price times quantity.
    ///
    /// Stored lines were priced with overflow checks at creation, so the
    /// clamp never applies to them.
    pub fn line_price(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Input for one line of an order that is about to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub book_id: BookId,
    pub unit_price: Money,
    pub quantity: i64,
}

impl NewOrderItem {
    /// Creates a new order line.
    pub fn new(book_id: BookId, unit_price: Money, quantity: i64) -> Self {
        Self {
            book_id,
            unit_price,
            quantity,
        }
    }

    /// Returns unit price times quantity, or `None` if it overflows.
    pub fn line_price(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.book_id.is_valid() {
            return Err(StoreError::invalid("book id must be positive"));
        }
        if self.unit_price.is_negative() {
            return Err(StoreError::invalid("price cannot be negative"));
        }
        if self.quantity <= 0 {
            return Err(StoreError::invalid("quantity must be greater than 0"));
        }
        if self.line_price().is_none() {
            return Err(StoreError::invalid("total overflow"));
        }
        Ok(())
    }
}

/// Sums the line prices of validated order lines.
pub(crate) fn order_total(items: &[NewOrderItem]) -> Result<Money> {
    items.iter().try_fold(Money::zero(), |total, item| {
        item.line_price()
            .and_then(|price| total.checked_add(price))
            .ok_or_else(|| StoreError::invalid("total overflow"))
    })
}
