use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};

use crate::basket::{Basket, BasketLine};
use crate::{BookId, CustomerId, Result, StoreError};

type LineId<B> = <<B as Basket>::Line as BasketLine>::Id;
type Lines<B> = Arc<Mutex<Vec<<B as Basket>::Line>>>;

struct Slot<B: Basket> {
    header: B,
    lines: Lines<B>,
}

struct Headers<B: Basket> {
    next_id: u64,
    slots: BTreeMap<B::Id, Slot<B>>,
}

/// Shared storage behind the cart and wishlist stores.
///
/// Headers and id counters sit behind one `RwLock`; each aggregate's lines
/// sit behind their own `Mutex`. Locks are always taken headers first, and
/// the headers lock is released before a lines lock is awaited by item
/// operations, so item traffic on different aggregates never contends.
pub(crate) struct BasketTable<B: Basket> {
    headers: RwLock<Headers<B>>,
    next_line_id: AtomicU64,
}

impl<B: Basket> Default for BasketTable<B> {
    fn default() -> Self {
        Self {
            headers: RwLock::new(Headers {
                next_id: 1,
                slots: BTreeMap::new(),
            }),
            next_line_id: AtomicU64::new(1),
        }
    }
}

impl<B: Basket> BasketTable<B> {
    fn open(headers: &mut Headers<B>, customer_id: CustomerId) -> B {
        let id = <B::Id as From<u64>>::from(headers.next_id);
        headers.next_id += 1;
        let header = B::open(id, customer_id, Utc::now());
        headers.slots.insert(
            id,
            Slot {
                header: header.clone(),
                lines: Arc::default(),
            },
        );
        header
    }

    pub(crate) async fn create(&self, customer_id: CustomerId) -> B {
        let mut headers = self.headers.write().await;
        Self::open(&mut headers, customer_id)
    }

    pub(crate) async fn for_customer(&self, customer_id: CustomerId) -> B {
        let mut headers = self.headers.write().await;
        if let Some(slot) = headers
            .slots
            .values()
            .find(|s| s.header.customer_id() == customer_id)
        {
            return slot.header.clone();
        }
        Self::open(&mut headers, customer_id)
    }

    pub(crate) async fn get(&self, id: B::Id) -> Result<(B, Vec<B::Line>)> {
        let (header, lines) = {
            let headers = self.headers.read().await;
            let slot = headers
                .slots
                .get(&id)
                .ok_or_else(|| StoreError::not_found(B::ENTITY, id))?;
            (slot.header.clone(), slot.lines.clone())
        };
        let lines = lines.lock().await.clone();
        Ok((header, lines))
    }

    pub(crate) async fn list(&self) -> Vec<B> {
        let headers = self.headers.read().await;
        headers.slots.values().map(|s| s.header.clone()).collect()
    }

    pub(crate) async fn update(&self, header: B) -> Result<()> {
        let mut headers = self.headers.write().await;
        let slot = headers
            .slots
            .get_mut(&header.id())
            .ok_or_else(|| StoreError::not_found(B::ENTITY, header.id()))?;
        slot.header = header;
        Ok(())
    }

    pub(crate) async fn delete(&self, id: B::Id) -> Result<()> {
        let mut headers = self.headers.write().await;
        headers
            .slots
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(B::ENTITY, id))
    }

    async fn lines(&self, id: B::Id) -> Result<Lines<B>> {
        let headers = self.headers.read().await;
        headers
            .slots
            .get(&id)
            .map(|s| s.lines.clone())
            .ok_or_else(|| StoreError::not_found(B::ENTITY, id))
    }

    pub(crate) async fn add_line(
        &self,
        id: B::Id,
        book_id: BookId,
        quantity: i64,
    ) -> Result<B::Line> {
        if quantity <= 0 {
            return Err(StoreError::invalid("quantity must be greater than 0"));
        }
        let lines = self.lines(id).await?;

        let mut lines = lines.lock().await;
        if let Some(line) = lines.iter_mut().find(|l| l.book_id() == book_id) {
            let merged = line
                .quantity_mut()
                .checked_add(quantity)
                .ok_or_else(|| StoreError::invalid("quantity overflow"))?;
            *line.quantity_mut() = merged;
            return Ok(line.clone());
        }

        let line_id = <LineId<B>>::from(self.next_line_id.fetch_add(1, Ordering::Relaxed));
        let line = <B::Line as BasketLine>::create(line_id, id, book_id, quantity);
        lines.push(line.clone());
        metrics::counter!("basket_lines_opened_total", "basket" => B::ENTITY).increment(1);
        Ok(line)
    }

    pub(crate) async fn update_line(
        &self,
        id: B::Id,
        line_id: LineId<B>,
        quantity: i64,
    ) -> Result<()> {
        if quantity <= 0 {
            return Err(StoreError::invalid("quantity must be greater than 0"));
        }
        let lines = self.lines(id).await?;

        let mut lines = lines.lock().await;
        let line = lines
            .iter_mut()
            .find(|l| l.id() == line_id)
            .ok_or_else(|| StoreError::not_found(<B::Line as BasketLine>::ENTITY, line_id))?;
        *line.quantity_mut() = quantity;
        Ok(())
    }

    pub(crate) async fn delete_line(&self, id: B::Id, line_id: LineId<B>) -> Result<()> {
        let lines = self.lines(id).await?;
        let mut lines = lines.lock().await;
        let position = lines
            .iter()
            .position(|l| l.id() == line_id)
            .ok_or_else(|| StoreError::not_found(<B::Line as BasketLine>::ENTITY, line_id))?;
        lines.remove(position);
        Ok(())
    }
}
