//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use store::{
    BookId, CustomerId, Money, NewOrderItem, Order, OrderId, OrderItem, OrderItemId, OrderStatus,
};

use super::{FromRawId, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Deserialize)]
pub struct OrderLineRequest {
    pub book_id: i64,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

/// Body of `PUT /orders/:id`. Items cannot be edited.
#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub customer_id: i64,
    pub total_cents: i64,
    #[serde(default)]
    pub status: OrderStatus,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub total: String,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn new(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_cents: order.total.cents(),
            total: order.total.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub id: OrderItemId,
    pub book_id: BookId,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_price_cents: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            book_id: item.book_id,
            quantity: item.quantity,
            unit_price_cents: item.unit_price.cents(),
            line_price_cents: item.line_price().cents(),
        }
    }
}

#[derive(Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub total_cents: i64,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_cents: order.total.cents(),
        }
    }
}

fn summaries(orders: Vec<Order>) -> ListResponse<OrderSummary> {
    orders
        .into_iter()
        .map(OrderSummary::from)
        .collect::<Vec<_>>()
        .into()
}

// -- Handlers --

/// GET /orders: list all orders.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<OrderSummary>>, ApiError> {
    Ok(Json(summaries(state.orders.list_orders().await?)))
}

/// GET /customers/:id/orders: orders placed by a customer.
#[tracing::instrument(skip(state))]
pub async fn for_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ListResponse<OrderSummary>>, ApiError> {
    let orders = state
        .orders
        .orders_for_customer(CustomerId::parse(id)?)
        .await?;
    Ok(Json(summaries(orders)))
}

/// POST /orders: place an order with explicit prices.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let customer_id = CustomerId::parse(req.customer_id)?;
    let items = req
        .items
        .into_iter()
        .map(|line| {
            Ok(NewOrderItem::new(
                BookId::parse(line.book_id)?,
                Money::from_cents(line.unit_price_cents),
                line.quantity,
            ))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let (order, items) = state.orders.create_order(customer_id, items).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::new(order, items))))
}

/// GET /orders/:id: load an order with its items.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, ApiError> {
    let (order, items) = state.orders.get_order(OrderId::parse(id)?).await?;
    Ok(Json(OrderResponse::new(order, items)))
}

/// PUT /orders/:id: administrative edit of owner, total and status.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<StatusCode, ApiError> {
    let order = Order {
        id: OrderId::parse(id)?,
        customer_id: CustomerId::parse(req.customer_id)?,
        total: Money::from_cents(req.total_cents),
        status: req.status,
    };
    state.orders.update_order(order).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /orders/:id: remove an order and its items.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete_order(OrderId::parse(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
