//! Cart and checkout endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use checkout::PlacedOrder;
use serde::{Deserialize, Serialize};
use store::{BookId, Cart, CartId, CartItem, CartItemId, CustomerId};

use super::orders::OrderResponse;
use super::{AddItemRequest, FromRawId, ListResponse, OwnerRequest, UpdateItemRequest};
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

/// Body of `POST /carts/:id/checkout`. The order goes to the cart owner
/// unless another customer is named.
#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: Option<i64>,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartResponse {
    #[serde(flatten)]
    pub cart: Cart,
    pub items: Vec<CartItem>,
}

// -- Handlers --

/// GET /carts: list cart headers.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<Cart>>, ApiError> {
    Ok(Json(state.carts.list_carts().await?.into()))
}

/// POST /carts: open a cart for a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OwnerRequest>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    let cart = state
        .carts
        .create_cart(CustomerId::parse(req.customer_id)?)
        .await?;
    let response = CartResponse {
        cart,
        items: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /carts/:id: load a cart with its items.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CartResponse>, ApiError> {
    let (cart, items) = state.carts.get_cart(CartId::parse(id)?).await?;
    Ok(Json(CartResponse { cart, items }))
}

/// GET /customers/:id/cart: the customer's cart, opened on first access.
#[tracing::instrument(skip(state))]
pub async fn for_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart = state
        .carts
        .cart_for_customer(CustomerId::parse(id)?)
        .await?;
    let (cart, items) = state.carts.get_cart(cart.id).await?;
    Ok(Json(CartResponse { cart, items }))
}

/// PUT /carts/:id: move a cart to another customer.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<OwnerRequest>,
) -> Result<StatusCode, ApiError> {
    let customer_id = CustomerId::parse(req.customer_id)?;
    let (mut cart, _) = state.carts.get_cart(CartId::parse(id)?).await?;
    cart.customer_id = customer_id;
    state.carts.update_cart(cart).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /carts/:id: remove a cart and its items.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.carts.delete_cart(CartId::parse(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /carts/:id/items: add a book, merging with an existing line.
#[tracing::instrument(skip(state, req))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartItem>), ApiError> {
    let item = state
        .carts
        .add_item(CartId::parse(id)?, BookId::parse(req.book_id)?, req.quantity)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /carts/:id/items/:item_id: set a line's quantity.
#[tracing::instrument(skip(state, req))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .carts
        .update_item(CartId::parse(id)?, CartItemId::parse(item_id)?, req.quantity)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /carts/:id/items/:item_id: remove a line.
#[tracing::instrument(skip(state))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    state
        .carts
        .delete_item(CartId::parse(id)?, CartItemId::parse(item_id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /carts/:id/checkout: place an order from the cart.
#[tracing::instrument(skip(state, req))]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    req: Option<Json<CheckoutRequest>>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let cart_id = CartId::parse(id)?;
    let customer_id = match req.and_then(|Json(r)| r.customer_id) {
        Some(raw) => CustomerId::parse(raw)?,
        None => state.carts.get_cart(cart_id).await?.0.customer_id,
    };

    let PlacedOrder { order, items } = state
        .checkout
        .create_order_from_cart(customer_id, cart_id)
        .await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::new(order, items))))
}
