//! Wishlist and gifting endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use checkout::GiftedOrder;
use serde::{Deserialize, Serialize};
use store::{BookId, CustomerId, Wishlist, WishlistId, WishlistItem, WishlistItemId};

use super::orders::OrderResponse;
use super::{AddItemRequest, FromRawId, ListResponse, OwnerRequest, UpdateItemRequest};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GiftRequest {
    pub buyer_id: i64,
}

#[derive(Serialize)]
pub struct WishlistResponse {
    #[serde(flatten)]
    pub wishlist: Wishlist,
    pub items: Vec<WishlistItem>,
}

#[derive(Serialize)]
pub struct GiftResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub recipient_id: CustomerId,
}

/// GET /wishlists: list wishlist headers.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<Wishlist>>, ApiError> {
    Ok(Json(state.wishlists.list_wishlists().await?.into()))
}

/// POST /wishlists: open a wishlist for a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OwnerRequest>,
) -> Result<(StatusCode, Json<WishlistResponse>), ApiError> {
    let wishlist = state
        .wishlists
        .create_wishlist(CustomerId::parse(req.customer_id)?)
        .await?;
    let response = WishlistResponse {
        wishlist,
        items: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /wishlists/:id: load a wishlist with its items.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<WishlistResponse>, ApiError> {
    let (wishlist, items) = state.wishlists.get_wishlist(WishlistId::parse(id)?).await?;
    Ok(Json(WishlistResponse { wishlist, items }))
}

/// GET /customers/:id/wishlist: the customer's wishlist, opened on first
/// access.
#[tracing::instrument(skip(state))]
pub async fn for_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<WishlistResponse>, ApiError> {
    let wishlist = state
        .wishlists
        .wishlist_for_customer(CustomerId::parse(id)?)
        .await?;
    let (wishlist, items) = state.wishlists.get_wishlist(wishlist.id).await?;
    Ok(Json(WishlistResponse { wishlist, items }))
}

/// PUT /wishlists/:id: move a wishlist to another customer.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<OwnerRequest>,
) -> Result<StatusCode, ApiError> {
    let customer_id = CustomerId::parse(req.customer_id)?;
    let (mut wishlist, _) = state.wishlists.get_wishlist(WishlistId::parse(id)?).await?;
    wishlist.customer_id = customer_id;
    state.wishlists.update_wishlist(wishlist).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /wishlists/:id: remove a wishlist and its items.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.wishlists.delete_wishlist(WishlistId::parse(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /wishlists/:id/items: add a book, merging with an existing line.
#[tracing::instrument(skip(state, req))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<WishlistItem>), ApiError> {
    let item = state
        .wishlists
        .add_item(
            WishlistId::parse(id)?,
            BookId::parse(req.book_id)?,
            req.quantity,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /wishlists/:id/items/:item_id: set a line's quantity.
#[tracing::instrument(skip(state, req))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .wishlists
        .update_item(
            WishlistId::parse(id)?,
            WishlistItemId::parse(item_id)?,
            req.quantity,
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /wishlists/:id/items/:item_id: remove a line.
#[tracing::instrument(skip(state))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    state
        .wishlists
        .delete_item(WishlistId::parse(id)?, WishlistItemId::parse(item_id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /wishlists/:id/gift: buy the wishlist's contents for its owner.
#[tracing::instrument(skip(state, req))]
pub async fn gift(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<GiftRequest>,
) -> Result<(StatusCode, Json<GiftResponse>), ApiError> {
    let GiftedOrder {
        order,
        items,
        recipient,
    } = state
        .checkout
        .gift_from_wishlist(WishlistId::parse(id)?, CustomerId::parse(req.buyer_id)?)
        .await?;

    let response = GiftResponse {
        order: OrderResponse::new(order, items),
        recipient_id: recipient,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
