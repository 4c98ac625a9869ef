//! Catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use store::{Book, BookId, BookQuery, Money, NewBook};

use super::{FromRawId, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

/// Query string for `GET /books`.
#[derive(Debug, Default, Deserialize)]
pub struct BookListParams {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl From<BookListParams> for BookQuery {
    fn from(params: BookListParams) -> Self {
        BookQuery {
            search: params.search,
            genre: params.genre,
            min_price: params.min_price_cents.map(Money::from_cents),
            max_price: params.max_price_cents.map(Money::from_cents),
            sort_by: params.sort,
            order: params.order,
        }
    }
}

// -- Response types --

#[derive(Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub price_cents: i64,
    pub price: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            description: book.description,
            price_cents: book.price.cents(),
            price: book.price.to_string(),
        }
    }
}

// -- Handlers --

/// GET /books: list the catalog with optional filters and sorting.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookListParams>,
) -> Result<Json<ListResponse<BookResponse>>, ApiError> {
    let books = state.catalog.list_books(params.into()).await?;
    let books: Vec<BookResponse> = books.into_iter().map(Into::into).collect();
    Ok(Json(books.into()))
}

/// POST /books: add a book to the catalog.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = NewBook::new(req.title, req.author, Money::from_cents(req.price_cents))
        .genre(req.genre)
        .description(req.description);
    let book = state.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /books/:id: load a book.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.catalog.get_book(BookId::parse(id)?).await?;
    Ok(Json(book.into()))
}

/// PUT /books/:id: replace a book's fields.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = NewBook::new(req.title, req.author, Money::from_cents(req.price_cents))
        .genre(req.genre)
        .description(req.description)
        .with_id(BookId::parse(id)?);
    state.catalog.update_book(book.clone()).await?;
    Ok(Json(book.into()))
}

/// DELETE /books/:id: remove a book from the catalog.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_book(BookId::parse(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
