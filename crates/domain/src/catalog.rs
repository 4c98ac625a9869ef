//! Catalog service.

use store::{Book, BookId, BookQuery, BookStore, NewBook, StoreError};

use crate::error::{DomainError, Result};

/// Service for browsing and maintaining the book catalog.
#[derive(Clone)]
pub struct CatalogService<B: BookStore> {
    books: B,
}

impl<B: BookStore> CatalogService<B> {
    /// Creates a new catalog service over the given book store.
    pub fn new(books: B) -> Self {
        Self { books }
    }

    /// Adds a book to the catalog.
    #[tracing::instrument(skip(self, book), fields(title = %book.title))]
    pub async fn create_book(&self, book: NewBook) -> Result<Book> {
        let book = self.books.create(book).await?;
        tracing::info!(book_id = %book.id, "book added to catalog");
        Ok(book)
    }

    /// Loads a book by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, id: BookId) -> Result<Book> {
        Ok(self.books.get(id).await?)
    }

    /// Loads a book that some other aggregate refers to.
    ///
    /// A missing book is reported as `BookNotFound` rather than a generic
    /// store error, so callers can tell a dangling reference apart from a
    /// missing cart or order.
    pub async fn require_book(&self, id: BookId) -> Result<Book> {
        match self.books.get(id).await {
            Ok(book) => Ok(book),
            Err(StoreError::NotFound { .. }) => Err(DomainError::BookNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists books matching the query.
    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self, query: BookQuery) -> Result<Vec<Book>> {
        Ok(self.books.list(query).await?)
    }

    /// Replaces a book's fields.
    #[tracing::instrument(skip(self, book), fields(book_id = %book.id))]
    pub async fn update_book(&self, book: Book) -> Result<()> {
        self.books.update(book).await?;
        Ok(())
    }

    /// Removes a book. Existing cart, wishlist and order lines keep their
    /// reference; checkout will reject them later.
    #[tracing::instrument(skip(self))]
    pub async fn delete_book(&self, id: BookId) -> Result<()> {
        self.books.delete(id).await?;
        tracing::info!(book_id = %id, "book removed from catalog");
        Ok(())
    }
}
