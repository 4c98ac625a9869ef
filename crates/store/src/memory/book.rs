use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::BookStore;
use crate::{Book, BookId, BookQuery, NewBook, Result, StoreError};

const ENTITY: &str = "book";

struct Catalog {
    next_id: u64,
    books: BTreeMap<BookId, Book>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            next_id: 1,
            books: BTreeMap::new(),
        }
    }
}

/// In-memory book catalog.
///
/// Ids are assigned in increasing order, so iterating the map yields books in
/// insertion order.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryBookStore {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn create(&self, book: NewBook) -> Result<Book> {
        book.validate()?;

        let mut catalog = self.catalog.write().await;
        let id = BookId::new(catalog.next_id);
        catalog.next_id += 1;
        let book = book.with_id(id);
        catalog.books.insert(id, book.clone());
        Ok(book)
    }

    async fn get(&self, id: BookId) -> Result<Book> {
        let catalog = self.catalog.read().await;
        catalog
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    async fn list(&self, query: BookQuery) -> Result<Vec<Book>> {
        let query = query.normalize();
        let mut books: Vec<_> = {
            let catalog = self.catalog.read().await;
            catalog
                .books
                .values()
                .filter(|b| query.matches(b))
                .cloned()
                .collect()
        };
        query.sort(&mut books);
        Ok(books)
    }

    async fn update(&self, book: Book) -> Result<()> {
        book.validate()?;

        let mut catalog = self.catalog.write().await;
        let slot = catalog
            .books
            .get_mut(&book.id)
            .ok_or_else(|| StoreError::not_found(ENTITY, book.id))?;
        *slot = book;
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    async fn seeded() -> InMemoryBookStore {
        let store = InMemoryBookStore::new();
        for (title, author, genre, cents) in [
            ("Dune", "Frank Herbert", "Science Fiction", 1999),
            ("The Hobbit", "J. R. R. Tolkien", "Fantasy", 1250),
            ("Gone Girl", "Gillian Flynn", "Thriller", 900),
            ("Neuromancer", "William Gibson", "Science Fiction", 1500),
        ] {
            store
                .create(NewBook::new(title, author, Money::from_cents(cents)).genre(genre))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn create_then_get() {
        let store = InMemoryBookStore::new();
        let created = store
            .create(NewBook::new("Dune", "Frank Herbert", Money::from_cents(1999)))
            .await
            .unwrap();
        assert_eq!(created.id, BookId::new(1));

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_books() {
        let store = InMemoryBookStore::new();
        let result = store
            .create(NewBook::new("", "Nobody", Money::from_cents(100)))
            .await;
        assert!(matches!(result, Err(StoreError::InvalidArgument(_))));
        assert!(store.list(BookQuery::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = InMemoryBookStore::new();
        let first = store
            .create(NewBook::new("A", "B", Money::zero()))
            .await
            .unwrap();
        store.delete(first.id).await.unwrap();
        let second = store
            .create(NewBook::new("C", "D", Money::zero()))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn get_update_delete_missing_is_not_found() {
        let store = InMemoryBookStore::new();
        let missing = BookId::new(5);
        assert!(store.get(missing).await.unwrap_err().is_not_found());
        assert!(store.delete(missing).await.unwrap_err().is_not_found());

        let ghost = NewBook::new("Ghost", "Writer", Money::zero()).with_id(missing);
        assert!(store.update(ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_validates_and_replaces() {
        let store = seeded().await;
        let mut book = store.get(BookId::new(1)).await.unwrap();

        book.price = Money::from_cents(-5);
        assert!(matches!(
            store.update(book.clone()).await,
            Err(StoreError::InvalidArgument(_))
        ));

        book.price = Money::from_cents(2500);
        store.update(book).await.unwrap();
        assert_eq!(
            store.get(BookId::new(1)).await.unwrap().price,
            Money::from_cents(2500)
        );
    }

    #[tokio::test]
    async fn list_defaults_to_insertion_order() {
        let store = seeded().await;
        let books = store.list(BookQuery::new()).await.unwrap();
        let ids: Vec<_> = books.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn list_filters_by_genre_and_sorts_by_price() {
        let store = seeded().await;
        let books = store
            .list(
                BookQuery::new()
                    .genre("science fiction")
                    .sort_by("price")
                    .order("desc"),
            )
            .await
            .unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Neuromancer"]);
    }

    #[tokio::test]
    async fn list_swaps_inverted_price_range() {
        let store = seeded().await;
        let books = store
            .list(
                BookQuery::new()
                    .min_price(Money::from_cents(1600))
                    .max_price(Money::from_cents(1000)),
            )
            .await
            .unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "Neuromancer"]);
    }

    #[tokio::test]
    async fn list_searches_title_and_author() {
        let store = seeded().await;
        let by_author = store.list(BookQuery::new().search("gibson")).await.unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "Neuromancer");

        let by_title = store.list(BookQuery::new().search("HOBBIT")).await.unwrap();
        assert_eq!(by_title.len(), 1);
    }
}
