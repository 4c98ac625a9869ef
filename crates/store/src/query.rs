use std::cmp::Ordering;

use crate::{Book, Money};

/// Field a catalog listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Author,
    Genre,
    Price,
}

impl SortField {
    /// Parses a lowercase sort key. Unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "id" => Some(SortField::Id),
            "title" => Some(SortField::Title),
            "author" => Some(SortField::Author),
            "genre" => Some(SortField::Genre),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
            SortField::Genre => a.genre.to_lowercase().cmp(&b.genre.to_lowercase()),
            SortField::Price => a.price.cmp(&b.price),
        }
    }
}

/// Sort direction for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Builder for catalog queries.
///
/// Raw caller input is accepted as-is; [`BookQuery::normalize`] cleans it up
/// before the query is applied, so callers never get a validation error for
/// an inverted price range or an unknown sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive substring over title, author and description.
    pub search: Option<String>,

    /// Case-insensitive exact genre match.
    pub genre: Option<String>,

    /// Minimum price (inclusive).
    pub min_price: Option<Money>,

    /// Maximum price (inclusive).
    pub max_price: Option<Money>,

    /// Sort key; unknown keys keep insertion order.
    pub sort_by: Option<String>,

    /// `"desc"` for descending, anything else ascending.
    pub order: Option<String>,
}

impl BookQuery {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filters by genre.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Filters by minimum price.
    pub fn min_price(mut self, price: Money) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Filters by maximum price.
    pub fn max_price(mut self, price: Money) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Sorts by the given key.
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    /// Sets the sort direction (`"asc"` or `"desc"`).
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Trims and lowercases text input, clamps negative bounds to zero and
    /// swaps an inverted price range.
    pub fn normalize(self) -> Self {
        let clean = |s: Option<String>| {
            s.map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let clamp = |m: Option<Money>| m.map(|v| if v.is_negative() { Money::zero() } else { v });
        let mut min_price = clamp(self.min_price);
        let mut max_price = clamp(self.max_price);
        if let (Some(min), Some(max)) = (min_price, max_price)
            && min > max
        {
            std::mem::swap(&mut min_price, &mut max_price);
        }

        Self {
            search: clean(self.search),
            genre: clean(self.genre),
            min_price,
            max_price,
            sort_by: clean(self.sort_by).map(|v| v.to_lowercase()),
            order: clean(self.order).map(|v| v.to_lowercase()),
        }
    }

    /// Returns the recognized sort field, if any.
    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_by.as_deref().and_then(SortField::parse)
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> SortDirection {
        match self.order.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// Returns true if the book passes every filter.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref genre) = self.genre
            && !book.genre.eq_ignore_ascii_case(genre)
        {
            return false;
        }
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let hit = [&book.title, &book.author, &book.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(min) = self.min_price
            && book.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && book.price > max
        {
            return false;
        }
        true
    }

    /// Sorts books in place. Expects the input in insertion order; the sort
    /// is stable so ties keep that order.
    pub fn sort(&self, books: &mut [Book]) {
        let Some(field) = self.sort_field() else {
            return;
        };
        match self.direction() {
            SortDirection::Asc => books.sort_by(|a, b| field.compare(a, b)),
            SortDirection::Desc => books.sort_by(|a, b| field.compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BookId, NewBook};

    fn book(id: u64, title: &str, genre: &str, cents: i64) -> Book {
        NewBook::new(title, "Author", Money::from_cents(cents))
            .genre(genre)
            .with_id(BookId::new(id))
    }

    #[test]
    fn normalize_swaps_inverted_range() {
        let q = BookQuery::new()
            .min_price(Money::from_cents(5000))
            .max_price(Money::from_cents(1000))
            .normalize();
        assert_eq!(q.min_price, Some(Money::from_cents(1000)));
        assert_eq!(q.max_price, Some(Money::from_cents(5000)));
    }

    #[test]
    fn normalize_clamps_negative_bounds() {
        let q = BookQuery::new()
            .min_price(Money::from_cents(-300))
            .normalize();
        assert_eq!(q.min_price, Some(Money::zero()));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        let q = BookQuery::new()
            .search("  dune ")
            .genre("   ")
            .sort_by(" Price ")
            .order("DESC")
            .normalize();
        assert_eq!(q.search.as_deref(), Some("dune"));
        assert_eq!(q.genre, None);
        assert_eq!(q.sort_field(), Some(SortField::Price));
        assert_eq!(q.direction(), SortDirection::Desc);
    }

    #[test]
    fn unknown_direction_is_ascending() {
        let q = BookQuery::new().order("sideways").normalize();
        assert_eq!(q.direction(), SortDirection::Asc);
    }

    #[test]
    fn matches_genre_case_insensitively() {
        let q = BookQuery::new().genre("fantasy").normalize();
        assert!(q.matches(&book(1, "The Hobbit", "Fantasy", 1000)));
        assert!(!q.matches(&book(2, "Dune", "Science Fiction", 1000)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let q = BookQuery::new()
            .min_price(Money::from_cents(1000))
            .max_price(Money::from_cents(2000))
            .normalize();
        assert!(q.matches(&book(1, "A", "", 1000)));
        assert!(q.matches(&book(2, "B", "", 2000)));
        assert!(!q.matches(&book(3, "C", "", 2001)));
    }

    #[test]
    fn unknown_sort_key_keeps_insertion_order() {
        let mut books = vec![book(1, "Zeta", "", 300), book(2, "Alpha", "", 100)];
        BookQuery::new().sort_by("rating").normalize().sort(&mut books);
        assert_eq!(books[0].id, BookId::new(1));
        assert_eq!(books[1].id, BookId::new(2));
    }

    #[test]
    fn sort_by_title_descending() {
        let mut books = vec![
            book(1, "alpha", "", 300),
            book(2, "Charlie", "", 100),
            book(3, "Bravo", "", 200),
        ];
        BookQuery::new()
            .sort_by("title")
            .order("desc")
            .normalize()
            .sort(&mut books);
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Charlie", "Bravo", "alpha"]);
    }
}
