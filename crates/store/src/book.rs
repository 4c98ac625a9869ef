use serde::{Deserialize, Serialize};

use crate::{BookId, Money, Result, StoreError};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: Money,
    pub description: String,
}

impl Book {
    /// Checks the fields every stored book must satisfy.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.author, self.price)
    }
}

/// A book that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    pub price: Money,
    #[serde(default)]
    pub description: String,
}

impl NewBook {
    /// Creates a new book with the required fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: Money) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            ..Default::default()
        }
    }

    /// Sets the genre.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the fields every stored book must satisfy.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.author, self.price)
    }

    /// Attaches an id, producing the stored form.
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            price: self.price,
            description: self.description,
        }
    }
}

fn validate_fields(title: &str, author: &str, price: Money) -> Result<()> {
    if title.trim().is_empty() || author.trim().is_empty() {
        return Err(StoreError::invalid("title and author are required"));
    }
    if price.is_negative() {
        return Err(StoreError::invalid("price cannot be negative"));
    }
    Ok(())
}
