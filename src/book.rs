//! The book record and the catalogue the server starts with.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// The representation of a book.
// The id is used as identifier and is unique within a store.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// The identifier of the book.
    pub id: i32,
    /// The title of the book.
    pub title: String,
    /// The person who authored the book.
    pub author: String,
    /// The isbn number of the book. Not validated.
    pub isbn: String,
    /// The number of copies in stock.
    pub quantity: u32,
}

impl Book {
    /// Create a book from its fields.
    #[inline]
    #[must_use]
    pub fn new(
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            quantity,
        }
    }
}

/// The books every server starts with, in order.
#[inline]
#[must_use]
pub fn catalogue() -> Vec<Book> {
    vec![
        Book::new(1, "Book 1", "Author 1", "1234567890", 5),
        Book::new(2, "Book 2", "Author 2", "0987654321", 3),
    ]
}
