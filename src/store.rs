//! The in-memory book store.

use crate::{
    book::{Book, catalogue},
    errors::StoreError,
};
use std::{collections::HashSet, slice::Iter, sync::Arc};

/// An ordered, read-only collection of books.
///
/// The books are created once and shared by reference counting, so clones are cheap and every
/// clone sees the same contents. Nothing can modify a store after it has been built, which is
/// what makes concurrent lookups safe without locking.
#[derive(Clone, Debug)]
pub struct BookStore {
    /// The books, in the order they were given.
    books: Arc<[Book]>,
}

impl BookStore {
    /// Build a store from a list of books.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two books share an identifier.
    #[inline]
    pub fn new(books: Vec<Book>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(books.len());
        if let Some(book) = books.iter().find(|book| !seen.insert(book.id)) {
            return Err(StoreError::DuplicateId { id: book.id });
        }

        Ok(Self {
            books: books.into(),
        })
    }

    /// Build a store holding the default [`catalogue`].
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    #[inline]
    pub fn catalogue() -> Result<Self, StoreError> {
        Self::new(catalogue())
    }

    /// Returns a copy of the book with a matching id, if there is one.
    ///
    /// The store is small and never changes, so this is a plain scan; since ids are unique there
    /// is at most one match.
    #[inline]
    #[must_use]
    pub fn lookup(&self, id: i32) -> Option<Book> {
        self.books.iter().find(|book| book.id == id).cloned()
    }

    /// The number of books in the store.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the store holds no books.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over the books in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Book> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a BookStore {
    type Item = &'a Book;
    type IntoIter = Iter<'a, Book>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::BookStore;
    use crate::{
        book::{Book, catalogue},
        errors::StoreError,
    };

    /// Every book in the catalogue is found by its own id, unchanged.
    #[test]
    fn lookup_finds_every_book() {
        let store = BookStore::catalogue().expect("catalogue has unique ids");
        for book in &store {
            assert_eq!(store.lookup(book.id).as_ref(), Some(book));
        }
        assert_eq!(store.len(), catalogue().len());
    }

    /// The seeded books carry exactly the catalogue fields.
    #[test]
    fn lookup_known_ids() {
        let store = BookStore::catalogue().expect("catalogue has unique ids");
        assert_eq!(
            store.lookup(1),
            Some(Book::new(1, "Book 1", "Author 1", "1234567890", 5))
        );
        assert_eq!(
            store.lookup(2),
            Some(Book::new(2, "Book 2", "Author 2", "0987654321", 3))
        );
    }

    /// Ids with no matching book are absent rather than an error.
    #[test]
    fn lookup_unknown_ids() {
        let store = BookStore::catalogue().expect("catalogue has unique ids");
        for id in [999, 0, -1, i32::MIN, i32::MAX] {
            assert_eq!(store.lookup(id), None);
        }
    }

    /// Repeated lookups, also through clones, see the same contents.
    #[test]
    fn lookups_do_not_mutate() {
        let store = BookStore::catalogue().expect("catalogue has unique ids");
        let before = store.iter().cloned().collect::<Vec<_>>();
        let other = store.clone();

        for _ in 0..3 {
            let mut found = other.lookup(1).expect("book 1 exists");
            found.quantity = 0;
            assert_ne!(store.lookup(1), Some(found));
        }

        assert_eq!(store.iter().cloned().collect::<Vec<_>>(), before);
    }

    /// Duplicate ids are rejected when the store is built.
    #[test]
    fn duplicate_ids_are_rejected() {
        let mut books = catalogue();
        books.push(Book::new(2, "Another", "Someone", "1111111111", 1));

        let err = BookStore::new(books).expect_err("id 2 occurs twice");
        assert_eq!(err, StoreError::DuplicateId { id: 2 });
    }

    /// An empty store is valid and finds nothing.
    #[test]
    fn empty_store() {
        let store = BookStore::new(Vec::new()).expect("no ids to collide");
        assert!(store.is_empty());
        assert_eq!(store.lookup(1), None);
    }
}
