//! In-memory persistence for the book catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use super::models::Book;

/// Storage errors surfaced by the book store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a book with ISBN {0} already exists")]
    DuplicateIsbn(String),
}

/// In-memory book store.
///
/// Shared behind an `Arc` by the module's handlers; readers never block
/// each other. ISBN uniqueness is enforced at insert time.
#[derive(Default)]
pub struct BookStore {
    books: RwLock<HashMap<Uuid, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new book. Fails if the ISBN is already taken.
    pub fn insert(&self, book: Book) -> Result<Book, StoreError> {
        let mut books = self.books.write().expect("book store lock poisoned");

        if books.values().any(|existing| existing.isbn == book.isbn) {
            return Err(StoreError::DuplicateIsbn(book.isbn));
        }

        books.insert(book.id, book.clone());
        Ok(book)
    }

    /// Fetch a single book by id.
    pub fn get(&self, id: Uuid) -> Option<Book> {
        self.books
            .read()
            .expect("book store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// All books, sorted by title for deterministic listings.
    pub fn all(&self) -> Vec<Book> {
        self.collect(|_| true)
    }

    /// Remove a book by id. Returns the removed record if it existed.
    pub fn delete(&self, id: Uuid) -> Option<Book> {
        self.books
            .write()
            .expect("book store lock poisoned")
            .remove(&id)
    }

    /// Books in the given category.
    pub fn by_category(&self, category: &str) -> Vec<Book> {
        self.collect(|book| book.category == category)
    }

    /// Books by the given author.
    pub fn by_author(&self, author: &str) -> Vec<Book> {
        self.collect(|book| book.author == author)
    }

    /// Books flagged as featured.
    pub fn featured(&self) -> Vec<Book> {
        self.collect(|book| book.featured)
    }

    /// Books flagged as bestsellers.
    pub fn bestsellers(&self) -> Vec<Book> {
        self.collect(|book| book.bestseller)
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.books.read().expect("book store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collect(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        let books = self.books.read().expect("book store lock poisoned");
        let mut matched: Vec<Book> = books.values().filter(|b| predicate(b)).cloned().collect();
        matched.sort_by(|a, b| a.title.cmp(&b.title));
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample(title: &str, isbn: &str) -> Book {
        Book {
            id: Uuid::now_v7(),
            title: title.to_string(),
            author: "Test Author".to_string(),
            category: "Programming".to_string(),
            isbn: isbn.to_string(),
            price: Decimal::new(2500, 2),
            featured: false,
            bestseller: false,
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let store = BookStore::new();
        let book = sample("Clean Code", "978-0132350884");
        let id = book.id;

        store.insert(book).unwrap();

        let fetched = store.get(id).unwrap();
        assert_eq!(fetched.title, "Clean Code");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_isbn_is_rejected() {
        let store = BookStore::new();
        store.insert(sample("First", "978-0132350884")).unwrap();

        let result = store.insert(sample("Second", "978-0132350884"));
        assert_eq!(
            result.unwrap_err(),
            StoreError::DuplicateIsbn("978-0132350884".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_the_record() {
        let store = BookStore::new();
        let book = sample("Clean Code", "978-0132350884");
        let id = book.id;
        store.insert(book).unwrap();

        assert!(store.delete(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.delete(id).is_none());
    }

    #[test]
    fn listings_are_sorted_by_title() {
        let store = BookStore::new();
        store.insert(sample("Zebra", "isbn-1")).unwrap();
        store.insert(sample("Apple", "isbn-2")).unwrap();

        let titles: Vec<String> = store.all().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Apple", "Zebra"]);
    }

    #[test]
    fn flag_filters_match_only_flagged_books() {
        let store = BookStore::new();

        let mut featured = sample("Featured", "isbn-1");
        featured.featured = true;
        let mut bestseller = sample("Bestseller", "isbn-2");
        bestseller.bestseller = true;
        let plain = sample("Plain", "isbn-3");

        store.insert(featured).unwrap();
        store.insert(bestseller).unwrap();
        store.insert(plain).unwrap();

        assert_eq!(store.featured().len(), 1);
        assert_eq!(store.featured()[0].title, "Featured");
        assert_eq!(store.bestsellers().len(), 1);
        assert_eq!(store.bestsellers()[0].title, "Bestseller");
    }

    #[test]
    fn category_and_author_filters() {
        let store = BookStore::new();

        let mut fiction = sample("1984", "isbn-1");
        fiction.category = "Fiction".to_string();
        fiction.author = "George Orwell".to_string();
        store.insert(fiction).unwrap();
        store.insert(sample("Clean Code", "isbn-2")).unwrap();

        assert_eq!(store.by_category("Fiction").len(), 1);
        assert_eq!(store.by_author("George Orwell").len(), 1);
        assert!(store.by_category("History").is_empty());
    }
}
