//! Catalog facade: coordinates the book store with display decoration.
//!
//! Every response path builds the decoration chain exactly once per record
//! and surfaces both the stored price and the decorated display price.

use serde_json::json;
use uuid::Uuid;

use folio_http::error::AppError;

use super::decorator::{BookComponent, DecoratedBook};
use super::models::{Book, BookResponse, CreateBookRequest};
use super::repository::{BookStore, StoreError};
use super::seed;

pub struct Catalog {
    store: BookStore,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            store: BookStore::new(),
        }
    }

    /// Validate and add a new book to the catalog.
    pub fn add_book(&self, request: CreateBookRequest) -> Result<BookResponse, AppError> {
        tracing::info!(title = %request.title, "adding new book");

        if let Err(details) = request.validate() {
            return Err(AppError::validation(details, "Invalid book payload"));
        }

        let book = self.store.insert(request.into_book()).map_err(|err| {
            let StoreError::DuplicateIsbn(isbn) = err;
            AppError::conflict(
                vec![json!({"field": "isbn", "error": "already exists"})],
                format!("A book with ISBN {isbn} already exists"),
            )
        })?;

        Ok(to_response(&book))
    }

    /// All books in the catalog.
    pub fn all_books(&self) -> Vec<BookResponse> {
        tracing::info!("retrieving all books");
        self.store.all().iter().map(to_response).collect()
    }

    /// Search by author or category. Author wins when both are given;
    /// with neither, the whole catalog is returned.
    pub fn search_books(&self, author: Option<&str>, category: Option<&str>) -> Vec<BookResponse> {
        tracing::info!(?author, ?category, "searching books");

        let books = match (author, category) {
            (Some(author), _) if !author.is_empty() => self.store.by_author(author),
            (_, Some(category)) if !category.is_empty() => self.store.by_category(category),
            _ => self.store.all(),
        };

        books.iter().map(to_response).collect()
    }

    /// A single book by id.
    pub fn book(&self, id: Uuid) -> Result<BookResponse, AppError> {
        tracing::info!(%id, "retrieving book");
        self.store
            .get(id)
            .map(|book| to_response(&book))
            .ok_or_else(|| AppError::not_found(format!("Book not found with id: {id}")))
    }

    /// Books in the given category.
    pub fn books_by_category(&self, category: &str) -> Vec<BookResponse> {
        tracing::info!(category, "finding books by category");
        self.store.by_category(category).iter().map(to_response).collect()
    }

    /// All featured books.
    pub fn featured_books(&self) -> Vec<BookResponse> {
        tracing::info!("finding featured books");
        self.store.featured().iter().map(to_response).collect()
    }

    /// All bestseller books.
    pub fn bestsellers(&self) -> Vec<BookResponse> {
        tracing::info!("finding bestseller books");
        self.store.bestsellers().iter().map(to_response).collect()
    }

    /// Delete a book by id.
    pub fn delete_book(&self, id: Uuid) -> Result<(), AppError> {
        tracing::info!(%id, "deleting book");
        self.store
            .delete(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Book not found with id: {id}")))
    }

    /// Load the sample catalog. Records whose ISBN is already present are
    /// skipped, so seeding is safe to repeat.
    pub fn seed_sample_data(&self) -> usize {
        let mut loaded = 0;
        for book in seed::sample_books() {
            match self.store.insert(book) {
                Ok(_) => loaded += 1,
                Err(StoreError::DuplicateIsbn(isbn)) => {
                    tracing::debug!(isbn, "sample book already present, skipping");
                }
            }
        }
        loaded
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the decoration chain for a stored book and assemble the response.
fn to_response(book: &Book) -> BookResponse {
    let unit = DecoratedBook::for_book(book);

    BookResponse {
        id: book.id,
        title: book.title.clone(),
        author: book.author.clone(),
        category: book.category.clone(),
        isbn: book.isbn.clone(),
        original_price: book.price,
        display_price: unit.price(),
        description: unit.description(),
        featured: book.featured,
        bestseller: book.bestseller,
    }
}
