use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Stored book record for the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: Uuid,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Category the book is shelved under
    pub category: String,
    /// ISBN, unique across the store
    pub isbn: String,
    /// Stored price, strictly positive
    pub price: Decimal,
    /// Whether the book is featured
    pub featured: bool,
    /// Whether the book is a bestseller
    pub bestseller: bool,
}

/// Request model for creating a new book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    pub price: Decimal,
    pub featured: bool,
    pub bestseller: bool,
}

impl CreateBookRequest {
    /// Validate the request, returning per-field error details on failure.
    pub fn validate(&self) -> Result<(), Vec<serde_json::Value>> {
        let mut details = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("category", &self.category),
            ("isbn", &self.isbn),
        ] {
            if value.trim().is_empty() {
                details.push(json!({"field": field, "error": "must not be blank"}));
            }
        }

        if self.price <= Decimal::ZERO {
            details.push(json!({"field": "price", "error": "must be greater than 0"}));
        }

        if details.is_empty() {
            Ok(())
        } else {
            Err(details)
        }
    }

    /// Build a stored record from the request, assigning a fresh id.
    pub fn into_book(self) -> Book {
        Book {
            id: Uuid::now_v7(),
            title: self.title,
            author: self.author,
            category: self.category,
            isbn: self.isbn,
            price: self.price,
            featured: self.featured,
            bestseller: self.bestseller,
        }
    }
}

/// Response model carrying the decorated presentation of a book.
///
/// `display_price` and `description` come from the decoration chain;
/// `original_price` is the stored value untouched.
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    pub original_price: Decimal,
    pub display_price: Decimal,
    pub description: String,
    pub featured: bool,
    pub bestseller: bool,
}
