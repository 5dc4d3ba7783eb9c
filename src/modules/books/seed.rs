//! Sample catalog data loaded at startup when enabled in settings.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::Book;

fn book(
    title: &str,
    author: &str,
    category: &str,
    isbn: &str,
    price_cents: i64,
    featured: bool,
    bestseller: bool,
) -> Book {
    Book {
        id: Uuid::now_v7(),
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        isbn: isbn.to_string(),
        price: Decimal::new(price_cents, 2),
        featured,
        bestseller,
    }
}

/// The reference sample catalog.
pub fn sample_books() -> Vec<Book> {
    vec![
        book(
            "Clean Code",
            "Robert C. Martin",
            "Programming",
            "978-0132350884",
            4599,
            true,
            true,
        ),
        book(
            "Design Patterns",
            "Erich Gamma",
            "Programming",
            "978-0201633612",
            5499,
            true,
            false,
        ),
        book(
            "The Pragmatic Programmer",
            "Andrew Hunt",
            "Programming",
            "978-0135957059",
            4299,
            false,
            true,
        ),
        book(
            "Effective Java",
            "Joshua Bloch",
            "Programming",
            "978-0134685991",
            4899,
            true,
            true,
        ),
        book(
            "Head First Design Patterns",
            "Eric Freeman",
            "Programming",
            "978-0596007126",
            3999,
            false,
            false,
        ),
        book(
            "Spring Boot in Action",
            "Craig Walls",
            "Programming",
            "978-1617292545",
            4499,
            true,
            false,
        ),
        book(
            "1984",
            "George Orwell",
            "Fiction",
            "978-0451524935",
            1599,
            false,
            true,
        ),
        book(
            "To Kill a Mockingbird",
            "Harper Lee",
            "Fiction",
            "978-0061120084",
            1899,
            true,
            true,
        ),
        book(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            "978-0743273565",
            1499,
            false,
            false,
        ),
        book(
            "Sapiens",
            "Yuval Noah Harari",
            "History",
            "978-0062316097",
            2499,
            true,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_catalog_has_ten_unique_isbns() {
        let books = sample_books();
        let isbns: HashSet<String> = books.iter().map(|b| b.isbn.clone()).collect();

        assert_eq!(books.len(), 10);
        assert_eq!(isbns.len(), 10);
    }

    #[test]
    fn sample_prices_are_positive() {
        assert!(sample_books()
            .iter()
            .all(|b| b.price > rust_decimal::Decimal::ZERO));
    }
}
