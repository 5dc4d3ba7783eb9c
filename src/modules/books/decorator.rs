//! Display decoration for book records.
//!
//! A stored book is wrapped in a chain of decorators derived from its
//! `featured`/`bestseller` flags. The chain is built per response, read
//! once for its description and display price, and discarded. Stored data
//! is never mutated.

use rust_decimal::{Decimal, RoundingStrategy};

use super::models::Book;

/// Capability contract for anything presentable as a book.
pub trait BookComponent {
    /// Human-readable label. Never fails, no side effects.
    fn description(&self) -> String;

    /// Monetary amount. The outermost chain result carries exactly two
    /// fractional digits.
    fn price(&self) -> Decimal;
}

/// Closed set of decoration layers over a stored book.
///
/// `Simple` is the undecorated base; the other variants wrap an inner
/// chain and override description and price. Decorators see only the
/// capability contract of their inner value, so any variant can wrap any
/// other.
#[derive(Debug)]
pub enum DecoratedBook {
    Simple(Book),
    Featured(Box<DecoratedBook>),
    Bestseller(Box<DecoratedBook>),
}

impl DecoratedBook {
    /// Build the decoration chain for a stored book.
    ///
    /// Wrap order is fixed: Featured first, then Bestseller, so
    /// Bestseller is outermost when both flags are set. Rounding happens
    /// after each decorator's multiplication, in this order.
    pub fn for_book(book: &Book) -> Self {
        let mut unit = Self::Simple(book.clone());
        if book.featured {
            tracing::debug!(title = %book.title, "decorating book with Featured badge");
            unit = Self::Featured(Box::new(unit));
        }
        if book.bestseller {
            tracing::debug!(title = %book.title, "decorating book with Bestseller badge");
            unit = Self::Bestseller(Box::new(unit));
        }
        unit
    }
}

impl BookComponent for DecoratedBook {
    fn description(&self) -> String {
        match self {
            Self::Simple(book) => format!("{} by {}", book.title, book.author),
            Self::Featured(inner) => format!("[FEATURED] {}", inner.description()),
            Self::Bestseller(inner) => format!("[BESTSELLER] {}", inner.description()),
        }
    }

    fn price(&self) -> Decimal {
        match self {
            Self::Simple(book) => book.price,
            Self::Featured(inner) => apply_markup(inner.price(), featured_multiplier()),
            Self::Bestseller(inner) => apply_markup(inner.price(), bestseller_multiplier()),
        }
    }
}

/// Featured markup: +10%.
fn featured_multiplier() -> Decimal {
    Decimal::new(110, 2)
}

/// Bestseller markup: +5%.
fn bestseller_multiplier() -> Decimal {
    Decimal::new(105, 2)
}

/// Multiply and round half-up to two decimal places.
///
/// Each decorator rounds its own output, so chained prices stay on
/// two-decimal boundaries at every step.
fn apply_markup(price: Decimal, multiplier: Decimal) -> Decimal {
    (price * multiplier).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_book(price: Decimal) -> Book {
        Book {
            id: Uuid::now_v7(),
            title: "Test Book".to_string(),
            author: "Test Author".to_string(),
            category: "Programming".to_string(),
            isbn: "978-0000000000".to_string(),
            price,
            featured: false,
            bestseller: false,
        }
    }

    #[test]
    fn simple_book_has_no_badge() {
        let book = test_book(Decimal::new(10000, 2));
        let unit = DecoratedBook::Simple(book);

        assert_eq!(unit.description(), "Test Book by Test Author");
        assert_eq!(unit.price().to_string(), "100.00");
    }

    #[test]
    fn featured_adds_badge_and_ten_percent() {
        let book = test_book(Decimal::new(10000, 2));
        let unit = DecoratedBook::Featured(Box::new(DecoratedBook::Simple(book)));

        assert_eq!(unit.description(), "[FEATURED] Test Book by Test Author");
        assert_eq!(unit.price().to_string(), "110.00");
    }

    #[test]
    fn bestseller_adds_badge_and_five_percent() {
        let book = test_book(Decimal::new(10000, 2));
        let unit = DecoratedBook::Bestseller(Box::new(DecoratedBook::Simple(book)));

        assert_eq!(unit.description(), "[BESTSELLER] Test Book by Test Author");
        assert_eq!(unit.price().to_string(), "105.00");
    }

    #[test]
    fn combined_chain_stacks_badges_outer_to_inner() {
        let mut book = test_book(Decimal::new(10000, 2));
        book.featured = true;
        book.bestseller = true;

        let unit = DecoratedBook::for_book(&book);

        assert_eq!(
            unit.description(),
            "[BESTSELLER] [FEATURED] Test Book by Test Author"
        );
        // 100.00 * 1.10 = 110.00, rounded; * 1.05 = 115.50, rounded
        assert_eq!(unit.price().to_string(), "115.50");
    }

    #[test]
    fn for_book_without_flags_stays_simple() {
        let book = test_book(Decimal::new(10000, 2));
        let unit = DecoratedBook::for_book(&book);

        assert_eq!(unit.description(), "Test Book by Test Author");
        assert_eq!(unit.price().to_string(), "100.00");
    }

    #[test]
    fn wrap_order_at_fifty() {
        let book = test_book(Decimal::new(5000, 2));

        // Featured inner, Bestseller outer (the fixed build order)
        let fixed = DecoratedBook::Bestseller(Box::new(DecoratedBook::Featured(Box::new(
            DecoratedBook::Simple(book.clone()),
        ))));

        // Reversed manual wrap
        let reversed = DecoratedBook::Featured(Box::new(DecoratedBook::Bestseller(Box::new(
            DecoratedBook::Simple(book),
        ))));

        // At 50.00 both intermediate products are exact, so per-step
        // rounding loses nothing and the two orders agree: 57.75.
        // This is an observed property of the value, not a guarantee of
        // per-step rounding in general.
        assert_eq!(fixed.price().to_string(), "57.75");
        assert_eq!(reversed.price().to_string(), "57.75");
    }

    #[test]
    fn rounding_is_half_up_per_step() {
        // 10.05 * 1.05 = 10.5525 -> 10.55; then * 1.10 = 11.605 -> 11.61
        let book = test_book(Decimal::new(1005, 2));
        let unit = DecoratedBook::Featured(Box::new(DecoratedBook::Bestseller(Box::new(
            DecoratedBook::Simple(book),
        ))));

        assert_eq!(unit.price().to_string(), "11.61");
    }
}
