//! Axum handlers for the books module.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use folio_http::error::AppError;

use super::models::{BookResponse, CreateBookRequest};
use super::service::Catalog;

/// Query parameters for listing/searching books
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub author: Option<String>,
    pub category: Option<String>,
}

/// POST / - create a new book
pub async fn create_book(
    State(catalog): State<Arc<Catalog>>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let response = catalog.add_book(request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET / - list all books, optionally filtered by author or category
pub async fn list_books(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<BookResponse>> {
    let response = if params.author.is_some() || params.category.is_some() {
        catalog.search_books(params.author.as_deref(), params.category.as_deref())
    } else {
        catalog.all_books()
    };

    Json(response)
}

/// GET /{id} - fetch a single book
pub async fn get_book(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookResponse>, AppError> {
    Ok(Json(catalog.book(id)?))
}

/// GET /category/{category} - list books in a category
pub async fn books_by_category(
    State(catalog): State<Arc<Catalog>>,
    Path(category): Path<String>,
) -> Json<Vec<BookResponse>> {
    Json(catalog.books_by_category(&category))
}

/// GET /featured - list featured books
pub async fn featured_books(State(catalog): State<Arc<Catalog>>) -> Json<Vec<BookResponse>> {
    Json(catalog.featured_books())
}

/// GET /bestsellers - list bestseller books
pub async fn bestsellers(State(catalog): State<Arc<Catalog>>) -> Json<Vec<BookResponse>> {
    Json(catalog.bestsellers())
}

/// DELETE /{id} - delete a book
pub async fn delete_book(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    catalog.delete_book(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog_with_samples() -> Arc<Catalog> {
        let catalog = Catalog::new();
        catalog.seed_sample_data();
        Arc::new(catalog)
    }

    #[tokio::test]
    async fn create_book_returns_created_with_decorated_body() {
        let catalog = Arc::new(Catalog::new());
        let request = CreateBookRequest {
            title: "Test Book".to_string(),
            author: "Test Author".to_string(),
            category: "Programming".to_string(),
            isbn: "978-0000000000".to_string(),
            price: Decimal::new(10000, 2),
            featured: true,
            bestseller: false,
        };

        let (status, Json(body)) = create_book(State(catalog), Json(request)).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.description, "[FEATURED] Test Book by Test Author");
        assert_eq!(body.display_price.to_string(), "110.00");
    }

    #[tokio::test]
    async fn list_books_without_filters_returns_whole_catalog() {
        let catalog = catalog_with_samples();

        let Json(body) = list_books(
            State(catalog),
            Query(SearchParams {
                author: None,
                category: None,
            }),
        )
        .await;

        assert_eq!(body.len(), 10);
    }

    #[tokio::test]
    async fn list_books_with_author_filter() {
        let catalog = catalog_with_samples();

        let Json(body) = list_books(
            State(catalog),
            Query(SearchParams {
                author: Some("George Orwell".to_string()),
                category: None,
            }),
        )
        .await;

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].title, "1984");
    }

    #[tokio::test]
    async fn category_route_filters_by_path_segment() {
        let catalog = catalog_with_samples();

        let Json(body) = books_by_category(State(catalog), Path("Fiction".to_string())).await;

        assert_eq!(body.len(), 3);
        assert!(body.iter().all(|b| b.category == "Fiction"));
    }

    #[tokio::test]
    async fn get_and_delete_round_trip() {
        let catalog = catalog_with_samples();
        let id = catalog.all_books()[0].id;

        let Json(body) = get_book(State(catalog.clone()), Path(id)).await.unwrap();
        assert_eq!(body.id, id);

        let status = delete_book(State(catalog.clone()), Path(id)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        assert!(get_book(State(catalog), Path(id)).await.is_err());
    }

    #[tokio::test]
    async fn featured_and_bestseller_routes_carry_badges() {
        let catalog = catalog_with_samples();

        let Json(featured) = featured_books(State(catalog.clone())).await;
        assert!(!featured.is_empty());
        assert!(featured
            .iter()
            .all(|b| b.description.contains("[FEATURED]")));

        let Json(bestsellers) = bestsellers(State(catalog)).await;
        assert!(!bestsellers.is_empty());
        assert!(bestsellers
            .iter()
            .all(|b| b.description.starts_with("[BESTSELLER]")));
    }
}
