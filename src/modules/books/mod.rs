pub mod decorator;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;

use folio_kernel::{InitCtx, Module};

use handlers::{
    bestsellers, books_by_category, create_book, delete_book, featured_books, get_book, list_books,
};
use service::Catalog;

/// Books module: catalog CRUD with decorated display pricing.
pub struct BooksModule {
    catalog: Arc<Catalog>,
}

impl BooksModule {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::new()),
        }
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.catalog.seed_sample_data {
            let loaded = self.catalog.seed_sample_data();
            tracing::info!(module = self.name(), loaded, "sample book data loaded");
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_books).post(create_book))
            .route("/featured", get(featured_books))
            .route("/bestsellers", get(bestsellers))
            .route("/category/{category}", get(books_by_category))
            .route("/{id}", get(get_book).delete(delete_book))
            .with_state(self.catalog.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "description": "Retrieves all books, optionally filtered by author or category",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "author",
                                "in": "query",
                                "required": false,
                                "schema": { "type": "string" }
                            },
                            {
                                "name": "category",
                                "in": "query",
                                "required": false,
                                "schema": { "type": "string" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "List of books with decorated display prices",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/BookResponse"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Add a new book",
                        "description": "Creates a new book in the catalog",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/CreateBookRequest"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Book created",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/BookResponse"
                                        }
                                    }
                                }
                            },
                            "409": {
                                "description": "Duplicate ISBN",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            },
                            "422": {
                                "description": "Validation error",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get book by ID",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string", "format": "uuid" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "The requested book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/BookResponse"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string", "format": "uuid" }
                            }
                        ],
                        "responses": {
                            "204": {
                                "description": "Book deleted"
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/category/{category}": {
                    "get": {
                        "summary": "Get books by category",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "category",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "string" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Books in the category",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/BookResponse"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/featured": {
                    "get": {
                        "summary": "Get featured books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Featured books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/BookResponse"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/bestsellers": {
                    "get": {
                        "summary": "Get bestseller books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Bestseller books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/BookResponse"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "BookResponse": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "format": "uuid",
                                "description": "Unique identifier for the book"
                            },
                            "title": {
                                "type": "string"
                            },
                            "author": {
                                "type": "string"
                            },
                            "category": {
                                "type": "string"
                            },
                            "isbn": {
                                "type": "string"
                            },
                            "original_price": {
                                "type": "string",
                                "description": "Stored price, unmodified"
                            },
                            "display_price": {
                                "type": "string",
                                "description": "Decorated price shown to end users"
                            },
                            "description": {
                                "type": "string",
                                "description": "Decorated label, e.g. \"[FEATURED] Title by Author\""
                            },
                            "featured": {
                                "type": "boolean"
                            },
                            "bestseller": {
                                "type": "boolean"
                            }
                        },
                        "required": [
                            "id", "title", "author", "category", "isbn",
                            "original_price", "display_price", "description",
                            "featured", "bestseller"
                        ]
                    },
                    "CreateBookRequest": {
                        "type": "object",
                        "properties": {
                            "title": {
                                "type": "string"
                            },
                            "author": {
                                "type": "string"
                            },
                            "category": {
                                "type": "string"
                            },
                            "isbn": {
                                "type": "string"
                            },
                            "price": {
                                "type": "string",
                                "description": "Decimal price, must be greater than 0"
                            },
                            "featured": {
                                "type": "boolean"
                            },
                            "bestseller": {
                                "type": "boolean"
                            }
                        },
                        "required": [
                            "title", "author", "category", "isbn",
                            "price", "featured", "bestseller"
                        ]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::settings::Settings;

    #[tokio::test]
    async fn init_seeds_sample_data_when_enabled() {
        let module = BooksModule::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        module.init(&ctx).await.unwrap();
        assert_eq!(module.catalog.all_books().len(), 10);
    }

    #[tokio::test]
    async fn init_skips_seeding_when_disabled() {
        let module = BooksModule::new();
        let mut settings = Settings::default();
        settings.catalog.seed_sample_data = false;
        let ctx = InitCtx {
            settings: &settings,
        };

        module.init(&ctx).await.unwrap();
        assert!(module.catalog.all_books().is_empty());
    }

    #[test]
    fn openapi_fragment_covers_all_routes() {
        let module = BooksModule::new();
        let spec = module.openapi().unwrap();
        let paths = spec["paths"].as_object().unwrap();

        for path in ["/", "/{id}", "/category/{category}", "/featured", "/bestsellers"] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn routes_build_successfully() {
        let module = BooksModule::new();
        let _router = module.routes();
    }
}
