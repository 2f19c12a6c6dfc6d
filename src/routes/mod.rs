mod health;
mod products;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/new", get(products::new_product_page))
        .route(
            "/api/products/{id}",
            get(products::product_page)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/products/{id}/edit", get(products::edit_product_page))
}
