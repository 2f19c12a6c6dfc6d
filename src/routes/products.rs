use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::StatusCode;

use crate::{
    AppState,
    error::Result,
    models::{
        DeleteResponse, MutationResponse, Product, ProductCard, ProductDetailPage,
        ProductFormPage, ProductInput, ProductListPage, ProductNotFoundPage, product_link,
    },
    utils::parse_product_id,
};

pub async fn list_products(State(state): State<AppState>) -> Json<ProductListPage> {
    let products = state.gateway.list().await;

    Json(ProductListPage {
        products: products.into_iter().map(ProductCard::from).collect(),
        new_product_link: "/product/new",
    })
}

pub async fn new_product_page() -> Json<ProductFormPage> {
    Json(ProductFormPage::create())
}

pub async fn product_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.gateway.lookup(&id).await.found() {
        Some(product) if !product.is_placeholder() => {
            Json(ProductDetailPage::new(product)).into_response()
        }
        _ => not_found_page(&id),
    }
}

pub async fn edit_product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.gateway.lookup(&id).await.found() {
        Some(product) if !product.is_placeholder() => {
            Json(ProductFormPage::edit(&product, &id)).into_response()
        }
        _ => not_found_page(&id),
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductInput>,
) -> Result<(StatusCode, Json<MutationResponse>)> {
    payload.validate()?;

    let product = state.gateway.create(&payload).await;
    tracing::info!("Product {:?} created", product.id);

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            product,
            redirect: "/".to_string(),
        }),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductInput>,
) -> Result<Json<MutationResponse>> {
    payload.validate()?;

    let product = state.gateway.update(&id, &payload).await;

    Ok(Json(MutationResponse {
        product,
        redirect: product_link(parse_product_id(&id)),
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    let deleted = state.gateway.delete(&id).await;

    Json(DeleteResponse {
        deleted,
        redirect: "/",
    })
}

fn not_found_page(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ProductNotFoundPage::new(Product::placeholder(parse_product_id(id)))),
    )
        .into_response()
}
