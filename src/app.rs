use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{config::AppConfig, error::Result, routes, services::ProductGateway};

#[derive(Clone)]
pub struct AppState {
    pub gateway: ProductGateway,
}

pub fn build(config: &AppConfig) -> Result<Router> {
    let gateway = ProductGateway::new(&config.upstream)?;
    let state = AppState { gateway };
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}

pub fn router(state: AppState) -> Router {
    routes::create_router().with_state(state)
}
