mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, ServerConfig, UpstreamConfig, DEFAULT_PRODUCT_API_URL,
};
