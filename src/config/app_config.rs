use crate::error::{AppError, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_PRODUCT_API_URL: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

/// Where the remote product API lives.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            upstream: UpstreamConfig::new(
                env::var("PRODUCT_API_URL")
                    .unwrap_or_else(|_| DEFAULT_PRODUCT_API_URL.to_string()),
            )?,
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| {
            AppError::ConfigError(format!("Invalid PRODUCT_API_URL {}: {}", base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(AppError::ConfigError(format!(
                "PRODUCT_API_URL must be an http(s) URL, got {}",
                base_url
            )));
        }

        Ok(Self { base_url })
    }

    pub fn url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid PRODUCT_API_URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_base_urls() {
        assert!(UpstreamConfig::new("https://fakestoreapi.com").is_ok());
        assert!(UpstreamConfig::new("http://127.0.0.1:8080/api/").is_ok());
    }

    #[test]
    fn rejects_non_http_base_urls() {
        assert!(matches!(
            UpstreamConfig::new("ftp://example.com"),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            UpstreamConfig::new("mailto:shop@example.com"),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            UpstreamConfig::new("not a url"),
            Err(AppError::ConfigError(_))
        ));
    }
}
