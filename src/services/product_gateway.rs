use std::sync::Arc;

use reqwest::{
    header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA},
    RequestBuilder, Url,
};
use serde::de::DeserializeOwned;

use crate::{
    config::UpstreamConfig,
    error::{Result, UpstreamError},
    models::{Product, ProductInput, ProductLookup},
    services::id_source::{IdSource, RandomIdSource},
    utils::parse_product_id,
};

/// Client for the remote product API.
///
/// Every operation returns a value of the expected shape. Transport errors,
/// non-success statuses and unusable bodies are logged and replaced by a
/// placeholder or an optimistic product built from the caller's input.
#[derive(Clone)]
pub struct ProductGateway {
    client: reqwest::Client,
    base_url: Url,
    ids: Arc<dyn IdSource>,
}

impl ProductGateway {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        tracing::info!("Product gateway targeting {}", config.base_url);

        Ok(Self {
            client,
            base_url: config.url()?,
            ids: Arc::new(RandomIdSource),
        })
    }

    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub async fn list(&self) -> Vec<Product> {
        let request = Ok(self.client.get(self.collection_url()));

        match self.fetch::<Vec<Product>>(request).await {
            Ok(products) => products,
            Err(UpstreamError::EmptyBody) => Vec::new(),
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn lookup(&self, id: &str) -> ProductLookup {
        let request = self.item_url(id).map(|url| self.client.get(url));

        match self.fetch::<Product>(request).await {
            Ok(product) => ProductLookup::Found(product),
            Err(e) if e.is_not_found() => {
                tracing::info!("Product {} not found upstream", id);
                ProductLookup::NotFound(parse_product_id(id))
            }
            Err(e) => {
                tracing::error!("Error fetching product {}: {}", id, e);
                ProductLookup::NotFound(parse_product_id(id))
            }
        }
    }

    pub async fn get(&self, id: &str) -> Product {
        self.lookup(id).await.into_product()
    }

    pub async fn create(&self, input: &ProductInput) -> Product {
        let request = Ok(self.client.post(self.collection_url()).json(input));

        match self.fetch::<Product>(request).await {
            Ok(product) => product,
            Err(e) => {
                let id = self.ids.next_id();
                tracing::warn!(
                    "Error creating product, continuing with local id {}: {}",
                    id,
                    e
                );
                input.clone().into_product(Some(id))
            }
        }
    }

    pub async fn update(&self, id: &str, input: &ProductInput) -> Product {
        let request = self.item_url(id).map(|url| self.client.put(url).json(input));

        match self.fetch::<Product>(request).await {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!("Error updating product {}, keeping local copy: {}", id, e);
                input.clone().into_product(parse_product_id(id))
            }
        }
    }

    /// Always reports success; failures are only logged.
    pub async fn delete(&self, id: &str) -> bool {
        let outcome = match self.item_url(id) {
            Ok(url) => match self.client.delete(url).send().await {
                Ok(response) if response.status().is_success() => Ok(()),
                Ok(response) => Err(UpstreamError::Status(response.status())),
                Err(e) => Err(UpstreamError::from(e)),
            },
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            tracing::error!("Error deleting product {}: {}", id, e);
        }

        true
    }

    fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("products");
        }
        url
    }

    /// `.` and `..` would be dropped by path normalization and address the
    /// collection, so they never reach the wire.
    fn item_url(&self, id: &str) -> std::result::Result<Url, UpstreamError> {
        if matches!(id, "" | "." | "..") {
            return Err(UpstreamError::UnusableId(id.to_string()));
        }

        let mut url = self.collection_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: std::result::Result<RequestBuilder, UpstreamError>,
    ) -> std::result::Result<T, UpstreamError> {
        let response = request?.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(UpstreamError::EmptyBody);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
