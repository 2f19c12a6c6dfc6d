use reqwest::Url;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const PLACEHOLDER_TITLE: &str = "Product Not Available";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "This product could not be found or is no longer available.";
pub const PLACEHOLDER_CATEGORY: &str = "unknown";
pub const PLACEHOLDER_IMAGE: &str =
    "https://webcomkb.com/crazydomains/web-hosting/cd_web_hosting_404_not_found.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog entry as served by the product API.
///
/// `id` is `None` when a locally built product was keyed by an identifier
/// that is not numeric; it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Fields a caller supplies when creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Outcome of a single-product read.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    Found(Product),
    NotFound(Option<i64>),
}

impl Product {
    pub fn placeholder(id: Option<i64>) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            price: Decimal::ZERO,
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            category: PLACEHOLDER_CATEGORY.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            rating: Rating::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }
}

impl ProductInput {
    pub fn into_product(self, id: Option<i64>) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating.unwrap_or_default(),
        }
    }

    /// Required-field checks applied before a form submission reaches the API.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("category", &self.category),
            ("description", &self.description),
            ("image", &self.image),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }

        if self.price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "price must not be negative".to_string(),
            ));
        }

        Url::parse(self.image.trim())
            .map_err(|_| AppError::BadRequest("image must be a valid URL".to_string()))?;

        Ok(())
    }
}

impl Default for ProductInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: Decimal::ZERO,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Some(Rating::default()),
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating: Some(product.rating),
        }
    }
}

impl ProductLookup {
    /// Collapses a miss into the placeholder product.
    pub fn into_product(self) -> Product {
        match self {
            ProductLookup::Found(product) => product,
            ProductLookup::NotFound(id) => Product::placeholder(id),
        }
    }

    pub fn found(self) -> Option<Product> {
        match self {
            ProductLookup::Found(product) => Some(product),
            ProductLookup::NotFound(_) => None,
        }
    }
}
