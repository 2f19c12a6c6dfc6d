use rust_decimal::RoundingStrategy;
use serde::Serialize;

use super::{Product, ProductInput};

const DESCRIPTION_PREVIEW_CHARS: usize = 160;
const STAR_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn product_details(product: &Product) -> Self {
        Self {
            title: format!("{} | Product Details", product.title),
            description: product
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect(),
        }
    }

    pub fn edit_product(product: &Product) -> Self {
        Self {
            title: format!("Edit {}", product.title),
            description: format!("Edit details for {}", product.title),
        }
    }

    pub fn new_product() -> Self {
        Self {
            title: "Add New Product".to_string(),
            description: "Create a new product in our catalog".to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: "Product Not Found".to_string(),
            description: "The requested product could not be found".to_string(),
        }
    }
}

pub fn price_label(product: &Product) -> String {
    let cents = product
        .price
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Five-glyph rating bar, one filled star per whole point of `rate`.
pub fn rating_stars(rate: f64) -> String {
    let filled = if rate.is_finite() {
        rate.floor().clamp(0.0, STAR_COUNT as f64) as usize
    } else {
        0
    };

    (0..STAR_COUNT)
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ProductCard {
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price_label: String,
    pub link: String,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        Self {
            price_label: price_label(&product),
            link: product_link(product.id),
            id: product.id,
            title: product.title,
            category: product.category,
            image: product.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListPage {
    pub products: Vec<ProductCard>,
    pub new_product_link: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailPage {
    pub metadata: PageMetadata,
    pub price_label: String,
    pub stars: String,
    pub reviews_label: String,
    pub edit_link: String,
    pub product: Product,
}

impl ProductDetailPage {
    pub fn new(product: Product) -> Self {
        Self {
            metadata: PageMetadata::product_details(&product),
            price_label: price_label(&product),
            stars: rating_stars(product.rating.rate),
            reviews_label: format!(
                "{} ({} reviews)",
                product.rating.rate, product.rating.count
            ),
            edit_link: edit_link(product.id),
            product,
        }
    }
}

/// Body served with a 404 when a product page has nothing to show.
#[derive(Debug, Serialize)]
pub struct ProductNotFoundPage {
    pub metadata: PageMetadata,
    pub product: Product,
    pub back_link: &'static str,
}

impl ProductNotFoundPage {
    pub fn new(product: Product) -> Self {
        Self {
            metadata: PageMetadata::not_found(),
            product,
            back_link: "/",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductFormPage {
    pub metadata: PageMetadata,
    pub is_editing: bool,
    pub back_link: String,
    pub form: ProductInput,
}

impl ProductFormPage {
    pub fn create() -> Self {
        Self {
            metadata: PageMetadata::new_product(),
            is_editing: false,
            back_link: "/".to_string(),
            form: ProductInput::default(),
        }
    }

    /// `route_id` is the identifier the page was requested with.
    pub fn edit(product: &Product, route_id: &str) -> Self {
        Self {
            metadata: PageMetadata::edit_product(product),
            is_editing: true,
            back_link: format!("/product/{}", route_id),
            form: ProductInput::from(product),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub product: Product,
    pub redirect: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub redirect: &'static str,
}

fn id_segment(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "NaN".to_string())
}

pub fn product_link(id: Option<i64>) -> String {
    format!("/product/{}", id_segment(id))
}

pub fn edit_link(id: Option<i64>) -> String {
    format!("/product/edit/{}", id_segment(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use rust_decimal::Decimal;

    fn backpack() -> Product {
        Product {
            id: Some(1),
            title: "Fjallraven Backpack".to_string(),
            price: Decimal::new(10995, 2),
            description: "x".repeat(200),
            category: "men's clothing".to_string(),
            image: "https://fakestoreapi.com/img/1.jpg".to_string(),
            rating: Rating { rate: 3.9, count: 120 },
        }
    }

    #[test]
    fn detail_metadata_truncates_description() {
        let metadata = PageMetadata::product_details(&backpack());

        assert_eq!(metadata.title, "Fjallraven Backpack | Product Details");
        assert_eq!(metadata.description.chars().count(), 160);
    }

    #[test]
    fn price_label_has_two_decimals() {
        let mut product = backpack();
        assert_eq!(price_label(&product), "$109.95");

        product.price = Decimal::new(22, 0);
        assert_eq!(price_label(&product), "$22.00");

        product.price = Decimal::new(125, 3);
        assert_eq!(price_label(&product), "$0.13");

        product.price = Decimal::new(1005, 3);
        assert_eq!(price_label(&product), "$1.01");
    }

    #[test]
    fn stars_follow_whole_rating_points() {
        assert_eq!(rating_stars(3.9), "★★★☆☆");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_stars(7.0), "★★★★★");
        assert_eq!(rating_stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn detail_page_labels() {
        let page = ProductDetailPage::new(backpack());

        assert_eq!(page.reviews_label, "3.9 (120 reviews)");
        assert_eq!(page.edit_link, "/product/edit/1");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let page = ProductFormPage::edit(&backpack(), "1");

        assert!(page.is_editing);
        assert_eq!(page.back_link, "/product/1");
        assert_eq!(page.form.title, "Fjallraven Backpack");
        assert_eq!(page.form.rating, Some(Rating { rate: 3.9, count: 120 }));
        assert_eq!(page.metadata.title, "Edit Fjallraven Backpack");
    }

    #[test]
    fn edit_back_link_uses_requested_id() {
        let mut product = backpack();
        product.id = Some(99);

        let page = ProductFormPage::edit(&product, "7");

        assert_eq!(page.back_link, "/product/7");
    }

    #[test]
    fn new_form_starts_empty() {
        let page = ProductFormPage::create();

        assert!(!page.is_editing);
        assert_eq!(page.form.price, Decimal::ZERO);
        assert_eq!(page.form.rating, Some(Rating::default()));
    }
}
