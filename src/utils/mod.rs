pub mod id;

pub use id::parse_product_id;
