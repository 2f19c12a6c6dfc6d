pub mod id_source;
pub mod product_gateway;

pub use id_source::{IdSource, RandomIdSource, OPTIMISTIC_ID_RANGE};
pub use product_gateway::ProductGateway;
