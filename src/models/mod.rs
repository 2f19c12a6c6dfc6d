mod page;
mod product;

pub use page::*;
pub use product::*;
