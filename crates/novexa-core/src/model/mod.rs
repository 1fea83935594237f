pub mod ids;
pub mod product;

pub use ids::ProductId;
pub use product::{Product, UNISEX};
