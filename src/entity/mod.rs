pub mod brands;
pub mod categories;
pub mod products;

pub use products::Entity as Products;
