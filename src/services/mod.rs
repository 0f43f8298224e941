pub mod brand_service;
pub mod category_service;
pub mod product_service;

/// Result of renaming a brand or category.
#[derive(Debug, Clone)]
pub struct Renamed<T> {
    pub record: T,
    /// Products whose copied name was rewritten.
    pub products_updated: u64,
}
