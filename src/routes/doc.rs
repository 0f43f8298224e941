use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        brands::{BrandList, BrandPayload},
        categories::{CategoryList, CategoryPayload},
        products::{PriceInput, ProductList, ProductPayload},
    },
    filter::PriceRange,
    models::{Brand, Category, Product},
    response::{ApiResponse, Meta},
    routes::{brands, categories, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        brands::list_brands,
        brands::get_brand,
        brands::create_brand,
        brands::update_brand,
        brands::delete_brand,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
    ),
    components(
        schemas(
            Product,
            Brand,
            Category,
            ProductPayload,
            PriceInput,
            BrandPayload,
            CategoryPayload,
            ProductList,
            BrandList,
            CategoryList,
            PriceRange,
            params::ProductQuery,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<Brand>,
            ApiResponse<Category>,
            ApiResponse<ProductList>,
            ApiResponse<BrandList>,
            ApiResponse<CategoryList>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Brands", description = "Brand endpoints; renames propagate to products"),
        (name = "Categories", description = "Category endpoints; renames propagate to products"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
