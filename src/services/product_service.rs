use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::products::{ProductList, ProductPayload},
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    filter::FilterSelection,
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
    store::{self, found},
};

const MISSING: &str = "Product not found";

/// Every product, oldest first.
pub async fn all_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn list_products(
    state: &AppState,
    selection: &FilterSelection,
) -> AppResult<ApiResponse<ProductList>> {
    let products = all_products(state).await?;
    let items: Vec<Product> = if selection.is_empty() {
        products
    } else {
        selection.apply(&products).into_iter().cloned().collect()
    };

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let id = store::parse_id(id, MISSING)?;
    let product = found(Products::find_by_id(id).one(&state.orm).await?, MISSING)?;
    Ok(ApiResponse::success("Product", Product::from(product), None))
}

pub async fn create_product(
    state: &AppState,
    payload: ProductPayload,
) -> AppResult<ApiResponse<Product>> {
    let fields = payload.validate()?;
    let active = ActiveModel {
        id: Set(store::fresh_id()),
        product_name: Set(fields.product_name),
        brand_name: Set(fields.brand_name),
        category: Set(fields.category),
        price: Set(fields.price),
        image_url: Set(fields.image_url),
        created_at: Set(store::now()),
    };
    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok(ApiResponse::success(
        "Product added successfully",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

/// Replaces all five fields. Validation runs before the lookup, so a bad
/// payload is reported even when the id is unknown.
pub async fn update_product(
    state: &AppState,
    id: &str,
    payload: ProductPayload,
) -> AppResult<ApiResponse<Product>> {
    let fields = payload.validate()?;
    let id = store::parse_id(id, MISSING)?;
    let existing = found(Products::find_by_id(id).one(&state.orm).await?, MISSING)?;

    let mut active: ActiveModel = existing.into();
    active.product_name = Set(fields.product_name);
    active.brand_name = Set(fields.brand_name);
    active.category = Set(fields.category);
    active.price = Set(fields.price);
    active.image_url = Set(fields.image_url);

    let product = active.update(&state.orm).await?;
    tracing::info!(product_id = %product.id, "product updated");

    Ok(ApiResponse::success(
        "Product updated successfully",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let id = store::parse_id(id, MISSING)?;
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(MISSING));
    }
    tracing::info!(product_id = %id, "product deleted");

    Ok(ApiResponse::success(
        "Product deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
