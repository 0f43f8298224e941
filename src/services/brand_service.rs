use sea_orm::{
    ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait,
    sea_query::LockType,
};

use crate::{
    dto::brands::{BrandList, BrandPayload},
    entity::{
        brands::{ActiveModel, Column, Entity as Brands},
        products::{Column as ProductCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Brand,
    response::{ApiResponse, Meta},
    services::Renamed,
    state::AppState,
    store::{self, found},
};

const MISSING: &str = "Brand not found";

pub async fn list_brands(state: &AppState) -> AppResult<ApiResponse<BrandList>> {
    let items: Vec<Brand> = Brands::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Brand::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Brands", BrandList { items }, Some(meta)))
}

pub async fn get_brand(state: &AppState, id: &str) -> AppResult<ApiResponse<Brand>> {
    let id = store::parse_id(id, MISSING)?;
    let brand = found(Brands::find_by_id(id).one(&state.orm).await?, MISSING)?;
    Ok(ApiResponse::success("Brand", Brand::from(brand), None))
}

pub async fn create_brand(state: &AppState, payload: BrandPayload) -> AppResult<ApiResponse<Brand>> {
    let name = payload.validate()?;
    let active = ActiveModel {
        id: Set(store::fresh_id()),
        name: Set(name),
        created_at: Set(store::now()),
    };
    let brand = active.insert(&state.orm).await?;
    tracing::info!(brand_id = %brand.id, name = %brand.name, "brand created");

    Ok(ApiResponse::success(
        "Brand added successfully",
        Brand::from(brand),
        Some(Meta::empty()),
    ))
}

/// Renames the brand and rewrites `brandName` on every product still carrying
/// the old name. Both writes commit together or not at all.
pub async fn rename_brand(
    state: &AppState,
    id: &str,
    payload: BrandPayload,
) -> AppResult<Renamed<Brand>> {
    let name = payload.validate()?;
    let id = store::parse_id(id, MISSING)?;

    let txn = state.orm.begin().await?;
    let existing = Brands::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let existing = found(existing, MISSING)?;
    let old_name = existing.name.clone();

    let mut active: ActiveModel = existing.into();
    active.name = Set(name);
    let brand = active.update(&txn).await?;

    let products_updated =
        store::update_matching::<Products, _>(&txn, ProductCol::BrandName, &old_name, &brand.name)
            .await?;
    txn.commit().await?;

    tracing::info!(
        brand_id = %brand.id,
        from = %old_name,
        to = %brand.name,
        products_updated,
        "brand renamed"
    );

    Ok(Renamed {
        record: Brand::from(brand),
        products_updated,
    })
}

pub async fn update_brand(
    state: &AppState,
    id: &str,
    payload: BrandPayload,
) -> AppResult<ApiResponse<Brand>> {
    let renamed = rename_brand(state, id, payload).await?;
    Ok(ApiResponse::success(
        "Brand updated successfully, and associated products updated",
        renamed.record,
        Some(Meta::empty()),
    ))
}

/// Products keep whatever `brandName` they had.
pub async fn delete_brand(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let id = store::parse_id(id, MISSING)?;
    let result = Brands::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(MISSING));
    }
    tracing::info!(brand_id = %id, "brand deleted");

    Ok(ApiResponse::success(
        "Brand deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
