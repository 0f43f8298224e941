use sea_orm::{
    ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait,
    sea_query::LockType,
};

use crate::{
    dto::categories::{CategoryList, CategoryPayload},
    entity::{
        categories::{ActiveModel, Column, Entity as Categories},
        products::{Column as ProductCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    services::Renamed,
    state::AppState,
    store::{self, found},
};

const MISSING: &str = "Category not found";

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = Categories::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn get_category(state: &AppState, id: &str) -> AppResult<ApiResponse<Category>> {
    let id = store::parse_id(id, MISSING)?;
    let category = found(Categories::find_by_id(id).one(&state.orm).await?, MISSING)?;
    Ok(ApiResponse::success("Category", Category::from(category), None))
}

pub async fn create_category(
    state: &AppState,
    payload: CategoryPayload,
) -> AppResult<ApiResponse<Category>> {
    let name = payload.validate()?;
    let active = ActiveModel {
        id: Set(store::fresh_id()),
        name: Set(name),
        created_at: Set(store::now()),
    };
    let category = active.insert(&state.orm).await?;
    tracing::info!(category_id = %category.id, name = %category.name, "category created");

    Ok(ApiResponse::success(
        "Category added successfully",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

/// Renames the category and rewrites `category` on every product still carrying
/// the old name. Both writes commit together or not at all.
pub async fn rename_category(
    state: &AppState,
    id: &str,
    payload: CategoryPayload,
) -> AppResult<Renamed<Category>> {
    let name = payload.validate()?;
    let id = store::parse_id(id, MISSING)?;

    let txn = state.orm.begin().await?;
    let existing = Categories::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let existing = found(existing, MISSING)?;
    let old_name = existing.name.clone();

    let mut active: ActiveModel = existing.into();
    active.name = Set(name);
    let category = active.update(&txn).await?;

    let products_updated = store::update_matching::<Products, _>(
        &txn,
        ProductCol::Category,
        &old_name,
        &category.name,
    )
    .await?;
    txn.commit().await?;

    tracing::info!(
        category_id = %category.id,
        from = %old_name,
        to = %category.name,
        products_updated,
        "category renamed"
    );

    Ok(Renamed {
        record: Category::from(category),
        products_updated,
    })
}

pub async fn update_category(
    state: &AppState,
    id: &str,
    payload: CategoryPayload,
) -> AppResult<ApiResponse<Category>> {
    let renamed = rename_category(state, id, payload).await?;
    Ok(ApiResponse::success(
        "Category updated successfully",
        renamed.record,
        Some(Meta::empty()),
    ))
}

/// Products keep whatever `category` they had.
pub async fn delete_category(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let id = store::parse_id(id, MISSING)?;
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(MISSING));
    }
    tracing::info!(category_id = %id, "category deleted");

    Ok(ApiResponse::success(
        "Category deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
