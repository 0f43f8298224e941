mod common;

use catalog_admin_api::{
    dto::{brands::BrandPayload, categories::CategoryPayload, products::ProductPayload},
    error::AppError,
    filter::{FilterSelection, PriceRange},
    models::Product,
    services::{brand_service, category_service, product_service},
    state::AppState,
};
use common::{setup_state, unique};

async fn add_product(
    state: &AppState,
    name: &str,
    brand: &str,
    category: &str,
    price: f64,
) -> anyhow::Result<Product> {
    let resp = product_service::create_product(
        state,
        ProductPayload::new(name, brand, category, price, "https://img.example/p.png"),
    )
    .await?;
    Ok(resp.data.expect("created product"))
}

async fn product(state: &AppState, id: &uuid::Uuid) -> anyhow::Result<Product> {
    let resp = product_service::get_product(state, &id.to_string()).await?;
    Ok(resp.data.expect("product"))
}

#[tokio::test]
async fn create_then_list_contains_exactly_one_fresh_record() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let name = unique("Runner");

    let first = add_product(&state, &name, "Acme", "Shoes", 1500.0).await?;
    let second = add_product(&state, &unique("Tote"), "Acme", "Bags", 700.0).await?;
    assert_ne!(first.id, second.id);

    let all = product_service::all_products(&state).await?;
    let matching: Vec<_> = all.iter().filter(|p| p.product_name == name).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, first.id);
    assert_eq!(matching[0].price, 1500.0);

    // insertion order
    let first_pos = all.iter().position(|p| p.id == first.id).unwrap();
    let second_pos = all.iter().position(|p| p.id == second.id).unwrap();
    assert!(first_pos < second_pos);
    Ok(())
}

#[tokio::test]
async fn create_rejects_missing_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let mut payload = ProductPayload::new("Runner", "Acme", "Shoes", 10.0, "https://img");
    payload.image_url = None;

    let err = product_service::create_product(&state, payload).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn delete_removes_product_and_second_delete_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let created = add_product(&state, &unique("Mug"), "Acme", "Kitchen", 300.0).await?;
    let id = created.id.to_string();

    product_service::delete_product(&state, &id).await?;
    let all = product_service::all_products(&state).await?;
    assert!(all.iter().all(|p| p.id != created.id));

    let err = product_service::delete_product(&state, &id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_checks_target() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let created = add_product(&state, &unique("Kettle"), "Acme", "Kitchen", 900.0).await?;

    let updated = product_service::update_product(
        &state,
        &created.id.to_string(),
        ProductPayload::new("Kettle Pro", "Zed", "Appliances", 1200.0, "https://img/k.png"),
    )
    .await?
    .data
    .expect("updated product");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.product_name, "Kettle Pro");
    assert_eq!(updated.brand_name, "Zed");
    assert_eq!(updated.category, "Appliances");
    assert_eq!(updated.price, 1200.0);

    let missing = uuid::Uuid::now_v7().to_string();
    let err = product_service::update_product(
        &state,
        &missing,
        ProductPayload::new("x", "y", "z", 1.0, "u"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = product_service::update_product(&state, &created.id.to_string(), ProductPayload::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn brand_rename_rewrites_only_matching_products() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let old = unique("Acme");
    let new = unique("Ace");
    let other = unique("Other");

    let brand = brand_service::create_brand(&state, BrandPayload::new(&old))
        .await?
        .data
        .expect("brand");
    let a = add_product(&state, &unique("a"), &old, "Shoes", 100.0).await?;
    let b = add_product(&state, &unique("b"), &old, "Bags", 200.0).await?;
    let c = add_product(&state, &unique("c"), &other, "Shoes", 300.0).await?;

    let renamed =
        brand_service::rename_brand(&state, &brand.id.to_string(), BrandPayload::new(&new)).await?;
    assert_eq!(renamed.record.name, new);
    assert_eq!(renamed.products_updated, 2);

    assert_eq!(product(&state, &a.id).await?.brand_name, new);
    assert_eq!(product(&state, &b.id).await?.brand_name, new);
    assert_eq!(product(&state, &c.id).await?.brand_name, other);
    Ok(())
}

#[tokio::test]
async fn renaming_to_same_name_modifies_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let name = unique("Acme");
    let brand = brand_service::create_brand(&state, BrandPayload::new(&name))
        .await?
        .data
        .expect("brand");
    let p = add_product(&state, &unique("p"), &name, "Shoes", 100.0).await?;

    let renamed =
        brand_service::rename_brand(&state, &brand.id.to_string(), BrandPayload::new(&name)).await?;
    assert_eq!(renamed.products_updated, 0);
    assert_eq!(product(&state, &p.id).await?.brand_name, name);
    Ok(())
}

#[tokio::test]
async fn rename_validates_before_lookup() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let missing = uuid::Uuid::now_v7().to_string();

    let err = brand_service::rename_brand(&state, &missing, BrandPayload::new("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = brand_service::rename_brand(&state, &missing, BrandPayload::new("Real"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn deleting_brand_leaves_products_alone() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let name = unique("Gone");
    let brand = brand_service::create_brand(&state, BrandPayload::new(&name))
        .await?
        .data
        .expect("brand");
    let p = add_product(&state, &unique("orphan"), &name, "Shoes", 100.0).await?;

    brand_service::delete_brand(&state, &brand.id.to_string()).await?;
    assert_eq!(product(&state, &p.id).await?.brand_name, name);

    let err = brand_service::delete_brand(&state, &brand.id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn category_rename_and_delete() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let old = unique("Shoes");
    let new = unique("Footwear");

    let category = category_service::create_category(&state, CategoryPayload::new(&old))
        .await?
        .data
        .expect("category");
    let shoe = add_product(&state, &unique("runner"), "Acme", &old, 100.0).await?;
    let bag = add_product(&state, &unique("tote"), "Acme", &unique("Bags"), 100.0).await?;

    let renamed = category_service::rename_category(
        &state,
        &category.id.to_string(),
        CategoryPayload::new(&new),
    )
    .await?;
    assert_eq!(renamed.products_updated, 1);
    assert_eq!(product(&state, &shoe.id).await?.category, new);
    assert_ne!(product(&state, &bag.id).await?.category, new);

    category_service::delete_category(&state, &category.id.to_string()).await?;
    assert_eq!(product(&state, &shoe.id).await?.category, new);

    let listed = category_service::list_categories(&state).await?.data.expect("list");
    assert!(listed.items.iter().all(|c| c.id != category.id));
    Ok(())
}

#[tokio::test]
async fn product_may_name_a_brand_that_does_not_exist() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ghost = unique("Ghost");
    let p = add_product(&state, &unique("thing"), &ghost, "Misc", 5.0).await?;

    let brands = brand_service::list_brands(&state).await?.data.expect("brands");
    assert!(brands.items.iter().all(|b| b.name != ghost));
    assert_eq!(product(&state, &p.id).await?.brand_name, ghost);
    Ok(())
}

#[tokio::test]
async fn listing_applies_view_filter() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let category = unique("Shoes");
    let cheap = add_product(&state, &unique("p500"), "Acme", &category, 500.0).await?;
    add_product(&state, &unique("p1000"), "Acme", &category, 1000.0).await?;
    add_product(&state, &unique("p1500"), "Zed", &category, 1500.0).await?;

    let selection = FilterSelection::new()
        .with_categories([category.clone()])
        .with_price_ranges([PriceRange::Under1000]);
    let listed = product_service::list_products(&state, &selection)
        .await?
        .data
        .expect("list");
    assert_eq!(listed.items.len(), 1);
    assert_eq!(listed.items[0].id, cheap.id);

    let by_category = FilterSelection::new().with_categories([category]);
    let listed = product_service::list_products(&state, &by_category)
        .await?
        .data
        .expect("list");
    assert_eq!(listed.items.len(), 3);
    Ok(())
}

#[tokio::test]
async fn rename_with_no_referencing_products_is_a_noop_sweep() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let old = unique("Lonely");
    let new = unique("StillLonely");
    let bystander = add_product(&state, &unique("p"), &unique("Other"), "Shoes", 10.0).await?;

    let brand = brand_service::create_brand(&state, BrandPayload::new(&old))
        .await?
        .data
        .expect("brand");
    let renamed =
        brand_service::rename_brand(&state, &brand.id.to_string(), BrandPayload::new(&new)).await?;
    assert_eq!(renamed.record.name, new);
    assert_eq!(renamed.products_updated, 0);
    assert_eq!(product(&state, &bystander.id).await?.brand_name, bystander.brand_name);

    let category = category_service::create_category(&state, CategoryPayload::new(&old))
        .await?
        .data
        .expect("category");
    let renamed = category_service::rename_category(
        &state,
        &category.id.to_string(),
        CategoryPayload::new(&new),
    )
    .await?;
    assert_eq!(renamed.record.name, new);
    assert_eq!(renamed.products_updated, 0);
    assert_eq!(product(&state, &bystander.id).await?.category, "Shoes");
    Ok(())
}

#[tokio::test]
async fn category_rename_rejects_blank_name_and_keeps_record() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let name = unique("Kitchen");
    let category = category_service::create_category(&state, CategoryPayload::new(&name))
        .await?
        .data
        .expect("category");

    for blank in [CategoryPayload::new(""), CategoryPayload::new("   "), CategoryPayload::default()] {
        let err = category_service::rename_category(&state, &category.id.to_string(), blank)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    let stored = category_service::get_category(&state, &category.id.to_string())
        .await?
        .data
        .expect("category");
    assert_eq!(stored.name, name);
    Ok(())
}

#[tokio::test]
async fn category_renamed_to_same_name_modifies_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let name = unique("Bags");
    let category = category_service::create_category(&state, CategoryPayload::new(&name))
        .await?
        .data
        .expect("category");
    let p = add_product(&state, &unique("tote"), "Acme", &name, 100.0).await?;

    let renamed = category_service::rename_category(
        &state,
        &category.id.to_string(),
        CategoryPayload::new(&name),
    )
    .await?;
    assert_eq!(renamed.products_updated, 0);
    assert_eq!(renamed.record.name, name);
    assert_eq!(product(&state, &p.id).await?.category, name);
    Ok(())
}
