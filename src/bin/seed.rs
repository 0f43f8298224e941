use catalog_admin_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{brands::BrandPayload, categories::CategoryPayload, products::ProductPayload},
    entity::Products,
    services::{brand_service, category_service, product_service},
    state::AppState,
};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    if Products::find().count(&state.orm).await? > 0 {
        println!("Catalog already has products, skipping seed");
        return Ok(());
    }

    for name in ["Nike", "Samsung", "Prestige", "Wildcraft"] {
        brand_service::create_brand(&state, BrandPayload::new(name)).await?;
    }
    for name in ["Shoes", "Electronics", "Kitchen", "Bags"] {
        category_service::create_category(&state, CategoryPayload::new(name)).await?;
    }
    println!("Seeded brands and categories");

    let products = [
        ("Air Zoom Pegasus", "Nike", "Shoes", 8995.0),
        ("Galaxy Buds", "Samsung", "Electronics", 4999.0),
        ("Galaxy Tab S9", "Samsung", "Electronics", 72999.0),
        ("Pressure Cooker 3L", "Prestige", "Kitchen", 1899.0),
        ("Rucksack 45L", "Wildcraft", "Bags", 2499.0),
        ("Flip Flops", "Nike", "Shoes", 799.0),
    ];

    for (name, brand, category, price) in products {
        let image = format!(
            "https://placehold.co/400x300?text={}",
            name.replace(' ', "+")
        );
        product_service::create_product(
            &state,
            ProductPayload::new(name, brand, category, price, &image),
        )
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
