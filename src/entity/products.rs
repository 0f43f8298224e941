use sea_orm::entity::prelude::*;

/// Products carry `brand_name` and `category` as plain copies of the
/// corresponding names, not as keys into `brands` / `categories`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_name: String,
    pub brand_name: String,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub image_url: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
