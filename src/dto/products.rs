use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

use super::require_text;

/// Form clients send the price as text, JSON clients as a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`. Every field is
/// required in both cases; absence is reported as a validation error rather
/// than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_name: Option<String>,
    pub brand_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<PriceInput>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub product_name: String,
    pub brand_name: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
}

impl ProductPayload {
    pub fn new(
        product_name: &str,
        brand_name: &str,
        category: &str,
        price: f64,
        image_url: &str,
    ) -> Self {
        Self {
            product_name: Some(product_name.to_owned()),
            brand_name: Some(brand_name.to_owned()),
            category: Some(category.to_owned()),
            price: Some(price.into()),
            image_url: Some(image_url.to_owned()),
        }
    }

    pub fn validate(self) -> AppResult<ProductFields> {
        Ok(ProductFields {
            product_name: require_text("productName", self.product_name)?,
            brand_name: require_text("brandName", self.brand_name)?,
            category: require_text("category", self.category)?,
            price: parse_price(self.price)?,
            image_url: require_text("imageURL", self.image_url)?,
        })
    }
}

fn parse_price(input: Option<PriceInput>) -> AppResult<f64> {
    let price = match input {
        None => return Err(AppError::validation("price is required")),
        Some(PriceInput::Number(n)) => n,
        Some(PriceInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(AppError::validation("price is required"));
            }
            text.parse::<f64>()
                .map_err(|_| AppError::validation("price must be a number"))?
        }
    };
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("price must be a non-negative number"));
    }
    Ok(price)
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
