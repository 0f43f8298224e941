use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Brand};

use super::require_text;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct BrandPayload {
    pub name: Option<String>,
}

impl BrandPayload {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
        }
    }

    pub fn validate(self) -> AppResult<String> {
        require_text("Brand name", self.name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BrandList {
    #[schema(value_type = Vec<Brand>)]
    pub items: Vec<Brand>,
}
