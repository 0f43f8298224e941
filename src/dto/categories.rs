use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Category};

use super::require_text;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CategoryPayload {
    pub name: Option<String>,
}

impl CategoryPayload {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
        }
    }

    pub fn validate(self) -> AppResult<String> {
        require_text("Category name", self.name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}
