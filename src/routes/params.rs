use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    filter::{FilterSelection, PriceRange},
};

/// View filter for `GET /api/products`. Each parameter is a comma-separated
/// list; an absent or empty parameter leaves that dimension unconstrained.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Category names, e.g. `Shoes,Bags`
    pub categories: Option<String>,
    /// Brand names, e.g. `Acme`
    pub brands: Option<String>,
    /// Price range slugs or labels, e.g. `under-1000,1000-5000`
    pub price_ranges: Option<String>,
}

impl ProductQuery {
    pub fn into_selection(self) -> AppResult<FilterSelection> {
        let price_ranges = split(self.price_ranges.as_deref())
            .map(|label| label.parse::<PriceRange>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| AppError::validation(err.to_string()))?;

        Ok(FilterSelection::new()
            .with_categories(split(self.categories.as_deref()))
            .with_brands(split(self.brands.as_deref()))
            .with_price_ranges(price_ranges))
    }
}

fn split(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}
