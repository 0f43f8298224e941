//! Product view filter.
//!
//! A product is visible when it satisfies every dimension whose selection is
//! non-empty. Inside one dimension the selected labels are alternatives.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// Fixed price bands. Bounds follow the comparisons below exactly: 1000
/// falls in `From1000To5000`, while 5000, 10000 and 20000 each close the band
/// below them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum PriceRange {
    #[serde(rename = "under-1000")]
    Under1000,
    #[serde(rename = "1000-5000")]
    From1000To5000,
    #[serde(rename = "5000-10000")]
    From5000To10000,
    #[serde(rename = "10000-20000")]
    From10000To20000,
    #[serde(rename = "over-20000")]
    Over20000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::Under1000,
        PriceRange::From1000To5000,
        PriceRange::From5000To10000,
        PriceRange::From10000To20000,
        PriceRange::Over20000,
    ];

    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceRange::Under1000 => price < 1000.0,
            PriceRange::From1000To5000 => (1000.0..=5000.0).contains(&price),
            PriceRange::From5000To10000 => price > 5000.0 && price <= 10000.0,
            PriceRange::From10000To20000 => price > 10000.0 && price <= 20000.0,
            PriceRange::Over20000 => price > 20000.0,
        }
    }

    /// Checkbox label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Under1000 => "Under ₹1,000",
            PriceRange::From1000To5000 => "₹1,000 - ₹5,000",
            PriceRange::From5000To10000 => "₹5,000 - ₹10,000",
            PriceRange::From10000To20000 => "₹10,000 - ₹20,000",
            PriceRange::Over20000 => "Over ₹20,000",
        }
    }

    /// Query-string form.
    pub fn slug(self) -> &'static str {
        match self {
            PriceRange::Under1000 => "under-1000",
            PriceRange::From1000To5000 => "1000-5000",
            PriceRange::From5000To10000 => "5000-10000",
            PriceRange::From10000To20000 => "10000-20000",
            PriceRange::Over20000 => "over-20000",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown price range: {0}")]
pub struct UnknownPriceRange(pub String);

impl FromStr for PriceRange {
    type Err = UnknownPriceRange;

    /// Accepts either the display label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceRange::ALL
            .into_iter()
            .find(|range| range.label() == s || range.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPriceRange(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Categories,
    Brands,
    PriceRanges,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub price_ranges: BTreeSet<PriceRange>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_brands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_price_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = PriceRange>,
    {
        self.price_ranges.extend(ranges);
        self
    }

    /// Checkbox semantics: `checked` adds the label, unchecking removes it.
    pub fn toggle(
        &mut self,
        dimension: Dimension,
        label: &str,
        checked: bool,
    ) -> Result<(), UnknownPriceRange> {
        match dimension {
            Dimension::Categories => toggle_in(&mut self.categories, label.to_owned(), checked),
            Dimension::Brands => toggle_in(&mut self.brands, label.to_owned(), checked),
            Dimension::PriceRanges => toggle_in(&mut self.price_ranges, label.parse()?, checked),
        }
        Ok(())
    }

    pub fn clear(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Categories => self.categories.clear(),
            Dimension::Brands => self.brands.clear(),
            Dimension::PriceRanges => self.price_ranges.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.brands.is_empty() && self.price_ranges.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.brands.is_empty() || self.brands.contains(&product.brand_name))
            && (self.price_ranges.is_empty()
                || self.price_ranges.iter().any(|range| range.contains(product.price)))
    }

    /// Full rescan; keeps the input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T, checked: bool) {
    if checked {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}
