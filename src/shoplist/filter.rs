//! Filter engine.
//!
//! [`FilterCriteria`] holds the four independent filter inputs and decides, product by
//! product, what is visible. Filtering never reorders: the visible list keeps store order.
//!
//! Shop and category wildcards are an explicit [`Choice::Any`] rather than a magic label,
//! so a shop can never be confused with "all shops".

use crate::index::DisplayProduct;
use crate::model::Product;
use std::fmt;
use std::str::FromStr;

/// Keyword that selects the wildcard when typed in place of a label.
pub const ANY_KEYWORD: &str = "any";

/// Either every value, or exactly one label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    Any,
    Only(String),
}

impl Choice {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(expected) => expected.is_empty() || expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => write!(f, "{}", ANY_KEYWORD),
            Choice::Only(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    pub fn matches(self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Bought => write!(f, "bought"),
            StatusFilter::NotBought => write!(f, "not-bought"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "bought" => Ok(StatusFilter::Bought),
            "not-bought" | "not_bought" | "notbought" => Ok(StatusFilter::NotBought),
            other => Err(format!(
                "Invalid status: {} (expected all, bought or not-bought)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the product name.
    pub name: String,
    pub shop: Choice,
    pub category: Choice,
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// A product passes only when every criterion holds.
    pub fn matches(&self, product: &Product) -> bool {
        product
            .name
            .to_lowercase()
            .contains(&self.name.to_lowercase())
            && self.shop.matches(&product.shop)
            && self.category.matches(&product.category)
            && self.status.matches(product.is_bought)
    }

    pub fn apply(&self, products: Vec<DisplayProduct>) -> Vec<DisplayProduct> {
        products
            .into_iter()
            .filter(|dp| self.matches(&dp.product))
            .collect()
    }

    /// Clears name, shop and category. The status filter is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.shop = Choice::Any;
        self.category = Choice::Any;
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}
