//! # Row Numbers
//!
//! Product ids are random and long. For everyday use the table shows each product's
//! **row number**: its 1-based position in insertion order. Row numbers are assigned over the
//! whole collection *before* filtering, so a product keeps its number no matter which filters
//! are active. `toggle 3` always means the same product as the `3.` row on screen.
//!
//! Deleting a product shifts the rows after it down by one, like any list would.
//!
//! Users can also pass an id, or any unambiguous prefix of one (the short id printed in
//! the table is such a prefix). All-digit input shorter than the short id is a row number;
//! from the short id's length on it is an id prefix, so a short id made only of digits still
//! selects its product.

use crate::model::{Product, ProductId, SHORT_ID_LEN};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProduct {
    pub index: usize,
    pub product: Product,
}

/// Assigns row numbers in store order.
pub fn index_products(products: Vec<Product>) -> Vec<DisplayProduct> {
    products
        .into_iter()
        .enumerate()
        .map(|(i, product)| DisplayProduct {
            index: i + 1,
            product,
        })
        .collect()
}

/// A user input naming a product, either by row number or by id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    Row(usize),
    Id(String),
}

impl ProductSelector {
    /// Finds the selected product. Ambiguous id prefixes select nothing.
    pub fn resolve(&self, indexed: &[DisplayProduct]) -> Resolution {
        match self {
            ProductSelector::Row(n) => indexed
                .iter()
                .find(|dp| dp.index == *n)
                .map(|dp| Resolution::Found(dp.product.id))
                .unwrap_or(Resolution::NotFound),
            ProductSelector::Id(prefix) => {
                let mut hits = indexed
                    .iter()
                    .filter(|dp| dp.product.id.matches_prefix(prefix));
                match (hits.next(), hits.next()) {
                    (Some(dp), None) => Resolution::Found(dp.product.id),
                    (Some(_), Some(_)) => Resolution::Ambiguous,
                    (None, _) => Resolution::NotFound,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(ProductId),
    NotFound,
    Ambiguous,
}

impl fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSelector::Row(n) => write!(f, "{}", n),
            ProductSelector::Id(prefix) => write!(f, "{}", prefix),
        }
    }
}

impl FromStr for ProductSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty product selector".to_string());
        }
        let all_digits = s.chars().all(|c| c.is_ascii_digit());
        if all_digits && s.len() < SHORT_ID_LEN {
            let n: usize = s
                .parse()
                .map_err(|_| format!("Invalid product selector: {}", s))?;
            if n == 0 {
                return Err("Row numbers start at 1".to_string());
            }
            return Ok(ProductSelector::Row(n));
        }
        if s.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Ok(ProductSelector::Id(s.to_lowercase()));
        }
        Err(format!("Invalid product selector: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(format!("Item {}", i), "Lidl".into(), "Fruit".into()))
            .collect()
    }

    #[test]
    fn rows_follow_insertion_order() {
        let indexed = index_products(products(3));
        let rows: Vec<_> = indexed.iter().map(|dp| dp.index).collect();
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(indexed[2].product.name, "Item 3");
    }

    #[test]
    fn parses_rows_and_ids() {
        assert_eq!("3".parse(), Ok(ProductSelector::Row(3)));
        assert_eq!(
            "AB12cd".parse(),
            Ok(ProductSelector::Id("ab12cd".to_string()))
        );
        assert!("0".parse::<ProductSelector>().is_err());
        assert!("milk".parse::<ProductSelector>().is_err());
        assert!("".parse::<ProductSelector>().is_err());
    }

    #[test]
    fn digit_only_short_id_selects_its_product() {
        let mut list = products(1);
        let id: ProductId = uuid::Uuid::parse_str("12345678-0000-4000-8000-000000000001")
            .unwrap()
            .into();
        list[0].id = id;
        let indexed = index_products(list);

        let selector: ProductSelector = id.short().parse().unwrap();
        assert_eq!(selector, ProductSelector::Id("12345678".to_string()));
        assert_eq!(selector.resolve(&indexed), Resolution::Found(id));

        assert_eq!("1234567".parse(), Ok(ProductSelector::Row(1234567)));
    }

    #[test]
    fn resolves_row_numbers() {
        let indexed = index_products(products(2));
        assert_eq!(
            ProductSelector::Row(2).resolve(&indexed),
            Resolution::Found(indexed[1].product.id)
        );
        assert_eq!(
            ProductSelector::Row(5).resolve(&indexed),
            Resolution::NotFound
        );
    }

    #[test]
    fn resolves_full_and_short_ids() {
        let indexed = index_products(products(2));
        let id = indexed[0].product.id;
        assert_eq!(
            ProductSelector::Id(id.to_string()).resolve(&indexed),
            Resolution::Found(id)
        );
        assert_eq!(
            ProductSelector::Id(id.short()).resolve(&indexed),
            Resolution::Found(id)
        );
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        let mut list = products(2);
        list[0].id = uuid::Uuid::parse_str("aaaaaaaa-0000-4000-8000-000000000001")
            .unwrap()
            .into();
        list[1].id = uuid::Uuid::parse_str("aaaaaaaa-0000-4000-8000-000000000002")
            .unwrap()
            .into();
        let indexed = index_products(list);
        assert_eq!(
            ProductSelector::Id("aaaa".into()).resolve(&indexed),
            Resolution::Ambiguous
        );
        assert_eq!(
            ProductSelector::Id("bbbb".into()).resolve(&indexed),
            Resolution::NotFound
        );
    }
}
