use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::Product;
use crate::store::DataStore;

use super::helpers::indexed_products;

/// Derives the visible rows and the completion flag from the current state.
pub fn run<S: DataStore>(store: &S, criteria: &FilterCriteria) -> Result<CmdResult> {
    let indexed = indexed_products(store)?;
    let completed = all_bought(indexed.iter().map(|dp| &dp.product));
    let visible = criteria.apply(indexed);

    Ok(CmdResult::default()
        .with_listed_products(visible)
        .with_all_bought(completed))
}

/// True when there is at least one product and every product is bought.
///
/// Looks at the whole collection, not the filtered view.
pub fn all_bought<'a, I>(products: I) -> bool
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut any = false;
    for product in products {
        if !product.is_bought {
            return false;
        }
        any = true;
    }
    any
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::toggle;
    use crate::filter::{Choice, StatusFilter};
    use crate::index::ProductSelector;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_is_not_completed() {
        let store = InMemoryStore::new();
        let result = run(&store, &FilterCriteria::default()).unwrap();
        assert!(result.listed_products.is_empty());
        assert!(!result.all_bought);
    }

    #[test]
    fn completed_tracks_every_toggle() {
        let mut fixture = StoreFixture::new()
            .with_bought_product("Milk", "Lidl", "Fruit")
            .with_bought_product("Bread", "Jumbo", "Bakery");
        assert!(run(&fixture.store, &FilterCriteria::default()).unwrap().all_bought);

        toggle::run(&mut fixture.store, &[ProductSelector::Row(2)]).unwrap();
        assert!(!run(&fixture.store, &FilterCriteria::default()).unwrap().all_bought);

        toggle::run(&mut fixture.store, &[ProductSelector::Row(2)]).unwrap();
        assert!(run(&fixture.store, &FilterCriteria::default()).unwrap().all_bought);
    }

    #[test]
    fn completion_ignores_filters() {
        let fixture = StoreFixture::new()
            .with_product("Milk", "Lidl", "Fruit")
            .with_bought_product("Bread", "Jumbo", "Bakery");
        let criteria = FilterCriteria {
            status: StatusFilter::Bought,
            ..Default::default()
        };
        let result = run(&fixture.store, &criteria).unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert!(!result.all_bought);
    }

    #[test]
    fn filtered_rows_keep_their_numbers() {
        let fixture = StoreFixture::new()
            .with_product("Milk", "Lidl", "Fruit")
            .with_product("Bread", "Jumbo", "Bakery")
            .with_product("Apples", "Lidl", "Fruit");
        let criteria = FilterCriteria {
            shop: Choice::Only("Lidl".into()),
            ..Default::default()
        };
        let result = run(&fixture.store, &criteria).unwrap();
        let rows: Vec<_> = result.listed_products.iter().map(|dp| dp.index).collect();
        assert_eq!(rows, vec![1, 3]);
    }
}
