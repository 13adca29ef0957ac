use crate::commands::CmdMessage;
use crate::error::Result;
use crate::index::{index_products, DisplayProduct, ProductSelector, Resolution};
use crate::model::ProductId;
use crate::store::DataStore;
use tracing::debug;

pub fn indexed_products<S: DataStore>(store: &S) -> Result<Vec<DisplayProduct>> {
    Ok(index_products(store.list()?))
}

/// Resolves every selector against the collection as it is *now*, before any mutation.
///
/// Selectors that match nothing become warnings; the caller skips them.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[ProductSelector],
) -> Result<(Vec<ProductId>, Vec<CmdMessage>)> {
    let indexed = indexed_products(store)?;
    let mut ids = Vec::with_capacity(selectors.len());
    let mut warnings = Vec::new();

    for selector in selectors {
        match selector.resolve(&indexed) {
            Resolution::Found(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            Resolution::NotFound => {
                debug!(%selector, "selector matched no product");
                warnings.push(CmdMessage::warning(format!(
                    "No product matches {}",
                    selector
                )));
            }
            Resolution::Ambiguous => {
                debug!(%selector, "selector matched several products");
                warnings.push(CmdMessage::warning(format!(
                    "{} matches more than one product, use a longer id",
                    selector
                )));
            }
        }
    }

    Ok((ids, warnings))
}
