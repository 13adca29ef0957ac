use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ProductSelector;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[ProductSelector]) -> Result<CmdResult> {
    // Resolve first: removing shifts the row numbers of later products
    let (ids, warnings) = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        if let Some(product) = store.remove(&id)? {
            debug!(id = %product.id, "product deleted");
            result.add_message(CmdMessage::success(format!("Deleted {}", product.name)));
            result.affected_products.push(product);
        }
    }

    result.messages.extend(warnings);
    Ok(result)
}
