use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ProductSelector;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[ProductSelector]) -> Result<CmdResult> {
    let (ids, warnings) = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        if let Some(product) = store.toggle_bought(&id)? {
            debug!(id = %product.id, is_bought = product.is_bought, "product toggled");
            let state = if product.is_bought {
                "bought"
            } else {
                "not bought"
            };
            result.add_message(CmdMessage::success(format!(
                "{} marked as {}",
                product.name, state
            )));
            result.affected_products.push(product);
        }
    }

    result.messages.extend(warnings);
    Ok(result)
}
