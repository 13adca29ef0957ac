use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoplistError};
use crate::model::Draft;
use crate::store::DataStore;
use tracing::debug;

/// Submits the draft, with any `inline` fields taking precedence for this submission.
///
/// On rejection nothing changes: neither the store nor the draft. On success the new
/// product is appended and the draft is cleared.
pub fn run<S: DataStore>(store: &mut S, draft: &mut Draft, inline: &Draft) -> Result<CmdResult> {
    let candidate = draft.overlay(inline);

    let missing = candidate.missing_fields();
    if !missing.is_empty() {
        debug!(?missing, "add rejected");
        return Err(ShoplistError::MissingFields(missing));
    }

    let product = candidate.into_product();
    store.append(product.clone())?;
    *draft = Draft::default();
    debug!(id = %product.id, name = %product.name, "product added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} ({}, {})",
        product.name, product.shop, product.category
    )));
    Ok(result.with_affected_products(vec![product]))
}
