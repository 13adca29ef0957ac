//! # API Facade
//!
//! [`ShoplistApi`] is the application state container: it owns the product store, the draft
//! fields, the filter criteria and the catalog. Every user event maps to exactly one method
//! here, and every method either mutates that state or derives a view from it.
//!
//! ## Role and Responsibilities
//!
//! The API:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → `ProductSelector`, labels → catalog entries)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not render or print anything, and it holds no derived state: the visible list and
//! the completion flag are recomputed by [`ShoplistApi::view`] every time they are asked for.
//!
//! ## Generic Over DataStore
//!
//! `ShoplistApi<S: DataStore>` is generic over the storage backend, which keeps the
//! command logic independent of the `InMemoryStore` the binary uses.

use crate::commands;
use crate::config::ShoplistConfig;
use crate::error::{Result, ShoplistError};
use crate::filter::{Choice, FilterCriteria, StatusFilter, ANY_KEYWORD};
use crate::index::ProductSelector;
use crate::model::Draft;
use crate::store::DataStore;
use std::str::FromStr;
use tracing::debug;

pub struct ShoplistApi<S: DataStore> {
    store: S,
    config: ShoplistConfig,
    draft: Draft,
    criteria: FilterCriteria,
}

impl<S: DataStore> ShoplistApi<S> {
    pub fn new(store: S, config: ShoplistConfig) -> Self {
        Self {
            store,
            config,
            draft: Draft::default(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn config(&self) -> &ShoplistConfig {
        &self.config
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    // --- Draft ---

    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.name = name.trim().to_string();
    }

    /// `None` clears the selection.
    pub fn select_draft_shop(&mut self, shop: Option<&str>) -> Result<()> {
        self.draft.shop = self.lookup_shop(shop)?;
        Ok(())
    }

    /// `None` clears the selection.
    pub fn select_draft_category(&mut self, category: Option<&str>) -> Result<()> {
        self.draft.category = self.lookup_category(category)?;
        Ok(())
    }

    /// Submits the draft. Fields given here override the draft for this submission only.
    pub fn add_product(
        &mut self,
        name: Option<&str>,
        shop: Option<&str>,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let inline = Draft {
            name: name.map(|n| n.trim().to_string()).unwrap_or_default(),
            shop: self.lookup_shop(shop)?,
            category: self.lookup_category(category)?,
        };
        commands::add::run(&mut self.store, &mut self.draft, &inline)
    }

    // --- Products ---

    pub fn toggle_products<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::toggle::run(&mut self.store, &selectors)
    }

    pub fn delete_products<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    // --- Filters ---

    pub fn set_name_filter(&mut self, name: &str) {
        self.criteria.name = name.trim().to_string();
    }

    /// `None` or `"any"` selects every shop.
    pub fn set_shop_filter(&mut self, shop: Option<&str>) -> Result<()> {
        self.criteria.shop = match wildcard_or(shop) {
            Some(label) => Choice::Only(self.config.resolve_shop(label)?.to_string()),
            None => Choice::Any,
        };
        Ok(())
    }

    /// `None` or `"any"` selects every category.
    pub fn set_category_filter(&mut self, category: Option<&str>) -> Result<()> {
        self.criteria.category = match wildcard_or(category) {
            Some(label) => Choice::Only(self.config.resolve_category(label)?.to_string()),
            None => Choice::Any,
        };
        Ok(())
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
    }

    pub fn reset_filters(&mut self) -> commands::CmdResult {
        self.criteria.reset();
        debug!(status = %self.criteria.status, "filters reset");
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::info("Filters reset"));
        result
    }

    // --- Derived ---

    /// The visible rows plus the completion flag.
    pub fn view(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.criteria)
    }

    pub fn all_bought(&self) -> Result<bool> {
        Ok(commands::list::all_bought(&self.store.list()?))
    }

    fn lookup_shop(&self, shop: Option<&str>) -> Result<Option<String>> {
        blank_to_none(shop)
            .map(|s| self.config.resolve_shop(s).map(String::from))
            .transpose()
    }

    fn lookup_category(&self, category: Option<&str>) -> Result<Option<String>> {
        blank_to_none(category)
            .map(|c| self.config.resolve_category(c).map(String::from))
            .transpose()
    }
}

fn blank_to_none(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

fn wildcard_or(input: Option<&str>) -> Option<&str> {
    blank_to_none(input).filter(|s| !s.eq_ignore_ascii_case(ANY_KEYWORD))
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ProductSelector>> {
    inputs
        .iter()
        .map(|s| ProductSelector::from_str(s.as_ref()).map_err(ShoplistError::Api))
        .collect()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
