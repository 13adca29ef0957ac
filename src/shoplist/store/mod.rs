//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the library touches products.
//! Commands are generic over it, so the business logic never depends on where the
//! collection lives.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an ordered `Vec`, alive for the lifetime of the process.
//!
//! ## Contract
//!
//! - Products are returned in insertion order.
//! - Ids are unique: appending an existing id fails with `DuplicateId`.
//! - Toggling or removing an unknown id is not an error; it returns `None`.

use crate::error::Result;
use crate::model::{Product, ProductId};

pub mod memory;

pub trait DataStore {
    /// Add a product at the end of the collection
    fn append(&mut self, product: Product) -> Result<()>;

    /// Flip `is_bought`; returns the updated product, if any
    fn toggle_bought(&mut self, id: &ProductId) -> Result<Option<Product>>;

    /// Remove a product; returns it, if it existed
    fn remove(&mut self, id: &ProductId) -> Result<Option<Product>>;

    /// All products in insertion order
    fn list(&self) -> Result<Vec<Product>>;
}
