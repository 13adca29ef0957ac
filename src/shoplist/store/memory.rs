use super::DataStore;
use crate::error::{Result, ShoplistError};
use crate::model::{Product, ProductId};

/// Ordered in-memory product collection.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn append(&mut self, product: Product) -> Result<()> {
        if self.position(&product.id).is_some() {
            return Err(ShoplistError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    fn toggle_bought(&mut self, id: &ProductId) -> Result<Option<Product>> {
        Ok(self.position(id).map(|i| {
            let product = &mut self.products[i];
            product.is_bought = !product.is_bought;
            product.clone()
        }))
    }

    fn remove(&mut self, id: &ProductId) -> Result<Option<Product>> {
        // Vec::remove shifts, keeping the relative order of the rest
        Ok(self.position(id).map(|i| self.products.remove(i)))
    }

    fn list(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let product = Product::new(
                    format!("Product {}", i + 1),
                    "Lidl".to_string(),
                    "Fruit".to_string(),
                );
                self.store.append(product).unwrap();
            }
            self
        }

        pub fn with_product(mut self, name: &str, shop: &str, category: &str) -> Self {
            let product = Product::new(name.to_string(), shop.to_string(), category.to_string());
            self.store.append(product).unwrap();
            self
        }

        pub fn with_bought_product(mut self, name: &str, shop: &str, category: &str) -> Self {
            let mut product =
                Product::new(name.to_string(), shop.to_string(), category.to_string());
            product.is_bought = true;
            self.store.append(product).unwrap();
            self
        }

        pub fn ids(&self) -> Vec<ProductId> {
            self.store.list().unwrap().iter().map(|p| p.id).collect()
        }
    }
}
