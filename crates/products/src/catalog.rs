//! In-memory product catalog keyed by product name.

use std::sync::Arc;

use shopflow_core::{DomainError, DomainResult};

use crate::product::Product;

/// Ordered set of products, looked up by name.
///
/// Products are handed out as `Arc<Product>` so orders can share them.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new product. Names are unique within a catalog.
    pub fn add(&mut self, name: impl Into<String>, price: f64) -> DomainResult<Arc<Product>> {
        let product = Product::new(name, price)?;
        if self.find(product.name()).is_some() {
            return Err(DomainError::validation(format!(
                "product '{}' is already in the catalog",
                product.name()
            )));
        }

        let product = Arc::new(product);
        tracing::debug!(
            product_id = %product.id(),
            name = product.name(),
            price = product.price(),
            "product added to catalog"
        );
        self.products.push(Arc::clone(&product));
        Ok(product)
    }

    pub fn get(&self, name: &str) -> DomainResult<Arc<Product>> {
        self.find(name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product '{name}'")))
    }

    /// Products in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.name() == name)
    }
}
