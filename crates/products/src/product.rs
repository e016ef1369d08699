use serde::{Deserialize, Serialize};

use shopflow_core::{DomainError, DomainResult, ProductId, ValueObject};

/// A sellable product: name and unit price.
///
/// Immutable once built. Orders share products through `Arc<Product>`, so the
/// same instance can back items in many orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Build a product with a fresh id.
    ///
    /// Rejects empty names and prices that are negative, NaN or infinite.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, price)
    }

    pub fn with_id(id: ProductId, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if price < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }

        Ok(Self { id, name, price })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ValueObject for Product {}

/// Wire shape of a product; converted through [`Product::with_id`] so
/// deserialized products obey the same rules as constructed ones.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::with_id(record.id, record.name, record.price)
    }
}
