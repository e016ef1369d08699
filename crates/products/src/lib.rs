//! Products domain module.
//!
//! Immutable product values and the in-memory catalog orders draw them from.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::Product;
