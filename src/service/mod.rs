//! Catalog operations over a `CatalogStore`.

pub mod catalog;
pub use catalog::*;
