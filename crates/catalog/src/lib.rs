//! `skumap-catalog` — master SKU→MSKU mapping and combo definitions.
//!
//! Owns the two lookup tables a reconciliation run needs and the total
//! `resolve` operation over them.

pub mod catalog;
pub mod combo;
pub mod master;

pub use catalog::{Catalog, SkuResolution};
pub use combo::ComboCatalog;
pub use master::MasterMapping;
