//! `skumap-ingest` — file ingestion and the end-to-end processing pipeline.
//!
//! Reads the four file shapes (master mapping, combo file, inventory file,
//! sales file) from CSV or XLSX, feeds them into the domain crates, and
//! writes the processed sales output.

pub mod error;
pub mod loaders;
pub mod pipeline;
pub mod table;

pub use error::{IngestError, IngestResult};
pub use loaders::{
    find_sales_sku_column, load_combos, load_inventory, load_master, MasterLoadReport,
    SALES_SKU_COLUMNS,
};
pub use pipeline::{annotate_sales, process_sales, write_csv};
pub use table::Table;
