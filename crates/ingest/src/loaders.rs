//! Loaders for the master mapping, combo, and inventory file shapes.

use std::path::Path;

use tracing::{info, warn};

use skumap_catalog::Catalog;
use skumap_core::{ComboId, Msku, Sku, WarehouseId};
use skumap_inventory::InventoryLedger;

use crate::error::{IngestError, IngestResult};
use crate::table::Table;

/// Header candidates accepted as the sales file's SKU column, in priority
/// order. Matching ignores case, underscores, and spaces.
pub const SALES_SKU_COLUMNS: [&str; 6] = [
    "SKU",
    "Product_Id",
    "ASIN",
    "ProductId",
    "Product ID",
    "Item ID",
];

/// Outcome of a master-mapping load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterLoadReport {
    /// Rows inserted into the mapping table.
    pub loaded: usize,
    /// Rows skipped for blank cells or malformed SKUs.
    pub skipped: usize,
}

/// Load a master mapping file: requires `SKU` and `MSKU` columns
/// (case-insensitive). Later files win on conflicting SKUs.
pub fn load_master(path: &Path, catalog: &mut Catalog) -> IngestResult<MasterLoadReport> {
    let table = Table::from_path(path)?;

    let sku_col = table.column_index_ci("SKU");
    let msku_col = table.column_index_ci("MSKU");
    let (Some(sku_col), Some(msku_col)) = (sku_col, msku_col) else {
        let mut missing = Vec::new();
        if sku_col.is_none() {
            missing.push("SKU");
        }
        if msku_col.is_none() {
            missing.push("MSKU");
        }
        return Err(IngestError::MissingColumns {
            missing: missing.join(", "),
            available: table.header_list(),
        });
    };

    let mut report = MasterLoadReport {
        loaded: 0,
        skipped: 0,
    };
    for row in 0..table.row_count() {
        let raw_sku = table.cell(row, sku_col);
        let raw_msku = table.cell(row, msku_col);
        if raw_sku.is_empty() || raw_msku.is_empty() {
            report.skipped += 1;
            continue;
        }
        let Ok(sku) = Sku::parse(raw_sku) else {
            warn!(row, sku = raw_sku, "skipping mapping row with malformed SKU");
            report.skipped += 1;
            continue;
        };
        let Ok(msku) = Msku::parse(raw_msku) else {
            report.skipped += 1;
            continue;
        };
        catalog.master_mut().insert(sku, msku);
        report.loaded += 1;
    }

    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "loaded master mapping"
    );
    Ok(report)
}

/// Load a combo file: every column whose name contains `SKU` contributes a
/// member; a row defines a combo only when at least two members remain.
/// Returns the total number of combos defined so far.
pub fn load_combos(path: &Path, catalog: &mut Catalog) -> IngestResult<usize> {
    let table = Table::from_path(path)?;

    let sku_cols = table.columns_containing_ci("SKU");
    if sku_cols.is_empty() {
        return Err(IngestError::MissingColumns {
            missing: "SKU1, SKU2, …".to_string(),
            available: table.header_list(),
        });
    }

    for row in 0..table.row_count() {
        let mut members = Vec::new();
        for &col in &sku_cols {
            let raw = table.cell(row, col);
            if raw.is_empty() {
                continue;
            }
            match Sku::parse(raw) {
                Ok(sku) => members.push(sku),
                Err(_) => {
                    warn!(row, sku = raw, "skipping malformed combo member");
                }
            }
        }
        if members.len() > 1 {
            let id = ComboId::from_members(&members);
            catalog.add_combo(id, &members)?;
        }
    }

    let total = catalog.combos().len();
    info!(path = %path.display(), combos = total, "loaded combo mappings");
    Ok(total)
}

/// Load an inventory file into one warehouse: requires `msku` and
/// `Opening Stock` columns (exact names). Blank quantities read as 0.
/// Returns the number of MSKUs now tracked in that warehouse.
pub fn load_inventory(
    path: &Path,
    ledger: &mut InventoryLedger,
    warehouse: &WarehouseId,
) -> IngestResult<usize> {
    let table = Table::from_path(path)?;

    let msku_col = table.column_index("msku");
    let stock_col = table.column_index("Opening Stock");
    let (Some(msku_col), Some(stock_col)) = (msku_col, stock_col) else {
        let mut missing = Vec::new();
        if msku_col.is_none() {
            missing.push("msku");
        }
        if stock_col.is_none() {
            missing.push("Opening Stock");
        }
        return Err(IngestError::MissingColumns {
            missing: missing.join(", "),
            available: table.header_list(),
        });
    };

    ledger.ensure_warehouse(warehouse.clone());
    for row in 0..table.row_count() {
        let raw_msku = table.cell(row, msku_col);
        if raw_msku.is_empty() {
            continue;
        }
        let Ok(msku) = Msku::parse(raw_msku) else {
            continue;
        };

        let raw_qty = table.cell(row, stock_col);
        let quantity = if raw_qty.is_empty() {
            0
        } else {
            raw_qty
                .parse::<i64>()
                .map_err(|_| IngestError::InvalidQuantity {
                    row,
                    value: raw_qty.to_string(),
                })?
        };
        ledger.set_opening_stock(warehouse, msku, quantity);
    }

    let items = ledger.items_in(warehouse);
    info!(
        path = %path.display(),
        warehouse = %warehouse,
        items,
        "loaded inventory"
    );
    Ok(items)
}

/// Locate the sales file's SKU column among the accepted header variants.
///
/// Candidates are tried in priority order; header comparison ignores case,
/// underscores, and spaces.
pub fn find_sales_sku_column(table: &Table) -> Option<usize> {
    fn normalize(name: &str) -> String {
        name.chars()
            .filter(|c| *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_uppercase()
    }

    for candidate in SALES_SKU_COLUMNS {
        let target = normalize(candidate);
        if let Some(index) = table
            .headers()
            .iter()
            .position(|h| normalize(h) == target)
        {
            return Some(index);
        }
    }
    None
}
