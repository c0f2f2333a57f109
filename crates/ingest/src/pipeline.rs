//! Sales processing: annotate rows with MSKU and consume stock.

use std::path::Path;

use tracing::info;

use skumap_catalog::Catalog;
use skumap_sales::Reconciler;

use crate::error::{IngestError, IngestResult};
use crate::loaders::{find_sales_sku_column, SALES_SKU_COLUMNS};
use crate::table::Table;

const MSKU_COLUMN: &str = "MSKU";
const STATUS_COLUMN: &str = "Inventory_Status";
const QUANTITY_COLUMN: &str = "Quantity";

fn sku_column(table: &Table) -> IngestResult<usize> {
    find_sales_sku_column(table).ok_or_else(|| IngestError::MissingColumns {
        missing: SALES_SKU_COLUMNS.join(", "),
        available: table.header_list(),
    })
}

/// Append the `MSKU` column without touching inventory.
pub fn annotate_sales(table: &Table, catalog: &Catalog) -> IngestResult<Table> {
    let sku_col = sku_column(table)?;

    let mut output = table.clone();
    let resolutions = (0..table.row_count())
        .map(|row| catalog.resolve(table.cell(row, sku_col)).to_string())
        .collect();
    output.push_column(MSKU_COLUMN, resolutions);
    Ok(output)
}

/// Append `MSKU` and `Inventory_Status` columns, consuming stock line by
/// line. A missing `Quantity` column defaults every line to 1; an unreadable
/// cell marks just that line invalid.
pub fn process_sales(table: &Table, reconciler: &mut Reconciler) -> IngestResult<Table> {
    let sku_col = sku_column(table)?;
    let qty_col = table.column_index(QUANTITY_COLUMN);

    let mut resolutions = Vec::with_capacity(table.row_count());
    let mut statuses = Vec::with_capacity(table.row_count());
    let mut consumed = 0usize;

    for row in 0..table.row_count() {
        let quantity = match qty_col {
            None => Some(1),
            Some(col) => table.cell(row, col).parse::<i64>().ok(),
        };
        let outcome = reconciler.process_line(table.cell(row, sku_col), quantity);
        if outcome.status.consumed_stock() {
            consumed += 1;
        }
        resolutions.push(outcome.resolution.to_string());
        statuses.push(outcome.status.to_string());
    }

    let mut output = table.clone();
    output.push_column(MSKU_COLUMN, resolutions);
    output.push_column(STATUS_COLUMN, statuses);

    info!(
        rows = table.row_count(),
        fulfilled = consumed,
        "processed sales records"
    );
    Ok(output)
}

/// Write a table as CSV.
pub fn write_csv(table: &Table, path: &Path) -> IngestResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| IngestError::Csv {
        path: path.display().to_string(),
        source,
    })?;

    let into_csv_err = |source| IngestError::Csv {
        path: path.display().to_string(),
        source,
    };

    writer.write_record(table.headers()).map_err(into_csv_err)?;
    for row in table.rows() {
        writer.write_record(row).map_err(into_csv_err)?;
    }
    writer
        .flush()
        .map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?;
    Ok(())
}
