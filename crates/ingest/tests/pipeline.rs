//! End-to-end ingestion: load the four file shapes, process sales, write
//! and re-read the output.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use skumap_core::{Msku, WarehouseId};
use skumap_ingest::{
    annotate_sales, load_combos, load_inventory, load_master, process_sales, write_csv,
    IngestError, Table,
};
use skumap_sales::Reconciler;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn msku(raw: &str) -> Msku {
    Msku::parse(raw).unwrap()
}

const MASTER_CSV: &str = "\
sku,msku,Notes
AMZ-001,GOLDEN_APPLE,amazon listing
FLP_APL,GOLDEN_APPLE,flipkart listing
MUG-01,STEEL_MUG,
badsku,IGNORED,lowercase seller code
";

const INVENTORY_CSV: &str = "\
msku,Opening Stock,Location
GOLDEN_APPLE,10,aisle 4
STEEL_MUG,6,aisle 9
SPARE_PART,,unset count reads as zero
";

const COMBO_CSV: &str = "\
Combo Name,SKU1,SKU2,SKU3
gift set,GOLDEN_APPLE,STEEL_MUG,
solo row,GOLDEN_APPLE,,
";

const SALES_CSV: &str = "\
Order,Product_Id,Quantity
1001,AMZ-001,4
1002,FLP_APL,9
1003,AMZ-404,1
1004,lower case,1
1005,AMZ-001,oops
";

#[test]
fn full_pipeline_processes_sales_and_updates_stock() {
    let dir = TempDir::new().unwrap();
    let master = write_file(&dir, "master.csv", MASTER_CSV);
    let inventory = write_file(&dir, "inventory.csv", INVENTORY_CSV);
    let sales = write_file(&dir, "sales.csv", SALES_CSV);

    let mut reconciler = Reconciler::new();
    let report = load_master(&master, reconciler.catalog_mut()).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 1);

    let main = WarehouseId::main();
    let items = load_inventory(&inventory, reconciler.ledger_mut(), &main).unwrap();
    assert_eq!(items, 3);
    assert_eq!(reconciler.ledger().stock_at(&main, &msku("SPARE_PART")), 0);

    let sales_table = Table::from_path(&sales).unwrap();
    let processed = process_sales(&sales_table, &mut reconciler).unwrap();

    let headers = processed.headers();
    assert_eq!(headers[headers.len() - 2], "MSKU");
    assert_eq!(headers[headers.len() - 1], "Inventory_Status");

    let msku_col = headers.len() - 2;
    let status_col = headers.len() - 1;

    // 4 of 10 golden apples from Main.
    assert_eq!(processed.cell(0, msku_col), "GOLDEN_APPLE");
    assert_eq!(processed.cell(0, status_col), "Processed (Main)");
    // The remaining 6 cannot cover 9.
    assert_eq!(
        processed.cell(1, status_col),
        "Insufficient Stock (Need: 9, Have: 6)"
    );
    // Unknown and malformed SKUs.
    assert_eq!(processed.cell(2, msku_col), "UNMAPPED");
    assert_eq!(processed.cell(2, status_col), "Invalid SKU");
    assert_eq!(processed.cell(3, msku_col), "INVALID_FORMAT");
    assert_eq!(processed.cell(3, status_col), "Invalid SKU");
    // Unreadable quantity poisons only its own line.
    assert_eq!(processed.cell(4, status_col), "Invalid Quantity");

    assert_eq!(reconciler.ledger().total_stock(&msku("GOLDEN_APPLE")), 6);

    // Round-trip through the CSV writer.
    let out = dir.path().join("processed.csv");
    write_csv(&processed, &out).unwrap();
    let reread = Table::from_path(&out).unwrap();
    assert_eq!(reread.headers(), processed.headers());
    assert_eq!(reread.row_count(), processed.row_count());
    assert_eq!(reread.cell(1, status_col), "Insufficient Stock (Need: 9, Have: 6)");
}

#[test]
fn combo_rows_define_combos_and_fulfil_as_sets() {
    let dir = TempDir::new().unwrap();
    let master = write_file(&dir, "master.csv", MASTER_CSV);
    let inventory = write_file(&dir, "inventory.csv", INVENTORY_CSV);
    let combos = write_file(&dir, "combos.csv", COMBO_CSV);

    let mut reconciler = Reconciler::new();
    load_master(&master, reconciler.catalog_mut()).unwrap();
    // Only the two-member row defines a combo.
    let total = load_combos(&combos, reconciler.catalog_mut()).unwrap();
    assert_eq!(total, 1);

    let main = WarehouseId::main();
    load_inventory(&inventory, reconciler.ledger_mut(), &main).unwrap();

    let sales = write_file(
        &dir,
        "sales.csv",
        "SKU,Quantity\nGOLDEN_APPLE,2\nGOLDEN_APPLE,99\n",
    );
    let sales_table = Table::from_path(&sales).unwrap();
    let processed = process_sales(&sales_table, &mut reconciler).unwrap();

    let status_col = processed.headers().len() - 1;
    let msku_col = processed.headers().len() - 2;
    assert_eq!(
        processed.cell(0, msku_col),
        "COMBO_GOLDEN_APPLE-STEEL_MUG"
    );
    assert_eq!(processed.cell(0, status_col), "Processed (Combo - 2 sets)");
    assert_eq!(processed.cell(1, status_col), "Insufficient Combo Parts");

    assert_eq!(reconciler.ledger().total_stock(&msku("GOLDEN_APPLE")), 8);
    assert_eq!(reconciler.ledger().total_stock(&msku("STEEL_MUG")), 4);
}

#[test]
fn annotate_only_leaves_inventory_untouched() {
    let dir = TempDir::new().unwrap();
    let master = write_file(&dir, "master.csv", MASTER_CSV);

    let mut reconciler = Reconciler::new();
    load_master(&master, reconciler.catalog_mut()).unwrap();

    let sales = write_file(&dir, "sales.csv", "ASIN\nAMZ-001\nAMZ-404\n");
    let table = Table::from_path(&sales).unwrap();
    let annotated = annotate_sales(&table, reconciler.catalog()).unwrap();

    assert_eq!(annotated.headers().last().map(String::as_str), Some("MSKU"));
    assert_eq!(annotated.cell(0, 1), "GOLDEN_APPLE");
    assert_eq!(annotated.cell(1, 1), "UNMAPPED");
    assert!(reconciler.ledger().is_empty());
}

#[test]
fn loaders_report_missing_columns_with_available_headers() {
    let dir = TempDir::new().unwrap();
    let bad_master = write_file(&dir, "master.csv", "code,target\nA,B\n");

    let mut reconciler = Reconciler::new();
    let err = load_master(&bad_master, reconciler.catalog_mut()).unwrap_err();
    match err {
        IngestError::MissingColumns { missing, available } => {
            assert_eq!(missing, "SKU, MSKU");
            assert_eq!(available, "code,target".replace(',', ", "));
        }
        other => panic!("Expected MissingColumns error, got {other:?}"),
    }

    let bad_inventory = write_file(&dir, "inventory.csv", "msku,Stock\nA,1\n");
    let err = load_inventory(
        &bad_inventory,
        reconciler.ledger_mut(),
        &WarehouseId::main(),
    )
    .unwrap_err();
    match err {
        IngestError::MissingColumns { missing, .. } => {
            assert_eq!(missing, "Opening Stock");
        }
        other => panic!("Expected MissingColumns error, got {other:?}"),
    }
}

#[test]
fn unreadable_opening_stock_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let inventory = write_file(
        &dir,
        "inventory.csv",
        "msku,Opening Stock\nGOLDEN_APPLE,many\n",
    );

    let mut ledger = skumap_inventory::InventoryLedger::new();
    let err = load_inventory(&inventory, &mut ledger, &WarehouseId::main()).unwrap_err();
    match err {
        IngestError::InvalidQuantity { row: 0, value } => assert_eq!(value, "many"),
        other => panic!("Expected InvalidQuantity error, got {other:?}"),
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "master.txt", "SKU,MSKU\n");
    match Table::from_path(&path).unwrap_err() {
        IngestError::UnsupportedExtension { .. } => {}
        other => panic!("Expected UnsupportedExtension error, got {other:?}"),
    }
}
