//! `skumap inventory` — load an inventory file and display the ledger.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use skumap_core::WarehouseId;
use skumap_ingest::load_inventory;
use skumap_inventory::InventoryLedger;

#[derive(Args)]
pub struct InventoryArgs {
    /// Inventory file with msku and Opening Stock columns
    #[arg(short, long)]
    inventory: PathBuf,

    /// Warehouse the file loads into
    #[arg(short, long, default_value = "Main")]
    warehouse: String,

    /// Print the ledger as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: InventoryArgs) -> anyhow::Result<()> {
    let warehouse = WarehouseId::parse(args.warehouse).context("invalid warehouse name")?;
    let mut ledger = InventoryLedger::new();
    let items = load_inventory(&args.inventory, &mut ledger, &warehouse)
        .with_context(|| format!("loading inventory from {}", args.inventory.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ledger)?);
        return Ok(());
    }

    println!("{:<12} {:<24} {:>10}", "Warehouse", "MSKU", "Quantity");
    for (wh, msku, quantity) in ledger.rows() {
        println!("{:<12} {:<24} {:>10}", wh.as_str(), msku.as_str(), quantity);
    }
    println!("{items} items in {warehouse}");
    Ok(())
}
