//! `skumap combos` — combo availability against loaded inventory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use skumap_core::WarehouseId;
use skumap_ingest::{load_combos, load_inventory, load_master};
use skumap_sales::Reconciler;

#[derive(Args)]
pub struct CombosArgs {
    /// Master mapping file with SKU and MSKU columns
    #[arg(short, long)]
    master: PathBuf,

    /// Combo definitions file with SKU1, SKU2, … columns
    #[arg(short, long)]
    combos: PathBuf,

    /// Inventory file with msku and Opening Stock columns
    #[arg(short, long)]
    inventory: PathBuf,

    /// Warehouse the inventory file loads into
    #[arg(short, long, default_value = "Main")]
    warehouse: String,
}

pub fn run(args: CombosArgs) -> anyhow::Result<()> {
    let warehouse = WarehouseId::parse(args.warehouse).context("invalid warehouse name")?;
    let mut reconciler = Reconciler::new();

    load_master(&args.master, reconciler.catalog_mut())
        .with_context(|| format!("loading master mapping from {}", args.master.display()))?;
    load_combos(&args.combos, reconciler.catalog_mut())
        .with_context(|| format!("loading combo mappings from {}", args.combos.display()))?;
    load_inventory(&args.inventory, reconciler.ledger_mut(), &warehouse)
        .with_context(|| format!("loading inventory from {}", args.inventory.display()))?;

    let ids: Vec<_> = reconciler
        .catalog()
        .combos()
        .iter()
        .map(|(id, _)| id.clone())
        .collect();

    if ids.is_empty() {
        println!("No combos defined.");
        return Ok(());
    }

    for id in ids {
        let Some(availability) = reconciler.combo_availability(&id) else {
            continue;
        };
        println!("{id}: {} sets available", availability.available_sets);
        for component in &availability.components {
            let detail = component
                .per_warehouse
                .iter()
                .map(|(wh, qty)| format!("{wh}: {qty}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {} total {} ({detail})", component.msku, component.total);
        }
    }
    Ok(())
}
