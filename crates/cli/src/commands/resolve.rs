//! `skumap resolve` — map raw SKUs from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use skumap_catalog::Catalog;
use skumap_ingest::{load_combos, load_master};

#[derive(Args)]
pub struct ResolveArgs {
    /// Master mapping file with SKU and MSKU columns
    #[arg(short, long)]
    master: PathBuf,

    /// Optional combo definitions file
    #[arg(short, long)]
    combos: Option<PathBuf>,

    /// Raw SKUs to resolve
    #[arg(required = true)]
    skus: Vec<String>,
}

pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let mut catalog = Catalog::new();
    load_master(&args.master, &mut catalog)
        .with_context(|| format!("loading master mapping from {}", args.master.display()))?;
    if let Some(combos) = &args.combos {
        load_combos(combos, &mut catalog)
            .with_context(|| format!("loading combo mappings from {}", combos.display()))?;
    }

    for raw in &args.skus {
        println!("{raw} -> {}", catalog.resolve(raw));
    }
    Ok(())
}
