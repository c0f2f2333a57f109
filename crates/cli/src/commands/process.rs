//! `skumap process` — the full pipeline the original front-ends drove.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use skumap_core::WarehouseId;
use skumap_ingest::{load_combos, load_inventory, load_master, process_sales, write_csv, Table};
use skumap_sales::Reconciler;
use skumap_session::{ProcessingSession, UploadKind, UploadStatus};

#[derive(Args)]
pub struct ProcessArgs {
    /// Master mapping file (CSV or XLSX) with SKU and MSKU columns
    #[arg(short, long)]
    master: PathBuf,

    /// Combo definitions file with SKU1, SKU2, … columns
    #[arg(short, long)]
    combos: Option<PathBuf>,

    /// Inventory file with msku and Opening Stock columns
    #[arg(short, long)]
    inventory: PathBuf,

    /// Sales file to process
    #[arg(short, long)]
    sales: PathBuf,

    /// Output CSV path for the processed sales data
    #[arg(short, long)]
    output: PathBuf,

    /// Warehouse the inventory file loads into
    #[arg(short, long, default_value = "Main")]
    warehouse: String,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run a load step under the upload log: record, attempt, mark.
fn logged_step<T>(
    session: &mut ProcessingSession,
    path: &Path,
    kind: UploadKind,
    step: impl FnOnce(&mut ProcessingSession) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let upload = session.uploads_mut().record(file_label(path), kind);
    match step(session) {
        Ok(value) => {
            let status = if kind == UploadKind::Sales {
                UploadStatus::Ready
            } else {
                UploadStatus::Processed
            };
            session.uploads_mut().mark(upload, status);
            Ok(value)
        }
        Err(error) => {
            session.uploads_mut().mark(
                upload,
                UploadStatus::Failed {
                    error: error.to_string(),
                },
            );
            Err(error)
        }
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let warehouse = WarehouseId::parse(args.warehouse.clone()).context("invalid warehouse name")?;
    let mut reconciler = Reconciler::new().with_default_warehouse(warehouse.clone());
    let mut session = ProcessingSession::new();

    let result = run_pipeline(&args, &warehouse, &mut reconciler, &mut session);
    print_upload_log(&session);
    result
}

fn run_pipeline(
    args: &ProcessArgs,
    warehouse: &WarehouseId,
    reconciler: &mut Reconciler,
    session: &mut ProcessingSession,
) -> anyhow::Result<()> {
    logged_step(session, &args.master, UploadKind::Master, |session| {
        let report = load_master(&args.master, reconciler.catalog_mut())
            .with_context(|| format!("loading master mapping from {}", args.master.display()))?;
        session.mark_master_loaded();
        Ok(report)
    })?;

    if let Some(combos) = &args.combos {
        logged_step(session, combos, UploadKind::Combo, |session| {
            let total = load_combos(combos, reconciler.catalog_mut())
                .with_context(|| format!("loading combo mappings from {}", combos.display()))?;
            session.mark_combos_loaded();
            Ok(total)
        })?;
    }

    logged_step(session, &args.inventory, UploadKind::Inventory, |session| {
        let items = load_inventory(&args.inventory, reconciler.ledger_mut(), warehouse)
            .with_context(|| format!("loading inventory from {}", args.inventory.display()))?;
        session.mark_inventory_loaded();
        Ok(items)
    })?;

    logged_step(session, &args.sales, UploadKind::Sales, |session| {
        session.stage_sales_file(&args.sales);
        Ok(())
    })?;

    session.ensure_ready()?;

    let sales_table = Table::from_path(&args.sales)
        .with_context(|| format!("reading sales data from {}", args.sales.display()))?;

    let processed = logged_step(session, &args.output, UploadKind::Processed, |_| {
        let processed = process_sales(&sales_table, reconciler)?;
        write_csv(&processed, &args.output)
            .with_context(|| format!("writing processed output to {}", args.output.display()))?;
        Ok(processed)
    })?;

    info!(
        output = %args.output.display(),
        records = processed.row_count(),
        "processing complete"
    );
    Ok(())
}

fn print_upload_log(session: &ProcessingSession) {
    if session.uploads().is_empty() {
        return;
    }
    println!("Uploads:");
    for record in session.uploads().newest_first() {
        println!(
            "  {:<30} [{:>9}] {}",
            record.filename,
            record.kind.label(),
            record.status
        );
    }
}
