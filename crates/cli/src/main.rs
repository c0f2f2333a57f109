//! skumap CLI - SKU reconciliation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Full run: load files, process sales, write the annotated output
//! skumap process -m master.csv -i inventory.csv -s sales.csv -o processed.csv
//!
//! # With combo definitions and a named warehouse
//! skumap process -m master.csv -c combos.csv -i inventory.csv -s sales.csv \
//!     -o processed.csv -w East
//!
//! # Resolve raw SKUs against a mapping
//! skumap resolve -m master.csv AMZ-001 FLP_APL UNKNOWN-9
//!
//! # Inspect the ledger loaded from an inventory file
//! skumap inventory -i inventory.csv --json
//!
//! # Combo availability report
//! skumap combos -m master.csv -c combos.csv -i inventory.csv
//! ```

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "skumap")]
#[command(author, version, about = "SKU reconciliation tools")]
struct Cli {
    /// Emit logs as JSON instead of plain text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a sales file against mapping and inventory data
    Process(commands::process::ProcessArgs),
    /// Resolve raw SKUs against a master mapping
    Resolve(commands::resolve::ResolveArgs),
    /// Load an inventory file and print the ledger
    Inventory(commands::inventory::InventoryArgs),
    /// Report combo availability against loaded inventory
    Combos(commands::combos::CombosArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        skumap_observability::init_json();
    } else {
        skumap_observability::init();
    }

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Inventory(args) => commands::inventory::run(args),
        Commands::Combos(args) => commands::combos::run(args),
    }
}
