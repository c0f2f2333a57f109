//! `skumap-inventory` — per-warehouse inventory ledger and the
//! order-fulfillment allocation policy.

pub mod allocation;
pub mod ledger;

pub use allocation::{Allocation, AllocationLeg};
pub use ledger::{ComboAvailability, ComponentAvailability, InventoryLedger};
