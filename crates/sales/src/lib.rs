//! `skumap-sales` — sales-line fulfillment over catalog + ledger.
//!
//! The `Reconciler` is the piece both front-ends of the original tool drove:
//! resolve a raw SKU, dispatch combo vs. direct, consume stock, and report a
//! per-line fulfillment status.

pub mod fulfillment;
pub mod reconciler;

pub use fulfillment::FulfillmentStatus;
pub use reconciler::{LineOutcome, Reconciler};
