//! Per-line fulfillment status vocabulary.

use serde::{Deserialize, Serialize};

use skumap_core::WarehouseId;

/// What happened to one sales line.
///
/// `Display` renders the exact strings written into the processed file's
/// `Inventory_Status` column, so downstream spreadsheets keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    /// The SKU failed format validation or has no mapping.
    InvalidSku,
    /// Quantity was missing, unparseable, or not positive.
    InvalidQuantity,
    /// Fulfilled entirely from one warehouse.
    Fulfilled { warehouse: WarehouseId },
    /// Fulfilled by draining several warehouses.
    SplitAcross { warehouses: Vec<WarehouseId> },
    /// Total stock fell short; nothing was subtracted.
    InsufficientStock { requested: i64, available: i64 },
    /// Combo sets subtracted component-by-component.
    ComboFulfilled { sets: i64 },
    /// At least one combo component fell short; nothing was subtracted.
    InsufficientComboParts,
}

impl FulfillmentStatus {
    /// True when the line consumed stock.
    pub fn consumed_stock(&self) -> bool {
        matches!(
            self,
            Self::Fulfilled { .. } | Self::SplitAcross { .. } | Self::ComboFulfilled { .. }
        )
    }
}

impl core::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSku => write!(f, "Invalid SKU"),
            Self::InvalidQuantity => write!(f, "Invalid Quantity"),
            Self::Fulfilled { warehouse } => write!(f, "Processed ({warehouse})"),
            Self::SplitAcross { warehouses } => {
                let names = warehouses
                    .iter()
                    .map(WarehouseId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Split across {names}")
            }
            Self::InsufficientStock {
                requested,
                available,
            } => write!(
                f,
                "Insufficient Stock (Need: {requested}, Have: {available})"
            ),
            Self::ComboFulfilled { sets } => write!(f, "Processed (Combo - {sets} sets)"),
            Self::InsufficientComboParts => write!(f, "Insufficient Combo Parts"),
        }
    }
}
