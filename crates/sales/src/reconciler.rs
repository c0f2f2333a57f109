//! The reconciler: resolution plus stock consumption for sales lines.

use serde::{Deserialize, Serialize};

use skumap_catalog::{Catalog, SkuResolution};
use skumap_core::{ComboId, DomainError, DomainResult, Sku, WarehouseId};
use skumap_inventory::{Allocation, ComboAvailability, InventoryLedger};

use crate::fulfillment::FulfillmentStatus;

/// Resolution and status for one processed sales line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOutcome {
    pub resolution: SkuResolution,
    pub status: FulfillmentStatus,
}

/// Catalog + ledger, with the per-line dispatch both front-ends used.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    catalog: Catalog,
    ledger: InventoryLedger,
    default_warehouse: WarehouseId,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combo components are subtracted from this warehouse.
    pub fn with_default_warehouse(mut self, warehouse: WarehouseId) -> Self {
        self.default_warehouse = warehouse;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut InventoryLedger {
        &mut self.ledger
    }

    pub fn default_warehouse(&self) -> &WarehouseId {
        &self.default_warehouse
    }

    pub fn resolve(&self, raw: &str) -> SkuResolution {
        self.catalog.resolve(raw)
    }

    pub fn add_combo(&mut self, id: ComboId, members: &[Sku]) -> DomainResult<()> {
        self.catalog.add_combo(id, members)
    }

    /// Availability report for a defined combo; `None` for unknown ids.
    pub fn combo_availability(&self, id: &ComboId) -> Option<ComboAvailability> {
        self.catalog
            .combo_components(id)
            .map(|components| self.ledger.combo_availability(components))
    }

    /// Process one sales line: resolve, dispatch, consume stock.
    ///
    /// `quantity` is `None` when the sales file carried an unreadable value;
    /// a missing column should be passed as `Some(1)` by the caller.
    pub fn process_line(&mut self, raw_sku: &str, quantity: Option<i64>) -> LineOutcome {
        let resolution = self.catalog.resolve(raw_sku);
        let status = match quantity {
            None => FulfillmentStatus::InvalidQuantity,
            Some(quantity) if quantity < 1 => FulfillmentStatus::InvalidQuantity,
            Some(quantity) => self.fulfill(&resolution, quantity),
        };
        LineOutcome { resolution, status }
    }

    fn fulfill(&mut self, resolution: &SkuResolution, quantity: i64) -> FulfillmentStatus {
        match resolution {
            SkuResolution::InvalidFormat | SkuResolution::Unmapped => {
                FulfillmentStatus::InvalidSku
            }
            SkuResolution::ComboMember(id) => self.fulfill_combo(id, quantity),
            SkuResolution::Mapped(msku) => {
                match self.ledger.allocate(msku, quantity) {
                    Ok(Allocation::Single { warehouse }) => {
                        FulfillmentStatus::Fulfilled { warehouse }
                    }
                    Ok(Allocation::Split { legs }) => FulfillmentStatus::SplitAcross {
                        warehouses: legs.into_iter().map(|leg| leg.warehouse).collect(),
                    },
                    Ok(Allocation::Insufficient {
                        requested,
                        available,
                    }) => FulfillmentStatus::InsufficientStock {
                        requested,
                        available,
                    },
                    // The only allocate error is quantity validation, which
                    // the caller guard already excluded.
                    Err(_) => FulfillmentStatus::InvalidQuantity,
                }
            }
        }
    }

    fn fulfill_combo(&mut self, id: &ComboId, sets: i64) -> FulfillmentStatus {
        let Some(components) = self.catalog.combo_components(id) else {
            return FulfillmentStatus::InvalidSku;
        };
        let components = components.to_vec();
        match self
            .ledger
            .subtract_combo(&components, sets, &self.default_warehouse)
        {
            Ok(()) => FulfillmentStatus::ComboFulfilled { sets },
            Err(DomainError::InsufficientStock { .. }) => {
                FulfillmentStatus::InsufficientComboParts
            }
            Err(_) => FulfillmentStatus::InvalidQuantity,
        }
    }
}
