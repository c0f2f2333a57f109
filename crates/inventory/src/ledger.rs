//! The inventory ledger: warehouse → MSKU → quantity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skumap_core::{DomainError, DomainResult, Msku, WarehouseId};

/// Per-warehouse stock counts.
///
/// Quantities are signed: raw adjustments may drive an entry negative, no
/// floor is enforced at the ledger level. Checked operations
/// (`subtract`, `subtract_combo`, `allocate`) refuse to start when cover is
/// missing, but never re-floor existing entries.
///
/// Both maps are ordered, so warehouse iteration (and therefore allocation)
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger {
    stock: BTreeMap<WarehouseId, BTreeMap<Msku, i64>>,
}

/// Availability detail for one combo component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentAvailability {
    pub msku: Msku,
    pub total: i64,
    pub per_warehouse: Vec<(WarehouseId, i64)>,
}

/// Availability of a combo: the component-wise minimum plus detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboAvailability {
    /// How many complete sets the current stock covers.
    pub available_sets: i64,
    pub components: Vec<ComponentAvailability>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a warehouse even before it holds stock.
    pub fn ensure_warehouse(&mut self, warehouse: WarehouseId) {
        self.stock.entry(warehouse).or_default();
    }

    /// Warehouses in lexicographic order.
    pub fn warehouses(&self) -> impl Iterator<Item = &WarehouseId> {
        self.stock.keys()
    }

    pub fn warehouse_count(&self) -> usize {
        self.stock.len()
    }

    /// Stock for an MSKU in one warehouse; 0 when either is unknown.
    pub fn stock_at(&self, warehouse: &WarehouseId, msku: &Msku) -> i64 {
        self.stock
            .get(warehouse)
            .and_then(|items| items.get(msku))
            .copied()
            .unwrap_or(0)
    }

    /// Stock for an MSKU summed across all warehouses.
    pub fn total_stock(&self, msku: &Msku) -> i64 {
        self.stock
            .values()
            .filter_map(|items| items.get(msku))
            .sum()
    }

    /// Loader entry point: set the opening count, last load wins.
    pub fn set_opening_stock(&mut self, warehouse: &WarehouseId, msku: Msku, quantity: i64) {
        self.stock
            .entry(warehouse.clone())
            .or_default()
            .insert(msku, quantity);
    }

    /// Unchecked adjustment. Creates missing entries; may go negative.
    pub fn adjust(&mut self, warehouse: &WarehouseId, msku: &Msku, delta: i64) {
        *self
            .stock
            .entry(warehouse.clone())
            .or_default()
            .entry(msku.clone())
            .or_insert(0) += delta;
    }

    /// Checked subtraction from one specific warehouse.
    pub fn subtract(
        &mut self,
        warehouse: &WarehouseId,
        msku: &Msku,
        quantity: i64,
    ) -> DomainResult<()> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        let available = self.stock_at(warehouse, msku);
        if available < quantity {
            return Err(DomainError::insufficient_stock(quantity, available));
        }
        self.adjust(warehouse, msku, -quantity);
        Ok(())
    }

    /// Availability of a combo given its component MSKUs.
    ///
    /// `available_sets` is the component-wise minimum of total stock; an
    /// empty component list reports 0 sets.
    pub fn combo_availability(&self, components: &[Msku]) -> ComboAvailability {
        let mut available_sets: Option<i64> = None;
        let mut detail = Vec::with_capacity(components.len());

        for msku in components {
            let total = self.total_stock(msku);
            let per_warehouse = self
                .stock
                .keys()
                .map(|wh| (wh.clone(), self.stock_at(wh, msku)))
                .collect();
            detail.push(ComponentAvailability {
                msku: msku.clone(),
                total,
                per_warehouse,
            });
            available_sets = Some(available_sets.map_or(total, |sets| sets.min(total)));
        }

        ComboAvailability {
            available_sets: available_sets.unwrap_or(0),
            components: detail,
        }
    }

    /// Subtract `sets` combo sets: each component loses `sets` units from
    /// `warehouse`, but only if all components jointly cover the request
    /// across the whole ledger.
    ///
    /// The joint check is ledger-wide while the subtraction targets one
    /// warehouse, so that warehouse may go negative.
    pub fn subtract_combo(
        &mut self,
        components: &[Msku],
        sets: i64,
        warehouse: &WarehouseId,
    ) -> DomainResult<()> {
        if sets < 1 {
            return Err(DomainError::validation("sets must be at least 1"));
        }
        let available = self.combo_availability(components).available_sets;
        if available < sets {
            return Err(DomainError::insufficient_stock(sets, available));
        }
        for msku in components {
            self.adjust(warehouse, msku, -sets);
        }
        Ok(())
    }

    /// All (warehouse, msku, quantity) entries for display.
    pub fn rows(&self) -> impl Iterator<Item = (&WarehouseId, &Msku, i64)> {
        self.stock.iter().flat_map(|(wh, items)| {
            items.iter().map(move |(msku, qty)| (wh, msku, *qty))
        })
    }

    /// Number of distinct MSKUs tracked in one warehouse.
    pub fn items_in(&self, warehouse: &WarehouseId) -> usize {
        self.stock.get(warehouse).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}
