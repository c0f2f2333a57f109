//! Combo catalog: bundles of MSKUs sold as one unit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skumap_core::{ComboId, DomainError, DomainResult, Msku};

/// Combo definitions keyed by combo id.
///
/// Components are stored in definition order. The map is ordered so
/// membership scans visit combos deterministically (by id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboCatalog {
    combos: BTreeMap<ComboId, Vec<Msku>>,
}

impl ComboCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a combo. Redefinition replaces the component list.
    pub fn define(&mut self, id: ComboId, components: Vec<Msku>) -> DomainResult<()> {
        if components.is_empty() {
            return Err(DomainError::validation(
                "combo must have at least one component",
            ));
        }
        self.combos.insert(id, components);
        Ok(())
    }

    pub fn components(&self, id: &ComboId) -> Option<&[Msku]> {
        self.combos.get(id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: &ComboId) -> bool {
        self.combos.contains_key(id)
    }

    /// First combo (by id) with a component whose MSKU string equals `raw`.
    pub fn member_of(&self, raw: &str) -> Option<&ComboId> {
        self.combos
            .iter()
            .find(|(_, components)| components.iter().any(|m| m.as_str() == raw))
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComboId, &[Msku])> {
        self.combos.iter().map(|(id, c)| (id, c.as_slice()))
    }
}
