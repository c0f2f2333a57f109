//! Master mapping table: seller SKU → canonical MSKU.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skumap_core::{Msku, Sku};

/// The master mapping table.
///
/// Unique per SKU; when the same SKU is inserted twice (e.g. two mapping
/// files loaded in sequence) the last insert wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterMapping {
    entries: BTreeMap<Sku, Msku>,
}

impl MasterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the MSKU it replaced, if any.
    pub fn insert(&mut self, sku: Sku, msku: Msku) -> Option<Msku> {
        self.entries.insert(sku, msku)
    }

    pub fn get(&self, sku: &Sku) -> Option<&Msku> {
        self.entries.get(sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, &Msku)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(raw: &str) -> Sku {
        Sku::parse(raw).unwrap()
    }

    fn msku(raw: &str) -> Msku {
        Msku::parse(raw).unwrap()
    }

    #[test]
    fn insert_returns_replaced_value_on_conflict() {
        let mut map = MasterMapping::new();
        assert_eq!(map.insert(sku("AMZ-001"), msku("GOLDEN_APPLE")), None);

        let replaced = map.insert(sku("AMZ-001"), msku("RED_APPLE"));
        assert_eq!(replaced, Some(msku("GOLDEN_APPLE")));
        assert_eq!(map.get(&sku("AMZ-001")), Some(&msku("RED_APPLE")));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_misses_for_unknown_sku() {
        let map = MasterMapping::new();
        assert!(map.get(&sku("AMZ-001")).is_none());
        assert!(map.is_empty());
    }
}
