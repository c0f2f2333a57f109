//! The catalog: both lookup tables plus total SKU resolution.

use serde::{Deserialize, Serialize};

use skumap_core::{ComboId, DomainResult, Msku, Sku};

use crate::combo::ComboCatalog;
use crate::master::MasterMapping;

/// Outcome of resolving a raw seller SKU.
///
/// Resolution is total: every input string lands in exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuResolution {
    /// Found in the master table.
    Mapped(Msku),
    /// The SKU is a component of a combo product.
    ComboMember(ComboId),
    /// Well-formed but absent from the master table.
    Unmapped,
    /// Does not match the seller SKU format.
    InvalidFormat,
}

impl SkuResolution {
    /// True when a sales line with this resolution can consume stock.
    pub fn is_fulfillable(&self) -> bool {
        matches!(self, Self::Mapped(_) | Self::ComboMember(_))
    }
}

impl core::fmt::Display for SkuResolution {
    /// Renders the value written into the processed file's `MSKU` column.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Mapped(msku) => write!(f, "{msku}"),
            Self::ComboMember(id) => write!(f, "{id}"),
            Self::Unmapped => write!(f, "UNMAPPED"),
            Self::InvalidFormat => write!(f, "INVALID_FORMAT"),
        }
    }
}

/// Master mapping and combo definitions under one roof.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    master: MasterMapping,
    combos: ComboCatalog,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master(&self) -> &MasterMapping {
        &self.master
    }

    pub fn master_mut(&mut self) -> &mut MasterMapping {
        &mut self.master
    }

    pub fn combos(&self) -> &ComboCatalog {
        &self.combos
    }

    /// Resolve a raw seller SKU.
    ///
    /// Precedence: format validation, then combo membership, then master
    /// lookup. Membership compares the raw SKU against component MSKUs,
    /// which is how combo files reference their members.
    pub fn resolve(&self, raw: &str) -> SkuResolution {
        let Ok(sku) = Sku::parse(raw) else {
            return SkuResolution::InvalidFormat;
        };

        if let Some(id) = self.combos.member_of(sku.as_str()) {
            return SkuResolution::ComboMember(id.clone());
        }

        match self.master.get(&sku) {
            Some(msku) => SkuResolution::Mapped(msku.clone()),
            None => SkuResolution::Unmapped,
        }
    }

    /// Define a combo from member SKUs.
    ///
    /// Each member resolves through the master table; a member without a
    /// mapping falls back to itself as its MSKU.
    pub fn add_combo(&mut self, id: ComboId, members: &[Sku]) -> DomainResult<()> {
        let components = members
            .iter()
            .map(|sku| {
                self.master
                    .get(sku)
                    .cloned()
                    .unwrap_or_else(|| Msku::from(sku.clone()))
            })
            .collect();
        self.combos.define(id, components)
    }

    pub fn combo_components(&self, id: &ComboId) -> Option<&[Msku]> {
        self.combos.components(id)
    }
}
