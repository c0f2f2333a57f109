//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers are validated string newtypes: they can only be
//! constructed through `parse`, so a held value is known to be well-formed.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marketplace-specific product code as sellers submit it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Canonical master SKU used internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Msku(String);

/// Identifier of a combo (bundle of MSKUs sold as one unit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboId(String);

/// Name of a warehouse holding stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

const SKU_MIN_LEN: usize = 3;
const SKU_MAX_LEN: usize = 20;

fn is_sku_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

/// Validates the seller SKU format: `[A-Z0-9_-]{3,20}`.
fn validate_sku(raw: &str) -> Result<(), String> {
    let len = raw.chars().count();
    if len < SKU_MIN_LEN || len > SKU_MAX_LEN {
        return Err(format!(
            "length must be {SKU_MIN_LEN}..={SKU_MAX_LEN}, got {len}"
        ));
    }
    if !raw.chars().all(is_sku_char) {
        return Err("only A-Z, 0-9, '_' and '-' are allowed".to_string());
    }
    Ok(())
}

fn validate_non_empty(raw: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        return Err("cannot be empty".to_string());
    }
    Ok(())
}

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal, $validate:path) => {
        impl $t {
            /// Parse and validate a raw identifier.
            pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
                let raw = raw.into();
                $validate(&raw)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_code_newtype!(Sku, "Sku", validate_sku);
impl_code_newtype!(Msku, "Msku", validate_non_empty);
impl_code_newtype!(ComboId, "ComboId", validate_non_empty);
impl_code_newtype!(WarehouseId, "WarehouseId", validate_non_empty);

impl Sku {
    /// True when the raw string matches the seller SKU format.
    pub fn is_valid_format(raw: &str) -> bool {
        validate_sku(raw).is_ok()
    }
}

impl From<Sku> for Msku {
    /// A well-formed SKU is usable as its own master SKU (identity mapping).
    fn from(value: Sku) -> Self {
        Self(value.0)
    }
}

impl ComboId {
    pub const PREFIX: &'static str = "COMBO_";

    /// Derive a combo id from its member SKUs: `COMBO_<sku1>-<sku2>-…`.
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a Sku>) -> Self {
        let joined = members
            .into_iter()
            .map(Sku::as_str)
            .collect::<Vec<_>>()
            .join("-");
        Self(format!("{}{joined}", Self::PREFIX))
    }
}

impl WarehouseId {
    /// The warehouse inventory files load into when none is named.
    pub fn main() -> Self {
        Self("Main".to_string())
    }
}

impl Default for WarehouseId {
    fn default() -> Self {
        Self::main()
    }
}
