//! Processing-session readiness tracking.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use skumap_core::{DomainError, DomainResult};

use crate::upload::UploadLog;

/// Which inputs a session has ingested, and the upload audit trail.
///
/// Processing requires master mapping, inventory, and sales data; combos are
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSession {
    has_master: bool,
    has_combos: bool,
    has_inventory: bool,
    sales_file: Option<PathBuf>,
    uploads: UploadLog,
}

impl ProcessingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_master_loaded(&mut self) {
        self.has_master = true;
    }

    pub fn mark_combos_loaded(&mut self) {
        self.has_combos = true;
    }

    pub fn mark_inventory_loaded(&mut self) {
        self.has_inventory = true;
    }

    /// A sales file is staged rather than loaded: it is consumed by the
    /// processing run itself.
    pub fn stage_sales_file(&mut self, path: impl Into<PathBuf>) {
        self.sales_file = Some(path.into());
    }

    pub fn has_master(&self) -> bool {
        self.has_master
    }

    pub fn has_combos(&self) -> bool {
        self.has_combos
    }

    pub fn has_inventory(&self) -> bool {
        self.has_inventory
    }

    pub fn sales_file(&self) -> Option<&Path> {
        self.sales_file.as_deref()
    }

    pub fn uploads(&self) -> &UploadLog {
        &self.uploads
    }

    pub fn uploads_mut(&mut self) -> &mut UploadLog {
        &mut self.uploads
    }

    /// Names of the required inputs still missing.
    pub fn missing_inputs(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_master {
            missing.push("master mapping");
        }
        if !self.has_inventory {
            missing.push("inventory");
        }
        if self.sales_file.is_none() {
            missing.push("sales data");
        }
        missing
    }

    pub fn ready_for_processing(&self) -> bool {
        self.missing_inputs().is_empty()
    }

    /// Fails with the list of missing inputs.
    pub fn ensure_ready(&self) -> DomainResult<()> {
        let missing = self.missing_inputs();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "upload all required files first (missing: {})",
                missing.join(", ")
            )))
        }
    }
}
