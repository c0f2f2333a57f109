//! Upload audit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique upload identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadId(pub Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which file shape an upload carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Master,
    Combo,
    Inventory,
    Sales,
    Processed,
}

impl UploadKind {
    pub fn label(self) -> &'static str {
        match self {
            UploadKind::Master => "master",
            UploadKind::Combo => "combo",
            UploadKind::Inventory => "inventory",
            UploadKind::Sales => "sales",
            UploadKind::Processed => "processed",
        }
    }
}

/// Upload lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Stored, not yet interpreted.
    Received,
    /// Loaded into the session successfully.
    Processed,
    /// A sales file waiting for the processing run.
    Ready,
    /// Interpretation failed.
    Failed { error: String },
}

impl UploadStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, UploadStatus::Failed { .. })
    }
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadStatus::Received => write!(f, "Uploaded"),
            UploadStatus::Processed => write!(f, "Processed successfully"),
            UploadStatus::Ready => write!(f, "Ready for processing"),
            UploadStatus::Failed { error } => write!(f, "Error: {error}"),
        }
    }
}

/// One file that passed through a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: UploadId,
    pub filename: String,
    pub kind: UploadKind,
    pub status: UploadStatus,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only upload log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLog {
    records: Vec<UploadRecord>,
}

impl UploadLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new upload; returns its id.
    pub fn record(&mut self, filename: impl Into<String>, kind: UploadKind) -> UploadId {
        let record = UploadRecord {
            id: UploadId::new(),
            filename: filename.into(),
            kind,
            status: UploadStatus::Received,
            recorded_at: Utc::now(),
        };
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Update the status of an existing upload.
    pub fn mark(&mut self, id: UploadId, status: UploadStatus) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    /// Records newest first. The log is append-only, so insertion order is
    /// chronological even when timestamps collide.
    pub fn newest_first(&self) -> impl Iterator<Item = &UploadRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &UploadRecord> {
        self.records.iter().filter(|r| r.status.is_failure())
    }
}
