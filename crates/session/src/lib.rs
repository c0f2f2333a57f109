//! `skumap-session` — processing-session state and the upload audit log.
//!
//! Tracks which of the required input files a session has ingested and keeps
//! an append-only record of every file that passed through.

pub mod session;
pub mod upload;

pub use session::ProcessingSession;
pub use upload::{UploadId, UploadKind, UploadLog, UploadRecord, UploadStatus};
