//! Submission output channel
//!
//! The form emits a [`SubmittedRecord`] through a `SubmitSink` on every fully
//! valid submission. The trait keeps the output pluggable and mockable in
//! tests; the default sink logs the record, mirroring the reference
//! component's logging call.

use crate::state::SubmittedRecord;
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from emitting a record through a sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write submit log: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for the submission side-effect channel, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Emit one submitted record
    async fn emit(&mut self, record: &SubmittedRecord) -> Result<(), SinkError>;
}

/// Default sink: logs each record as a JSON payload
#[derive(Debug, Default)]
pub struct TracingSink;

#[async_trait]
impl SubmitSink for TracingSink {
    async fn emit(&mut self, record: &SubmittedRecord) -> Result<(), SinkError> {
        let payload = serde_json::to_string(record)?;
        tracing::info!(target: "signup_tui::submit", %payload, "form submitted");
        Ok(())
    }
}

/// File sink: appends one JSON line per record
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SubmitSink for JsonlSink {
    async fn emit(&mut self, record: &SubmittedRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(record)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
