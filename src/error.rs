use thiserror::Error;

/// Errors raised at the wire-ingestion boundary.
///
/// Field-level malformation (an unparsable date, a missing optional field)
/// never surfaces here — it degrades to an absent value inside `ingest`.
/// Only a structurally invalid payload is an error.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the snapshot store.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot lock poisoned")]
    LockPoisoned,
}
