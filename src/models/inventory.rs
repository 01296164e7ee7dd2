use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One inventory lot of a named vaccine.
///
/// Stock is decremented server-side on assignment; the client only reflects
/// server-provided totals. A batch at zero stock stays visible for audit
/// until explicitly deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineBatch {
    pub batch_id: String,
    /// Grouping key — compared verbatim, no case or whitespace folding.
    pub name: String,
    pub brand: String,
    pub stock: u32,
    pub expiration_date: Option<NaiveDate>,
}

/// Aggregation of all batches sharing a vaccine name. Derived on every
/// render from the current batch list, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedVaccine {
    pub name: String,
    pub total_stock: u64,
    pub details: Vec<BatchDetail>,
}

/// One per-batch line under a grouped vaccine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchDetail {
    /// `"<brand> (<expiration ISO date>)"`, or `"<brand> (no expiry)"` when
    /// the batch carries no parsable expiration.
    pub label: String,
    pub batch_id: String,
    pub stock: u32,
}
