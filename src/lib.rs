//! vaxtrack-core — record-derivation and scheduling-window engine for a
//! newborn vaccination tracking dashboard.
//!
//! The backend is the single source of truth; this crate derives everything
//! the presentation layer shows from immutable snapshots of server state:
//! scheduling windows, dose status classification, filtered/paginated table
//! views, inventory grouping, and due-date notifications. All derivation
//! functions are pure, synchronous, and total — they never panic on any
//! input and take "now" as an explicit argument.

pub mod error;
pub mod models;
pub mod window; // weekly/monthly/explicit date windows
pub mod status; // dose status classification
pub mod paginate; // filter + search + paginate engine
pub mod grouping; // inventory aggregation by vaccine name
pub mod notifications; // due-date notification derivation + shape normalization
pub mod ingest; // wire-shape deserialization boundary
pub mod snapshot; // replace-wholesale snapshot store

pub use error::{IngestError, SnapshotError};
pub use models::enums::DoseStatus;
pub use models::filters::{DateField, RecordQuery};
pub use models::inventory::{BatchDetail, GroupedVaccine, VaccineBatch};
pub use models::record::{Dose, VaccinationRecord};
pub use paginate::{filter_and_paginate, Page, Queryable};
pub use window::DateWindow;
