//! Wire-shape deserialization boundary.
//!
//! The backend's JSON uses mixed field casing (`newbornName`, `FullAddress`,
//! `next_due_date`) and sometimes numeric ids; everything is converted into
//! the crate's domain models here, in one place. Date parsing is lenient:
//! an unparsable date string becomes `None` and the item simply drops out
//! of date-based matching — it never becomes an error.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use crate::error::IngestError;
use crate::models::inventory::VaccineBatch;
use crate::models::record::{Dose, VaccinationRecord};
use crate::notifications::{normalize, IncomingNotification, NormalizedNotification};

/// Ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Num(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: RawId,
    #[serde(rename = "newbornName")]
    newborn_name: String,
    #[serde(rename = "motherName", default)]
    mother_name: String,
    #[serde(rename = "FullAddress", default)]
    full_address: String,
    #[serde(default)]
    zone: Option<String>,
    #[serde(rename = "vaccineName")]
    vaccine_name: String,
    #[serde(default)]
    dosage: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    doses: Vec<RawDose>,
}

#[derive(Debug, Deserialize)]
struct RawDose {
    #[serde(rename = "doseNumber")]
    dose_number: u32,
    #[serde(rename = "dateGiven", default)]
    date_given: Option<String>,
    #[serde(rename = "next_due_date", default)]
    next_due_date: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    remarks: Option<String>,
    #[serde(rename = "administeredBy", default)]
    administered_by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBatch {
    #[serde(rename = "batchId")]
    batch_id: RawId,
    /// Some endpoints omit the vaccine name on batch rows; the brand name
    /// stands in as the grouping key when they do.
    #[serde(rename = "vaccineName", default)]
    vaccine_name: Option<String>,
    #[serde(rename = "brandName")]
    brand_name: String,
    #[serde(default)]
    stock: u32,
    #[serde(rename = "expirationDate", default)]
    expiration_date: Option<String>,
}

/// Parses a record-collection payload into domain records.
pub fn parse_records(payload: &str) -> Result<Vec<VaccinationRecord>, IngestError> {
    let raw: Vec<RawRecord> = serde_json::from_str(payload)?;
    Ok(raw.into_iter().map(into_record).collect())
}

/// Parses an inventory payload into domain batches.
pub fn parse_batches(payload: &str) -> Result<Vec<VaccineBatch>, IngestError> {
    let raw: Vec<RawBatch> = serde_json::from_str(payload)?;
    Ok(raw.into_iter().map(into_batch).collect())
}

/// Parses a pushed notification payload, normalizing both wire shapes.
pub fn parse_notifications(payload: &str) -> Result<Vec<NormalizedNotification>, IngestError> {
    let raw: Vec<IncomingNotification> = serde_json::from_str(payload)?;
    Ok(raw.into_iter().map(normalize).collect())
}

fn into_record(raw: RawRecord) -> VaccinationRecord {
    let id: String = raw.id.into();
    if raw.doses.is_empty() {
        warn!(record_id = %id, "record arrived with no doses");
    }
    VaccinationRecord {
        id,
        newborn_name: raw.newborn_name,
        mother_name: raw.mother_name,
        address: raw.full_address,
        zone: raw.zone,
        vaccine_name: raw.vaccine_name,
        dosage: raw.dosage,
        description: raw.description,
        doses: raw.doses.into_iter().map(into_dose).collect(),
    }
}

fn into_dose(raw: RawDose) -> Dose {
    Dose {
        dose_number: raw.dose_number,
        date_given: raw.date_given.as_deref().and_then(parse_date),
        next_due: raw.next_due_date.as_deref().and_then(parse_date),
        stored_status: raw.status,
        remarks: raw.remarks,
        administered_by: raw.administered_by,
    }
}

fn into_batch(raw: RawBatch) -> VaccineBatch {
    let name = raw.vaccine_name.unwrap_or_else(|| raw.brand_name.clone());
    VaccineBatch {
        batch_id: raw.batch_id.into(),
        name,
        brand: raw.brand_name,
        stock: raw.stock,
        expiration_date: raw.expiration_date.as_deref().and_then(parse_date),
    }
}

/// Lenient date parsing: plain ISO date, then RFC 3339, then the US slash
/// format some older records carry. Anything else is treated as absent.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Some(date);
    }
    warn!(%raw, "unparsable date; treating as absent");
    None
}
