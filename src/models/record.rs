use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (newborn, vaccine) pairing with its full dose history.
///
/// Created when a vaccine is first assigned to a newborn, so `doses` is
/// never empty on a record the server considers valid. The client never
/// mutates a record in place — after any write it re-fetches the whole
/// collection and replaces its snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: String,
    pub newborn_name: String,
    pub mother_name: String,
    pub address: String,
    pub zone: Option<String>,
    pub vaccine_name: String,
    pub dosage: String,
    pub description: Option<String>,
    pub doses: Vec<Dose>,
}

/// One scheduled or administered application of a vaccine.
///
/// Owned exclusively by its parent record. `date_given == None` means the
/// dose has not been administered yet, regardless of what `stored_status`
/// claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dose {
    /// Positive, unique within the parent record.
    pub dose_number: u32,
    pub date_given: Option<NaiveDate>,
    pub next_due: Option<NaiveDate>,
    /// The server's own classification string, taken verbatim off the wire.
    /// May be absent, empty, or garbage; the status classifier normalizes it.
    pub stored_status: Option<String>,
    pub remarks: Option<String>,
    pub administered_by: Option<String>,
}
