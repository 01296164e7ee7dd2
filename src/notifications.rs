//! Due-date notification derivation and incoming-shape normalization.
//!
//! The weekly notification list carries one entry per dose with a known
//! next-due date, tagged `Upcoming` or `Overdue` relative to "now". The
//! backend's push channel delivers notifications in two shapes — bare
//! strings and structured objects — which a single normalization function
//! folds into one type at the ingestion boundary.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::record::VaccinationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Upcoming,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationPriority {
    Normal,
    High,
}

/// One derived entry in the notification panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoseNotification {
    /// `"<record id>-<dose number>"` — stable across regeneration.
    pub id: String,
    /// Serialized as `type`, the field name the presentation layer reads.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub priority: NotificationPriority,
    /// The underlying due date, exposed so callers can re-sort if they want
    /// a chronological panel. The default order does not use it.
    pub next_due: NaiveDate,
    /// Generation instant, shared by every entry in one derivation pass.
    pub generated_at: NaiveDateTime,
}

/// Derives the notification list from the full record set.
///
/// Entries are sorted descending on `generated_at`. Every entry in a pass
/// carries the same generation stamp, so the sort leaves insertion order
/// intact — that is the longstanding observed behavior of this panel and
/// callers depend on it, so it stays.
pub fn derive_notifications(
    records: &[VaccinationRecord],
    now: NaiveDateTime,
) -> Vec<DoseNotification> {
    let mut entries: Vec<DoseNotification> = Vec::new();
    for record in records {
        for dose in &record.doses {
            let Some(due) = dose.next_due else { continue };
            let upcoming = due.and_time(NaiveTime::MIN) > now;
            let (kind, priority, message) = if upcoming {
                (
                    NotificationKind::Upcoming,
                    NotificationPriority::Normal,
                    format!(
                        "Dose {} of {} for {} is due on {}",
                        dose.dose_number, record.vaccine_name, record.newborn_name, due
                    ),
                )
            } else {
                (
                    NotificationKind::Overdue,
                    NotificationPriority::High,
                    format!(
                        "Dose {} of {} for {} was due on {}",
                        dose.dose_number, record.vaccine_name, record.newborn_name, due
                    ),
                )
            };
            entries.push(DoseNotification {
                id: format!("{}-{}", record.id, dose.dose_number),
                kind,
                message,
                priority,
                next_due: due,
                generated_at: now,
            });
        }
    }
    entries.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
    entries
}

/// A pushed notification as it arrives off the wire: either a bare string
/// or a structured object with optional fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IncomingNotification {
    Raw(String),
    Structured {
        #[serde(default)]
        id: Option<String>,
        #[serde(default, alias = "text")]
        message: Option<String>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        priority: Option<String>,
    },
}

/// Uniform shape after normalization. Fields the wire did not supply stay
/// `None`; the text defaults to empty rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedNotification {
    pub id: Option<String>,
    pub text: String,
    pub kind: Option<NotificationKind>,
    pub priority: Option<NotificationPriority>,
}

/// Folds both wire shapes into one. Total — no shape is rejected here.
pub fn normalize(incoming: IncomingNotification) -> NormalizedNotification {
    match incoming {
        IncomingNotification::Raw(text) => NormalizedNotification {
            id: None,
            text,
            kind: None,
            priority: None,
        },
        IncomingNotification::Structured {
            id,
            message,
            kind,
            priority,
        } => NormalizedNotification {
            id,
            text: message.unwrap_or_default(),
            kind: kind.as_deref().and_then(parse_kind),
            priority: priority.as_deref().and_then(parse_priority),
        },
    }
}

fn parse_kind(raw: &str) -> Option<NotificationKind> {
    match raw.trim().to_lowercase().as_str() {
        "upcoming" => Some(NotificationKind::Upcoming),
        "overdue" => Some(NotificationKind::Overdue),
        _ => None,
    }
}

fn parse_priority(raw: &str) -> Option<NotificationPriority> {
    match raw.trim().to_lowercase().as_str() {
        "high" => Some(NotificationPriority::High),
        "normal" | "low" => Some(NotificationPriority::Normal),
        _ => None,
    }
}
