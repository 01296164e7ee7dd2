use serde::{Deserialize, Serialize};

/// Closed set of display categories for a vaccination dose.
///
/// `OnTime`, `Delayed` and `Missed` come from the server's own recorded
/// classification; `Completed`, `Overdue` and `Unknown` are derived locally
/// from the dose's dates when the server supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoseStatus {
    OnTime,
    Delayed,
    Missed,
    Completed,
    Overdue,
    Unknown,
}

impl DoseStatus {
    /// Fixed label used by table cells and badges. Total — every variant
    /// maps to something renderable; `Unknown` renders as a dash.
    pub fn label(&self) -> &'static str {
        match self {
            DoseStatus::OnTime => "On-Time",
            DoseStatus::Delayed => "Delayed",
            DoseStatus::Missed => "Missed",
            DoseStatus::Completed => "Completed",
            DoseStatus::Overdue => "Overdue",
            DoseStatus::Unknown => "-",
        }
    }
}
