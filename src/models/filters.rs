use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which dose date a date-range filter inspects. The schedule view filters
/// on upcoming due dates; the history view filters on administration dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateField {
    Given,
    NextDue,
}

/// Filter and pagination parameters for a table view.
///
/// All fields are optional in effect: an empty search term matches every
/// record, and the date filter only engages when both bounds are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordQuery {
    pub search_term: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub date_field: DateField,
    /// 1-based page cursor. Out-of-range values are clamped, never errors.
    pub page: usize,
    pub page_size: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            date_from: None,
            date_to: None,
            date_field: DateField::NextDue,
            page: 1,
            page_size: 10,
        }
    }
}
