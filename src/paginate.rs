//! Filter / search / paginate engine shared by the table views.
//!
//! Matching is AND-composed: a row must satisfy both the free-text search
//! and the date-range filter to be included. Pagination clamps the cursor
//! into range on every recomputation, so a view whose result set shrinks
//! (a deletion, a narrower filter) lands on the last non-empty page instead
//! of a stale empty one.

use chrono::NaiveDate;

use crate::models::filters::{DateField, RecordQuery};
use crate::models::inventory::VaccineBatch;
use crate::models::record::VaccinationRecord;
use crate::window::DateWindow;

/// A row a table view can search and date-filter.
pub trait Queryable {
    /// Concatenated text the free-text search matches against.
    fn search_haystack(&self) -> String;

    /// Dates considered by the date-range filter; a row matches when ANY
    /// of them falls inside the window.
    fn candidate_dates(&self, field: DateField) -> Vec<NaiveDate>;
}

impl Queryable for VaccinationRecord {
    fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.newborn_name, self.mother_name, self.vaccine_name
        )
    }

    fn candidate_dates(&self, field: DateField) -> Vec<NaiveDate> {
        self.doses
            .iter()
            .filter_map(|d| match field {
                DateField::Given => d.date_given,
                DateField::NextDue => d.next_due,
            })
            .collect()
    }
}

impl Queryable for VaccineBatch {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.name, self.brand)
    }

    fn candidate_dates(&self, _field: DateField) -> Vec<NaiveDate> {
        self.expiration_date.into_iter().collect()
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective 1-based cursor after clamping. Callers store this back,
    /// which is what keeps the cursor self-healing across mutations.
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Applies search and date filters, then pages the matches.
///
/// The date filter engages only when both bounds are present; the search
/// only when the term is non-empty. Never panics: a zero page size is
/// floored to one, and any cursor is clamped into `[1, max(total_pages, 1)]`.
pub fn filter_and_paginate<T: Queryable + Clone>(rows: &[T], query: &RecordQuery) -> Page<T> {
    let window = match (query.date_from, query.date_to) {
        (Some(from), Some(to)) => Some(DateWindow::explicit(from, to)),
        _ => None,
    };
    let needle = query.search_term.trim().to_lowercase();

    let matches: Vec<&T> = rows
        .iter()
        .filter(|row| matches_search(*row, &needle) && matches_window(*row, window.as_ref(), query.date_field))
        .collect();

    let page_size = query.page_size.max(1);
    let total_count = matches.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = query.page.clamp(1, total_pages.max(1));

    let items = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_count,
    }
}

fn matches_search<T: Queryable>(row: &T, needle: &str) -> bool {
    needle.is_empty() || row.search_haystack().to_lowercase().contains(needle)
}

fn matches_window<T: Queryable>(row: &T, window: Option<&DateWindow>, field: DateField) -> bool {
    match window {
        None => true,
        Some(w) => row
            .candidate_dates(field)
            .into_iter()
            .any(|d| w.contains_date(d)),
    }
}
