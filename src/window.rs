//! Date-window calculation for the weekly and monthly schedule views.
//!
//! A window is an inclusive-closed `[start, end]` interval covering whole
//! calendar days. "Now" is always an explicit argument so callers (and
//! tests) control the clock.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Inclusive-closed day-aligned interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    /// The calendar week containing `now`: Monday 00:00:00.000 through
    /// Sunday 23:59:59.999. Sunday counts as day 7 of the week it closes,
    /// not the start of the next one.
    pub fn this_week(now: NaiveDateTime) -> Self {
        let today = now.date();
        let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        Self {
            start: day_start(monday),
            end: day_end(monday + Duration::days(6)),
        }
    }

    /// The calendar month containing `now`, first day 00:00:00.000 through
    /// last day 23:59:59.999.
    pub fn this_month(now: NaiveDateTime) -> Self {
        let today = now.date();
        let first = today.with_day(1).unwrap_or(today);
        let last = first + Months::new(1) - Duration::days(1);
        Self {
            start: day_start(first),
            end: day_end(last),
        }
    }

    /// An explicit range, each bound normalized to its full calendar day.
    /// An inverted range (`from > to`) yields an empty window that matches
    /// nothing — not an error.
    pub fn explicit(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            start: day_start(from),
            end: day_end(to),
        }
    }

    /// True when the window can never match (inverted explicit range).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Membership is inclusive at both ends.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Tests a calendar date at its midnight instant.
    pub fn contains_date(&self, d: NaiveDate) -> bool {
        self.contains(day_start(d))
    }

    /// A missing date is never in any window.
    pub fn contains_opt(&self, d: Option<NaiveDate>) -> bool {
        d.is_some_and(|d| self.contains_date(d))
    }
}

fn day_start(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

fn day_end(d: NaiveDate) -> NaiveDateTime {
    day_start(d) + Duration::days(1) - Duration::milliseconds(1)
}
