use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::range::DateRange;

/// A payload that is valid for the days of a [`DateRange`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Windowed<T> {
    range: DateRange,
    data: T,
}

impl<T> Windowed<T> {
    pub const fn new(range: DateRange, data: T) -> Self {
        Self { range, data }
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub const fn data(&self) -> &T {
        &self.data
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.range.contains(day)
    }

    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.range.overlaps(range)
    }
}

/// Baseline traffic for each day of the week.
pub type DataSet = Windowed<WeekdayTotals>;

/// Versions that receive traffic while the window is active.
pub type Release = Windowed<ReleaseVersions>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WeekdayTotals([u64; 7]);

impl WeekdayTotals {
    /// Totals indexed Monday first.
    pub const fn new(totals: [u64; 7]) -> Self {
        Self(totals)
    }

    pub fn get(&self, weekday: Weekday) -> u64 {
        self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn for_day(&self, day: NaiveDate) -> u64 {
        self.get(day.weekday())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReleaseVersions {
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl ReleaseVersions {
    pub fn current(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            maintenance: None,
            next: None,
        }
    }

    pub fn with_maintenance(mut self, maintenance: impl Into<String>) -> Self {
        self.maintenance = Some(maintenance.into());
        self
    }

    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }
}
