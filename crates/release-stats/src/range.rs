use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// Inclusive interval of calendar days.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> StatsResult<Self> {
        if from > to {
            return Err(StatsError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    pub fn len_days(&self) -> u64 {
        (self.to - self.from).num_days().unsigned_abs() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn days_walks_both_bounds_inclusive() {
        let range = DateRange::new(day(2016, 2, 27), day(2016, 3, 1)).expect("range");
        let days = range.days().collect::<Vec<_>>();
        assert_eq!(
            days,
            vec![
                day(2016, 2, 27),
                day(2016, 2, 28),
                day(2016, 2, 29),
                day(2016, 3, 1)
            ]
        );
        assert_eq!(range.len_days(), 4);
    }

    #[test]
    fn single_day_range_has_one_day() {
        let range = DateRange::new(day(2017, 6, 1), day(2017, 6, 1)).expect("range");
        assert_eq!(range.days().count(), 1);
        assert!(range.contains(day(2017, 6, 1)));
    }
}
