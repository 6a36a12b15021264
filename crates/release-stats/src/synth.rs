use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{StatsError, StatsResult};
use crate::event::Event;
use crate::range::DateRange;
use crate::result::{Entry, GenerationResult};
use crate::window::{DataSet, Release, ReleaseVersions, Windowed};

const DIP: f64 = 0.05;
const MAX_BUMP: f64 = 0.1;

/// Share of the daily total attributed to each version slot of a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShareTiers {
    pub current: f64,
    pub maintenance: f64,
    pub next: f64,
}

pub const SHARES_WITHOUT_NEXT: ShareTiers = ShareTiers {
    current: 0.92,
    maintenance: 0.10,
    next: 0.0,
};

pub const SHARES_WITH_NEXT: ShareTiers = ShareTiers {
    current: 0.90,
    maintenance: 0.08,
    next: 0.02,
};

impl ShareTiers {
    pub fn for_release(versions: &ReleaseVersions) -> Self {
        if versions.next.is_some() {
            SHARES_WITH_NEXT
        } else {
            SHARES_WITHOUT_NEXT
        }
    }
}

/// Takes `ratio` of `total`, dips it by 5% then bumps it by up to 10%.
pub fn jitter<R: Rng + ?Sized>(total: u64, ratio: f64, rng: &mut R) -> u64 {
    let mut value = ratio * total as f64;
    value -= value * DIP;
    value += value * f64::from(rng.gen::<f32>()) * MAX_BUMP;
    value as u64
}

pub struct SeriesSynthesizer<'a, R> {
    range: DateRange,
    releases: Vec<&'a Release>,
    data_sets: Vec<&'a DataSet>,
    events: HashMap<NaiveDate, Vec<&'a Event>>,
    rng: R,
}

impl<'a, R: Rng> SeriesSynthesizer<'a, R> {
    pub fn new(catalog: &'a Catalog, range: DateRange, rng: R) -> StatsResult<Self> {
        let releases = catalog.releases_in_range(&range);
        let data_sets = catalog.data_sets_in_range(&range);
        if releases.is_empty() || data_sets.is_empty() {
            return Err(StatsError::NoDataAvailable(range));
        }
        let events = catalog.event_index(&range);
        debug!(
            %range,
            releases = releases.len(),
            data_sets = data_sets.len(),
            event_days = events.len(),
            "prepared synthesizer"
        );
        Ok(Self {
            range,
            releases,
            data_sets,
            events,
            rng,
        })
    }

    pub fn run(mut self) -> StatsResult<GenerationResult> {
        let mut result = GenerationResult::new(self.range);
        let mut release_cursor = 0;
        let mut data_set_cursor = 0;

        for day in self.range.days() {
            let release = advance(&self.releases, &mut release_cursor, day)
                .ok_or(StatsError::MissingReleaseCoverage(day))?;
            let data_set = advance(&self.data_sets, &mut data_set_cursor, day)
                .ok_or(StatsError::MissingDataSetCoverage(day))?;

            let total = data_set.data().for_day(day);
            let versions = release.data();
            let shares = ShareTiers::for_release(versions);

            self.emit(&mut result, day, &versions.current, total, shares.current);
            if let Some(maintenance) = &versions.maintenance {
                self.emit(&mut result, day, maintenance, total, shares.maintenance);
            }
            if let Some(next) = &versions.next {
                self.emit(&mut result, day, next, total, shares.next);
            }
        }

        info!(
            range = %self.range,
            versions = result.series().len(),
            entries = result.entry_count(),
            "generated statistics"
        );
        Ok(result)
    }

    fn emit(
        &mut self,
        result: &mut GenerationResult,
        day: NaiveDate,
        version: &str,
        total: u64,
        ratio: f64,
    ) {
        let value = jitter(total, ratio, &mut self.rng);
        let value = self.apply_events(day, value);
        result.push(version, Entry { date: day, value });
    }

    // Every event sees the pre-event value, so the last one listed wins.
    fn apply_events(&self, day: NaiveDate, value: u64) -> u64 {
        let Some(events) = self.events.get(&day) else {
            return value;
        };
        let mut transformed = value;
        for event in events {
            transformed = event.kind.transform(value);
        }
        transformed
    }
}

fn advance<'w, T>(
    windows: &[&'w Windowed<T>],
    cursor: &mut usize,
    day: NaiveDate,
) -> Option<&'w Windowed<T>> {
    while let Some(window) = windows.get(*cursor) {
        if window.covers(day) {
            return Some(*window);
        }
        if window.range().from() > day {
            return None;
        }
        *cursor += 1;
        debug!(%day, cursor = *cursor, "window exhausted, advancing");
    }
    None
}
