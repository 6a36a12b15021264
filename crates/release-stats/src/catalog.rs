use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::error::StatsResult;
use crate::event::Event;
use crate::range::DateRange;
use crate::result::GenerationResult;
use crate::synth::SeriesSynthesizer;
use crate::window::{DataSet, Release};

/// Data sets, releases and events that statistics are generated from.
///
/// Collections are expected in chronological order with non-overlapping
/// windows; [`crate::config::load_catalog`] enforces this for file input.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    data_sets: Vec<DataSet>,
    releases: Vec<Release>,
    events: Vec<Event>,
}

impl Catalog {
    pub fn new(data_sets: &[DataSet], releases: &[Release], events: &[Event]) -> Self {
        Self {
            data_sets: data_sets.to_vec(),
            releases: releases.to_vec(),
            events: events.to_vec(),
        }
    }

    pub fn data_sets(&self) -> &[DataSet] {
        &self.data_sets
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn data_sets_in_range(&self, range: &DateRange) -> Vec<&DataSet> {
        self.data_sets
            .iter()
            .filter(|data_set| data_set.overlaps(range))
            .collect()
    }

    pub fn releases_in_range(&self, range: &DateRange) -> Vec<&Release> {
        self.releases
            .iter()
            .filter(|release| release.overlaps(range))
            .collect()
    }

    pub fn events_in_range(&self, range: &DateRange) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| range.contains(event.date))
            .collect()
    }

    /// Events in `range` grouped by day, keeping their listed order.
    pub fn event_index(&self, range: &DateRange) -> HashMap<NaiveDate, Vec<&Event>> {
        let mut index = HashMap::<NaiveDate, Vec<&Event>>::new();
        for event in self.events_in_range(range) {
            index.entry(event.date).or_default().push(event);
        }
        index
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        range: DateRange,
        rng: &mut R,
    ) -> StatsResult<GenerationResult> {
        SeriesSynthesizer::new(self, range, rng)?.run()
    }

    pub fn generate_seeded(&self, range: DateRange, seed: u64) -> StatsResult<GenerationResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(range, &mut rng)
    }

    /// Runs of days in `range` that no release or no data set covers.
    pub fn coverage_gaps(&self, range: &DateRange) -> Vec<CoverageGap> {
        let releases = self.releases_in_range(range);
        let data_sets = self.data_sets_in_range(range);
        let mut gaps = Vec::new();
        collect_gaps(&mut gaps, GapKind::Release, range, |day| {
            releases.iter().any(|release| release.covers(day))
        });
        collect_gaps(&mut gaps, GapKind::DataSet, range, |day| {
            data_sets.iter().any(|data_set| data_set.covers(day))
        });
        gaps
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    Release,
    DataSet,
}

impl GapKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::DataSet => "data set",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CoverageGap {
    pub kind: GapKind,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {} information from {} to {}",
            self.kind.as_str(),
            self.from,
            self.to
        )
    }
}

fn collect_gaps(
    gaps: &mut Vec<CoverageGap>,
    kind: GapKind,
    range: &DateRange,
    covered: impl Fn(NaiveDate) -> bool,
) {
    let mut open: Option<(NaiveDate, NaiveDate)> = None;
    for day in range.days() {
        if covered(day) {
            if let Some((from, to)) = open.take() {
                gaps.push(CoverageGap { kind, from, to });
            }
        } else {
            open = Some(match open {
                Some((from, _)) => (from, day),
                None => (day, day),
            });
        }
    }
    if let Some((from, to)) = open {
        gaps.push(CoverageGap { kind, from, to });
    }
}
