use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use itertools::Itertools;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{StatsError, StatsResult};
use crate::event::{Event, EventType};
use crate::range::DateRange;
use crate::window::{DataSet, Release, ReleaseVersions, WeekdayTotals, Windowed};

pub const DEFAULT_CATALOG_PATH: &str = "fixtures/catalog.yaml";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub data_sets: Vec<DataSetEntry>,
    #[serde(default)]
    pub releases: Vec<ReleaseEntry>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSetEntry {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub totals: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseEntry {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub current: String,
    #[serde(default)]
    pub maintenance: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> StatsResult<Catalog> {
        let data_sets = self
            .data_sets
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_data_set(index))
            .collect::<StatsResult<Vec<_>>>()?;
        let releases = self
            .releases
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_release(index))
            .collect::<StatsResult<Vec<_>>>()?;
        validate_sequence("data set", &data_sets)?;
        validate_sequence("release", &releases)?;
        for (index, event) in self.events.iter().enumerate() {
            validate_event(index, event)?;
        }
        Ok(Catalog::new(&data_sets, &releases, &self.events))
    }
}

impl DataSetEntry {
    fn into_data_set(self, index: usize) -> StatsResult<DataSet> {
        let range = window_range("data set", index, self.from, self.to)?;
        let mut totals = [None::<u64>; 7];
        for (key, total) in &self.totals {
            let weekday = key.parse::<Weekday>().map_err(|_| {
                StatsError::InvalidCatalog(format!(
                    "data set #{index}: unknown weekday '{key}'"
                ))
            })?;
            let slot = &mut totals[weekday.num_days_from_monday() as usize];
            if slot.replace(*total).is_some() {
                return Err(StatsError::InvalidCatalog(format!(
                    "data set #{index}: weekday '{key}' is listed more than once"
                )));
            }
        }
        let mut resolved = [0u64; 7];
        for (slot, weekday) in WEEKDAYS.iter().enumerate() {
            resolved[slot] = totals[slot].ok_or_else(|| {
                StatsError::InvalidCatalog(format!(
                    "data set #{index}: missing total for {weekday}"
                ))
            })?;
        }
        Ok(Windowed::new(range, WeekdayTotals::new(resolved)))
    }
}

impl ReleaseEntry {
    fn into_release(self, index: usize) -> StatsResult<Release> {
        let range = window_range("release", index, self.from, self.to)?;
        if self.current.trim().is_empty() {
            return Err(StatsError::InvalidCatalog(format!(
                "release #{index}: current version must not be empty"
            )));
        }
        let versions = ReleaseVersions {
            current: self.current,
            maintenance: self.maintenance.filter(|v| !v.trim().is_empty()),
            next: self.next.filter(|v| !v.trim().is_empty()),
        };
        Ok(Windowed::new(range, versions))
    }
}

fn window_range(
    label: &str,
    index: usize,
    from: NaiveDate,
    to: NaiveDate,
) -> StatsResult<DateRange> {
    DateRange::new(from, to)
        .map_err(|error| StatsError::InvalidCatalog(format!("{label} #{index}: {error}")))
}

fn validate_sequence<T>(label: &str, windows: &[Windowed<T>]) -> StatsResult<()> {
    for (index, (previous, next)) in windows.iter().tuple_windows().enumerate() {
        if next.range().from() <= previous.range().to() {
            return Err(StatsError::InvalidCatalog(format!(
                "{label} #{} {} must start after {label} #{index} {}",
                index + 1,
                next.range(),
                previous.range()
            )));
        }
    }
    Ok(())
}

fn validate_event(index: usize, event: &Event) -> StatsResult<()> {
    if let EventType::Scale { factor } = event.kind {
        if !factor.is_finite() || factor < 0.0 {
            return Err(StatsError::InvalidCatalog(format!(
                "event #{index} on {}: scale factor must be a non-negative number, got {factor}",
                event.date
            )));
        }
    }
    Ok(())
}

pub fn parse_catalog(yaml: &str) -> StatsResult<Catalog> {
    serde_yaml::from_str::<CatalogFile>(yaml)
        .map_err(|error| StatsError::InvalidCatalog(error.to_string()))?
        .into_catalog()
}

pub fn load_catalog(path: impl AsRef<Path>) -> StatsResult<Catalog> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let file = serde_yaml::from_slice::<CatalogFile>(&bytes).map_err(|error| {
        StatsError::InvalidCatalog(format!("'{}': {error}", path.display()))
    })?;
    let catalog = file.into_catalog()?;
    tracing::debug!(
        path = %path.display(),
        data_sets = catalog.data_sets().len(),
        releases = catalog.releases().len(),
        events = catalog.events().len(),
        "loaded catalog"
    );
    Ok(catalog)
}
