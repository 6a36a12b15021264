use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::range::DateRange;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub value: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VersionSeries {
    pub version: String,
    pub entries: Vec<Entry>,
}

/// Per-version daily counts for a range, versions in first-seen order.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationResult {
    range: DateRange,
    series: Vec<VersionSeries>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GenerationResult {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            series: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn push(&mut self, version: &str, entry: Entry) {
        let slot = match self.index.get(version) {
            Some(slot) => *slot,
            None => {
                self.series.push(VersionSeries {
                    version: version.to_string(),
                    entries: Vec::new(),
                });
                let slot = self.series.len() - 1;
                self.index.insert(version.to_string(), slot);
                slot
            }
        };
        self.series[slot].entries.push(entry);
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn series(&self) -> &[VersionSeries] {
        &self.series
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.version.as_str())
    }

    pub fn entries(&self, version: &str) -> Option<&[Entry]> {
        self.index
            .get(version)
            .map(|slot| self.series[*slot].entries.as_slice())
    }

    pub fn entry_count(&self) -> usize {
        self.series.iter().map(|s| s.entries.len()).sum()
    }

    /// Dates per version with the values stripped.
    pub fn shape(&self) -> Vec<(String, Vec<NaiveDate>)> {
        self.series
            .iter()
            .map(|s| {
                (
                    s.version.clone(),
                    s.entries.iter().map(|e| e.date).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    pub fn shape_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.range.to_string().as_bytes());
        for (version, dates) in self.shape() {
            hasher.update(version.as_bytes());
            hasher.update([0u8]);
            for date in dates {
                hasher.update(date.to_string().as_bytes());
                hasher.update([b';']);
            }
            hasher.update([b'\n']);
        }
        let digest = hasher.finalize();
        format!("{digest:x}")
    }

    pub fn totals_by_day(&self) -> BTreeMap<NaiveDate, u64> {
        let mut totals = BTreeMap::new();
        for entry in self.series.iter().flat_map(|s| s.entries.iter()) {
            let total = totals.entry(entry.date).or_insert(0u64);
            *total = total.saturating_add(entry.value);
        }
        totals
    }
}
