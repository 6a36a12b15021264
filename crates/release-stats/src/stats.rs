use serde::Serialize;

use crate::result::{Entry, GenerationResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStats {
    pub version: String,
    pub days: usize,
    pub total: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
}

pub fn compute_stats(version: &str, entries: &[Entry]) -> Option<SeriesStats> {
    if entries.is_empty() {
        return None;
    }

    let mut values = entries.iter().map(|e| e.value).collect::<Vec<_>>();
    values.sort_unstable();

    let len = values.len();
    let total = values.iter().copied().fold(0u64, u64::saturating_add);
    let mean = values.iter().map(|v| *v as f64).sum::<f64>() / (len as f64);
    let median = if len.is_multiple_of(2) {
        (values[(len / 2) - 1] as f64 + values[len / 2] as f64) / 2.0
    } else {
        values[len / 2] as f64
    };

    Some(SeriesStats {
        version: version.to_string(),
        days: len,
        total,
        min: *values.first().unwrap_or(&0),
        max: *values.last().unwrap_or(&0),
        mean,
        median,
    })
}

pub fn summarize(result: &GenerationResult) -> Vec<SeriesStats> {
    result
        .series()
        .iter()
        .filter_map(|series| compute_stats(&series.version, &series.entries))
        .collect()
}
