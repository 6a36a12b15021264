use chrono::NaiveDate;
use thiserror::Error;

use crate::range::DateRange;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no release or data set information available for range {0}")]
    NoDataAvailable(DateRange),
    #[error("no release information for {0}")]
    MissingReleaseCoverage(NaiveDate),
    #[error("no data set information for {0}")]
    MissingDataSetCoverage(NaiveDate),
    #[error("invalid range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StatsResult<T> = Result<T, StatsError>;
