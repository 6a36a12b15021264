use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CATALOG_PATH;
use crate::error::{StatsError, StatsResult};
use crate::range::DateRange;

#[derive(Debug, Parser)]
#[command(
    name = "release-stats",
    about = "synthetic per-version download statistics"
)]
pub struct Args {
    #[arg(long, env = "RELEASE_STATS_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RangeArgs {
    /// First day, YYYY-MM-DD.
    #[arg(long)]
    pub from: String,
    /// Last day (inclusive), YYYY-MM-DD.
    #[arg(long)]
    pub to: String,
}

impl RangeArgs {
    pub fn to_range(&self) -> StatsResult<DateRange> {
        parse_range(&self.from, &self.to)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Generate {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, env = "RELEASE_STATS_SEED")]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        summary: bool,
    },
    Inspect {
        #[command(flatten)]
        range: RangeArgs,
    },
    Check {
        #[command(flatten)]
        range: RangeArgs,
    },
}

pub fn parse_date(value: &str) -> StatsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        StatsError::InvalidArgument(format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
    })
}

pub fn parse_range(from: &str, to: &str) -> StatsResult<DateRange> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    DateRange::new(from, to).map_err(|e| StatsError::InvalidArgument(e.to_string()))
}
