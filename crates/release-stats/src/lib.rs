pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod range;
pub mod result;
pub mod stats;
pub mod synth;
pub mod window;

pub use catalog::Catalog;
pub use error::{StatsError, StatsResult};
pub use event::{Event, EventType};
pub use range::DateRange;
pub use result::{Entry, GenerationResult, VersionSeries};
pub use window::{DataSet, Release, ReleaseVersions, WeekdayTotals, Windowed};
