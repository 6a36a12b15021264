use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_stats::cli::{Args, Command};
use release_stats::config::load_catalog;
use release_stats::error::{StatsError, StatsResult};
use release_stats::stats::summarize;

fn main() -> StatsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog = load_catalog(&args.catalog)?;

    match args.command {
        Command::Generate {
            range,
            seed,
            output,
            summary,
        } => {
            let range = range.to_range()?;
            let result = match seed {
                Some(seed) => catalog.generate_seeded(range, seed)?,
                None => catalog.generate(range, &mut rand::thread_rng())?,
            };

            if let Some(path) = output.as_ref() {
                fs::write(path, serde_json::to_vec_pretty(&result)?)?;
                println!("wrote statistics: {}", path.display());
            } else if !summary {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }

            if summary {
                println!("range={}", result.range());
                println!("shape_sha256={}", result.shape_digest());
                for stats in summarize(&result) {
                    println!(
                        "{} days={} total={} min={} max={} mean={:.1} median={:.1}",
                        stats.version,
                        stats.days,
                        stats.total,
                        stats.min,
                        stats.max,
                        stats.mean,
                        stats.median
                    );
                }
            }
        }
        Command::Inspect { range } => {
            let range = range.to_range()?;
            println!("data sets:");
            for data_set in catalog.data_sets_in_range(&range) {
                println!("- {} {:?}", data_set.range(), data_set.data());
            }
            println!("releases:");
            for release in catalog.releases_in_range(&range) {
                let versions = release.data();
                println!(
                    "- {} current={} maintenance={} next={}",
                    release.range(),
                    versions.current,
                    versions.maintenance.as_deref().unwrap_or("none"),
                    versions.next.as_deref().unwrap_or("none")
                );
            }
            println!("events:");
            for event in catalog.events_in_range(&range) {
                println!("- {} {:?}", event.date, event.kind);
            }
        }
        Command::Check { range } => {
            let range = range.to_range()?;
            let gaps = catalog.coverage_gaps(&range);
            if gaps.is_empty() {
                println!("range {range} is fully covered");
                return Ok(());
            }
            for gap in &gaps {
                println!("{gap}");
            }
            return Err(StatsError::InvalidCatalog(format!(
                "{} coverage gap(s) in range {range}",
                gaps.len()
            )));
        }
    }

    Ok(())
}
