use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use release_stats::{
    Catalog, DateRange, Event, EventType, ReleaseVersions, WeekdayTotals, Windowed,
};

const WEEKLY: [u64; 7] = [5_000, 5_200, 5_400, 5_100, 4_800, 1_500, 1_200];

fn day(ordinal: u32) -> NaiveDate {
    NaiveDate::from_yo_opt(2017, ordinal).expect("valid ordinal")
}

fn range(from: u32, to: u32) -> DateRange {
    DateRange::new(day(from), day(to)).expect("valid range")
}

// Two data sets and three releases covering every day of 2017.
fn year_catalog() -> Catalog {
    Catalog::new(
        &[
            Windowed::new(range(1, 180), WeekdayTotals::new(WEEKLY)),
            Windowed::new(range(181, 365), WeekdayTotals::new([3_000; 7])),
        ],
        &[
            Windowed::new(
                range(1, 90),
                ReleaseVersions::current("1.4.3").with_next("1.5.0.RC1"),
            ),
            Windowed::new(
                range(91, 250),
                ReleaseVersions::current("1.5.1").with_maintenance("1.4.4"),
            ),
            Windowed::new(
                range(251, 365),
                ReleaseVersions::current("1.5.4")
                    .with_maintenance("1.4.7")
                    .with_next("2.0.0.M2"),
            ),
        ],
        &[Event::new(day(120), EventType::Scale { factor: 3.0 })],
    )
}

// Share each version receives under `year_catalog`; every version string is unique to one release.
fn share_of(version: &str) -> f64 {
    match version {
        "1.4.3" => 0.90,
        "1.5.0.RC1" => 0.02,
        "1.5.1" => 0.92,
        "1.4.4" => 0.10,
        "1.5.4" => 0.90,
        "1.4.7" => 0.08,
        "2.0.0.M2" => 0.02,
        other => panic!("unexpected version {other}"),
    }
}

fn baseline(date: NaiveDate) -> u64 {
    if date.ordinal() <= 180 {
        WEEKLY[date.weekday().num_days_from_monday() as usize]
    } else {
        3_000
    }
}

proptest! {
    #[test]
    fn repeated_generation_keeps_its_shape(
        start in 1u32..=365,
        len in 0u32..60,
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let end = (start + len).min(365);
        let catalog = year_catalog();
        let r = range(start, end);
        let a = catalog.generate_seeded(r, seed_a).expect("generate a");
        let b = catalog.generate_seeded(r, seed_b).expect("generate b");

        prop_assert_eq!(a.shape(), b.shape());
        prop_assert_eq!(a.shape_digest(), b.shape_digest());

        let days = r.days().collect::<Vec<_>>();
        let covered = a
            .totals_by_day()
            .keys()
            .copied()
            .collect::<Vec<_>>();
        prop_assert_eq!(covered, days);
    }

    #[test]
    fn every_value_stays_within_jitter_bounds(
        start in 1u32..=365,
        len in 0u32..30,
        seed in any::<u64>(),
    ) {
        let end = (start + len).min(365);
        let catalog = year_catalog();
        let result = catalog.generate_seeded(range(start, end), seed).expect("generate");
        for series in result.series() {
            let share = share_of(&series.version);
            for entry in &series.entries {
                if entry.date == day(120) {
                    continue;
                }
                let ideal = baseline(entry.date) as f64 * share;
                let value = entry.value as f64;
                prop_assert!(
                    value >= (ideal * 0.95).floor() - 1.0 && value < ideal * 1.045,
                    "{} on {}: {} outside jitter bounds around {}",
                    series.version,
                    entry.date,
                    value,
                    ideal
                );
            }
        }
    }
}
