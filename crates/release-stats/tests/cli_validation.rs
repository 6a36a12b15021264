use clap::Parser;
use release_stats::cli::{parse_date, parse_range, Args, Command};

#[test]
fn parses_iso_dates() {
    let date = parse_date("2017-06-08").expect("valid date");
    assert_eq!(date.to_string(), "2017-06-08");
}

#[test]
fn rejects_malformed_dates() {
    for value in ["2017/06/08", "2017-13-01", "", "yesterday"] {
        let err = parse_date(value).expect_err("date should be rejected");
        assert!(
            err.to_string().contains("invalid date"),
            "unexpected error for '{value}': {err}"
        );
    }
}

#[test]
fn rejects_reversed_range() {
    let err = parse_range("2017-02-01", "2017-01-01").expect_err("reversed range");
    assert!(
        err.to_string().contains("invalid argument"),
        "unexpected error: {err}"
    );
}

#[test]
fn generate_command_accepts_seed_and_summary() {
    let args = Args::try_parse_from([
        "release-stats",
        "--catalog",
        "custom.yaml",
        "generate",
        "--from",
        "2017-01-01",
        "--to",
        "2017-01-31",
        "--seed",
        "42",
        "--summary",
    ])
    .expect("args should parse");

    assert_eq!(args.catalog.to_string_lossy(), "custom.yaml");
    let Command::Generate {
        range,
        seed,
        output,
        summary,
    } = args.command
    else {
        panic!("expected generate command");
    };
    assert_eq!(seed, Some(42));
    assert!(output.is_none());
    assert!(summary);
    assert_eq!(range.to_range().expect("range").len_days(), 31);
}

#[test]
fn check_command_requires_both_bounds() {
    let err = Args::try_parse_from(["release-stats", "check", "--from", "2017-01-01"])
        .expect_err("missing --to");
    assert!(err.to_string().contains("--to"), "unexpected error: {err}");
}
