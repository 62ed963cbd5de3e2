//! Focused unit tests covering argument wiring and shared payload plumbing.

use super::helpers::{FixtureDir, scored_resorts, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use clap::Parser;
use powline_core::DriveRadius;
use rstest::rstest;

use crate::rank::{RankArgs, RankConfig};
use crate::score::{ScoreArgs, ScoreConfig};

#[rstest]
fn cli_parses_the_score_subcommand() {
    let cli = Cli::try_parse_from([
        "powline",
        "score",
        "--resorts",
        "conditions.json",
        "--date",
        "2026-01-14",
    ])
    .expect("score invocation should parse");
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.resorts, Some(Utf8PathBuf::from("conditions.json")));
            assert_eq!(args.date.map(|date| date.to_string()), Some("2026-01-14".to_owned()));
            assert!(args.holidays.is_none());
        }
        Command::Rank(_) => panic!("expected score command"),
    }
}

#[rstest]
#[case("45", DriveRadius::Within45)]
#[case("180", DriveRadius::Within180)]
#[case("fly", DriveRadius::Fly)]
fn cli_parses_the_rank_subcommand(#[case] radius: &str, #[case] expected: DriveRadius) {
    let cli = Cli::try_parse_from([
        "powline",
        "rank",
        "--resorts",
        "conditions.json",
        "--radius",
        radius,
    ])
    .expect("rank invocation should parse");
    match cli.command {
        Command::Rank(args) => {
            assert_eq!(args.resorts, Some(Utf8PathBuf::from("conditions.json")));
            assert_eq!(args.radius, Some(expected));
        }
        Command::Score(_) => panic!("expected rank command"),
    }
}

#[rstest]
fn cli_rejects_off_ladder_radii() {
    let err = Cli::try_parse_from(["powline", "rank", "--resorts", "c.json", "--radius", "90"])
        .expect_err("off-ladder radius should fail parsing");
    assert!(err.to_string().contains("unknown drive radius"));
}

#[rstest]
fn converting_score_without_resorts_errors() {
    let args = ScoreArgs::default();
    let err = ScoreConfig::try_from(args).expect_err("missing payload should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RESORTS);
            assert_eq!(env, ENV_SCORE_RESORTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_rank_without_resorts_errors() {
    let args = RankArgs::default();
    let err = RankConfig::try_from(args).expect_err("missing payload should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RESORTS);
            assert_eq!(env, ENV_RANK_RESORTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let fixtures = FixtureDir::new();
    let config = RankConfig {
        resorts: fixtures.root().join("absent.json"),
        profile: None,
        radius: None,
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RESORTS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let fixtures = FixtureDir::new();
    let config = ScoreConfig {
        resorts: fixtures.root().to_path_buf(),
        date: "2026-01-14".parse().expect("iso date"),
        holidays: None,
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_RESORTS);
            assert_eq!(path, fixtures.root());
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_payload_decodes_the_resorts_array() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_payload(&scored_resorts());

    let decoded = load_payload(&path).expect("payload should decode");
    assert_eq!(decoded, scored_resorts());
}

#[rstest]
fn load_payload_ignores_surrounding_metadata() {
    let fixtures = FixtureDir::new();
    let path = fixtures.root().join("conditions.json");
    let document = serde_json::json!({
        "resorts": scored_resorts(),
        "_meta": { "generated_at": "2026-01-14T06:00:00Z", "source": "aggregator" },
    });
    write_utf8(&path, document.to_string().as_bytes());

    let decoded = load_payload(&path).expect("payload should decode");
    assert_eq!(decoded.len(), 3);
}

#[rstest]
fn load_payload_rejects_invalid_json() {
    let fixtures = FixtureDir::new();
    let path = fixtures.root().join("conditions.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_payload(&path).expect_err("invalid json should error");
    match err {
        CliError::ParsePayload { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParsePayload, found {other:?}"),
    }
}

#[rstest]
fn load_payload_io_error_returns_open_error() {
    let fixtures = FixtureDir::new();
    let path = fixtures.root().join("absent.json");

    let err = load_payload(&path).expect_err("missing payload should error");
    match err {
        CliError::OpenPayload { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenPayload, found {other:?}"),
    }
}

#[rstest]
fn write_report_pretty_prints_with_a_trailing_newline() {
    let mut buffer: Vec<u8> = Vec::new();
    let report = serde_json::json!([{ "slug": "alta", "score": 31 }]);

    write_report(&mut buffer, &report).expect("report should write");

    let text = String::from_utf8(buffer).expect("report utf-8");
    assert!(text.ends_with('\n'));
    assert!(text.contains("\n  {"));
    let back: serde_json::Value = serde_json::from_str(&text).expect("report parses back");
    assert_eq!(back, report);
}
