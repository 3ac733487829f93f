use clap::{CommandFactory, FromArgMatches, Parser};
use phigauge::config::ScoringParams;
use phigauge::error::PhiError;
use std::io::Write;

// Minimal harness so tests can exercise real clap parsing.
#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    params: ScoringParams,
}

fn parse(args: &[&str]) -> (ScoringParams, clap::ArgMatches) {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(argv);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.params, matches)
}

fn write_json(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_defaults_match_policy() {
    let p = ScoringParams::default();
    assert_eq!(p.min_side, 10);
    assert_eq!(p.decay, 3.0);
    assert_eq!(p.threshold_excellent, 0.05);
    assert_eq!(p.threshold_good, 0.15);
    assert_eq!(p.threshold_fair, 0.3);
    assert!(p.validate().is_ok());
}

#[test]
fn test_cli_defaults_equal_struct_defaults() {
    let (params, _) = parse(&[]);
    assert_eq!(params, ScoringParams::default());
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = write_json(r#"{ "decay": 2.0 }"#);
    let p = ScoringParams::load_from_file(file.path()).unwrap();
    assert_eq!(p.decay, 2.0);
    assert_eq!(p.min_side, 10);
}

#[test]
fn test_load_rejects_bad_json() {
    let file = write_json("{ decay: ");
    assert!(matches!(
        ScoringParams::load_from_file(file.path()),
        Err(PhiError::Json(_))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        ScoringParams::load_from_file("does/not/exist.json"),
        Err(PhiError::Io(_))
    ));
}

#[test]
fn test_load_defers_validation() {
    let file = write_json(r#"{ "threshold_good": 0.01 }"#);
    let p = ScoringParams::load_from_file(file.path()).unwrap();
    assert!(matches!(p.validate(), Err(PhiError::Config(_))));
}

#[test]
fn test_cli_flag_repairs_bad_file_value() {
    let file = write_json(r#"{ "decay": -1.0 }"#);
    let mut from_file = ScoringParams::load_from_file(file.path()).unwrap();

    let (cli_params, matches) = parse(&["--decay", "2"]);
    from_file.merge_from_cli(&cli_params, &matches);

    assert_eq!(from_file.decay, 2.0);
    assert!(from_file.validate().is_ok());
}

#[test]
fn test_merge_only_applies_explicit_flags() {
    let file = write_json(r#"{ "decay": 2.0, "min_side": 20 }"#);
    let mut from_file = ScoringParams::load_from_file(file.path()).unwrap();

    let (cli_params, matches) = parse(&["--min-side", "5"]);
    from_file.merge_from_cli(&cli_params, &matches);

    assert_eq!(from_file.min_side, 5); // Typed on the command line
    assert_eq!(from_file.decay, 2.0); // Clap default must not clobber the file
}

#[test]
fn test_validate_rejects_zero_min_side() {
    let p = ScoringParams {
        min_side: 0,
        ..Default::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn test_validate_rejects_unordered_thresholds() {
    let p = ScoringParams {
        threshold_excellent: 0.2,
        threshold_good: 0.1,
        ..Default::default()
    };
    assert!(p.validate().is_err());
}
