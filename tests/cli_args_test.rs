//! Command line parsing and configuration resolution.

use clap::Parser;
use rocchio::cli::args::{OutputFormat, RocchioArgs};
use rocchio::cli::commands::resolve_config;
use rocchio::error::RocchioError;
use tempfile::TempDir;

fn parse(extra: &[&str], precision: &str) -> Result<RocchioArgs, clap::Error> {
    let mut argv = vec!["rocchio"];
    argv.extend_from_slice(extra);
    argv.extend_from_slice(&["key", "cx", precision, "jaguar"]);
    RocchioArgs::try_parse_from(argv)
}

#[test]
fn test_precision_bounds_are_inclusive() {
    assert_eq!(parse(&[], "0").unwrap().precision, 0.0);
    assert_eq!(parse(&[], "1").unwrap().precision, 1.0);
    assert_eq!(parse(&[], "0.75").unwrap().precision, 0.75);
}

// Out-of-range or malformed precision exits before any search is made.
#[test]
fn test_precision_rejected_before_session() {
    for bad in ["1.5", "-0.2", "abc", "NaN"] {
        assert!(parse(&[], bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn test_missing_positionals() {
    assert!(RocchioArgs::try_parse_from(["rocchio", "key", "cx", "0.9"]).is_err());
}

#[test]
fn test_flags() {
    let args = parse(&["-vv", "--format", "json", "--pretty"], "0.9").unwrap();
    assert_eq!(args.verbosity(), 3);
    assert_eq!(args.output_format, OutputFormat::Json);
    assert!(args.pretty);

    let args = parse(&["-q", "-v"], "0.9").unwrap();
    assert_eq!(args.verbosity(), 0);
}

#[test]
fn test_config_file_and_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rocchio.json");
    std::fs::write(
        &path,
        r#"{"feedback": {"max_iterations": 4}, "rocchio": {"beta": 0.8}}"#,
    )
    .unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let args = parse(&["--config", &path_arg], "0.6").unwrap();
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.feedback.max_iterations, 4);
    assert_eq!(config.feedback.desired_precision, 0.6);
    assert_eq!(config.rocchio.beta, 0.8);
    assert_eq!(config.rocchio.alpha, 1.0);

    let args = parse(&["--config", &path_arg, "--max-iterations", "2"], "0.6").unwrap();
    assert_eq!(resolve_config(&args).unwrap().feedback.max_iterations, 2);
}

#[test]
fn test_bad_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let args = parse(&["--config", &path_arg], "0.6").unwrap();
    assert!(matches!(
        resolve_config(&args),
        Err(RocchioError::InvalidConfig(_))
    ));
}
