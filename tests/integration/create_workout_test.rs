//! End-to-end tests: script on disk in, `.zwo` file on disk out.

use std::path::{Path, PathBuf};

use zwocreate::app::{create_workout, describe_error, CreateRequest};
use zwocreate::storage::config::AppConfig;
use zwocreate::workouts::types::{OutputError, WorkoutError};

const FRIDAY: &str = r#"author = "Rebecca Black"
name = "Friday"
restpower = 80

[[exercise]]
kind = "WarmUp"
duration = "10m"

[[exercise]]
kind = "FatBurner"
sets = 2
power = 100

[[exercise]]
kind = "CoolDown"
duration = "5m"
"#;

fn write_script(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("friday.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_create_into_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);
    let output = dir.path().join("friday.zwo");

    let request = CreateRequest {
        input,
        output: Some(output.clone()),
        force: false,
    };
    let path = create_workout(&request, &AppConfig::default()).unwrap();
    assert_eq!(path, output);

    let xml = std::fs::read_to_string(&path).unwrap();
    assert!(xml.starts_with("<workout_file>\n  <author>Rebecca Black</author>\n"));
    assert!(xml.contains("<description>WarmUp, FatBurner, CoolDown</description>"));
    assert!(xml.contains("<Warmup Duration=\"600\" PowerLow=\"0.25\" PowerHigh=\"0.75\"/>"));
    assert_eq!(xml.matches("<SteadyState Duration=\"120\" Power=\"1.0\">").count(), 2);
    assert_eq!(xml.matches("<SteadyState Duration=\"60\" Power=\"0.8\"/>").count(), 2);
    assert_eq!(xml.matches("message=\"Cadence of 70\"").count(), 2);
    assert!(xml.contains("<textevent timeoffset=\"120\" message=\"Cadence of 130\"/>"));
    assert!(xml.ends_with("</workout_file>\n"));
}

#[test]
fn test_create_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);
    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let request = CreateRequest {
        input,
        output: Some(out_dir.clone()),
        force: false,
    };
    let path = create_workout(&request, &AppConfig::default()).unwrap();

    assert_eq!(path, out_dir.join("workout.zwo"));
    assert!(path.is_file());
}

#[test]
fn test_create_appends_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);

    let request = CreateRequest {
        input,
        output: Some(dir.path().join("outputFile")),
        force: false,
    };
    let path = create_workout(&request, &AppConfig::default()).unwrap();

    assert_eq!(path, dir.path().join("outputFile.zwo"));
    assert!(path.is_file());
}

#[test]
fn test_create_missing_directory_needs_force() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);
    let output = dir.path().join("does/not/exist/outputFile.zwo");

    let mut request = CreateRequest {
        input,
        output: Some(output.clone()),
        force: false,
    };
    let err = create_workout(&request, &AppConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::Output(OutputError::MissingDirectory)
    ));
    assert_eq!(
        describe_error(&request.input, &err),
        "Output directory does not exist if \"zwocreate\" should create it re-run with -f flag"
    );
    assert!(!output.exists());

    request.force = true;
    let path = create_workout(&request, &AppConfig::default()).unwrap();
    assert_eq!(path, output);
    assert!(output.is_file());
}

#[test]
fn test_create_missing_directory_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);
    let output = dir.path().join("nested/friday.zwo");

    let mut config = AppConfig::default();
    config.output.create_missing_dirs = true;

    let request = CreateRequest {
        input,
        output: Some(output.clone()),
        force: false,
    };
    create_workout(&request, &config).unwrap();
    assert!(output.is_file());
}

#[test]
fn test_create_uses_configured_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), FRIDAY);

    let mut config = AppConfig::default();
    config.output.default_file_name = "friday.zwo".to_string();

    let request = CreateRequest {
        input,
        output: Some(dir.path().to_path_buf()),
        force: false,
    };
    let path = create_workout(&request, &config).unwrap();
    assert_eq!(path, dir.path().join("friday.zwo"));
}

#[test]
fn test_bad_script_reports_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(dir.path(), "author = \"A\"\nname = \"B\"\nrestpower = = 80\n");
    let output = dir.path().join("friday.zwo");

    let request = CreateRequest {
        input,
        output: Some(output.clone()),
        force: false,
    };
    let err = create_workout(&request, &AppConfig::default()).unwrap_err();

    let message = describe_error(&request.input, &err);
    assert!(
        message.starts_with("There was an error with script \"friday.toml\" at line 3: "),
        "{}",
        message
    );
    assert!(!output.exists());
}

#[test]
fn test_missing_script() {
    let dir = tempfile::tempdir().unwrap();
    let request = CreateRequest {
        input: dir.path().join("missing.toml"),
        output: Some(dir.path().join("friday.zwo")),
        force: false,
    };

    let err = create_workout(&request, &AppConfig::default()).unwrap_err();
    assert!(describe_error(&request.input, &err).starts_with("Could not read script"));
    assert!(!dir.path().join("friday.zwo").exists());
}

#[test]
fn test_overlong_duration_is_a_script_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_script(
        dir.path(),
        "author = \"A\"\nname = \"B\"\nrestpower = 80\n\n[[exercise]]\nkind = \"VO2\"\nsets = 2\nduration = \"2000000h\"\npower = 120\n",
    );
    let output = dir.path().join("friday.zwo");

    let request = CreateRequest {
        input,
        output: Some(output.clone()),
        force: false,
    };
    let err = create_workout(&request, &AppConfig::default()).unwrap_err();

    assert!(matches!(err, WorkoutError::Parse(_)));
    assert!(describe_error(&request.input, &err).contains("is too long"));
    assert!(!output.exists());
}
