//! Unit tests for reading workout scripts.

use std::time::Duration;

use zwocreate::workouts::exercise::{Exercise, FatBurner, FtpInterval, Vo2};
use zwocreate::workouts::parser_script::{parse_script, parse_script_file};
use zwocreate::workouts::types::WorkoutParseError;

#[test]
fn test_parse_duration_forms() {
    let script = parse_script(
        r#"
author = "Andrew Reitz"
name = "Durations"
restpower = 80

[[exercise]]
kind = "VO2"
sets = 4
duration = 180
power = 120

[[exercise]]
kind = "FTPInterval"
sets = 2
duration = "1h30m"
power = 96
cadence = 85

[[exercise]]
kind = "FatBurner"
sets = 3
power = 100
duration = "90s"
"#,
    )
    .unwrap();

    assert_eq!(
        script.exercises,
        vec![
            Exercise::from(Vo2::new(4, Duration::from_secs(180), 120, None)),
            Exercise::from(FtpInterval::new(2, Duration::from_secs(5400), 96, Some(85))),
            Exercise::from(FatBurner::with_duration(3, 100, Duration::from_secs(90))),
        ]
    );
}

#[test]
fn test_parse_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("friday.toml");
    std::fs::write(
        &path,
        "author = \"A\"\nname = \"B\"\nrestpower = 70\n\n[[exercise]]\nkind = \"CadenceLadder\"\npower = 85\n",
    )
    .unwrap();

    let script = parse_script_file(&path).unwrap();
    assert_eq!(script.restpower, 70);
    assert_eq!(script.exercises.len(), 1);
    assert_eq!(script.exercises[0].name(), "CadenceLadder");
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_script_file(&dir.path().join("missing.toml"));

    assert!(matches!(result, Err(WorkoutParseError::IoError(_))));
}

#[test]
fn test_parse_missing_header_field() {
    let err = parse_script("author = \"A\"\nrestpower = 70\n").unwrap_err();

    match err {
        WorkoutParseError::InvalidScript { message, .. } => {
            assert!(message.contains("name"), "{}", message);
        }
        other => panic!("Expected InvalidScript, got {:?}", other),
    }
}

#[test]
fn test_parse_bad_duration_reports_line() {
    let content = "author = \"A\"\nname = \"B\"\nrestpower = 70\n\n[[exercise]]\nkind = \"WarmUp\"\nduration = \"five minutes\"\n";

    match parse_script(content).unwrap_err() {
        WorkoutParseError::InvalidScript { line, message } => {
            assert!(message.contains("five minutes"), "{}", message);
            assert_eq!(line, Some(5));
        }
        other => panic!("Expected InvalidScript, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_durations_too_long_for_a_workout() {
    let content = "author = \"A\"\nname = \"B\"\nrestpower = 70\n\n[[exercise]]\nkind = \"VO2\"\nsets = 2\nduration = \"2000000h\"\npower = 120\n";

    match parse_script(content).unwrap_err() {
        WorkoutParseError::InvalidScript { message, .. } => {
            assert!(message.contains("duration `2000000h` is too long"), "{}", message);
        }
        other => panic!("Expected InvalidScript, got {:?}", other),
    }
}

#[test]
fn test_parse_syntax_error_reports_line() {
    let content = "author = \"A\"\nname = \"B\"\nrestpower = = 70\n";

    match parse_script(content).unwrap_err() {
        WorkoutParseError::InvalidScript { line, .. } => {
            assert_eq!(line, Some(3));
        }
        other => panic!("Expected InvalidScript, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_unknown_z5r_type() {
    let content = "author = \"A\"\nname = \"B\"\nrestpower = 70\n\n[[exercise]]\nkind = \"Z5R\"\nsets = 1\npower = 105\ntype = \"Sprint\"\n";

    assert!(matches!(
        parse_script(content),
        Err(WorkoutParseError::InvalidScript { .. })
    ));
}
