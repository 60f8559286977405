//! Unit tests for exercise expansion and document assembly.

use std::time::Duration;

use zwocreate::workouts::engine::{assemble, default_rest_segment, expand};
use zwocreate::workouts::exercise::{
    CoolDown, Custom, Exercise, FatBurner, FtpInterval, SingleLeg, Vo2, WarmUp, WorkoutScript, Z5r,
    Z5rType,
};
use zwocreate::workouts::types::{Segment, SegmentType};

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn script(exercises: Vec<Exercise>) -> WorkoutScript {
    WorkoutScript {
        author: "Andrew Reitz".to_string(),
        name: "Friday".to_string(),
        restpower: 83,
        exercises,
    }
}

#[test]
fn test_rest_durations_follow_variant_rules() {
    let rest = default_rest_segment(83);
    let cases: Vec<(Exercise, u32, u32, u32)> = vec![
        // exercise, sets, work, rest
        (Vo2::new(4, minutes(3), 120, None).into(), 4, 180, 90),
        (FatBurner::new(7, 110).into(), 7, 120, 60),
        (FtpInterval::new(2, minutes(20), 96, None).into(), 2, 1200, 400),
        (
            Z5r::new(3, 105, Z5rType::Shift, minutes(2), Duration::from_secs(45)).into(),
            3,
            120,
            120,
        ),
    ];

    for (exercise, sets, work, rest_seconds) in cases {
        let segments = expand(&exercise, &rest);
        let total: u32 = segments.iter().map(Segment::duration_seconds).sum();

        assert_eq!(segments.len() as u32, sets * 2, "{}", exercise.name());
        assert_eq!(total, sets * (work + rest_seconds), "{}", exercise.name());

        for pair in segments.chunks(2) {
            assert_eq!(pair[0].duration_seconds(), work);
            assert_eq!(pair[1].duration_seconds(), rest_seconds);
            assert_eq!(pair[1].as_steady_state().unwrap().power, Some(0.83));
        }
    }
}

#[test]
fn test_description_uses_custom_names() {
    let document = assemble(&script(vec![
        WarmUp::new(minutes(5)).into(),
        Custom::new("Power High and Low Test", minutes(1)).into(),
        Custom::new("Slop Test", minutes(1)).into(),
    ]));

    assert_eq!(
        document.description,
        "WarmUp, Power High and Low Test, Slop Test"
    );
}

#[test]
fn test_segments_follow_authoring_order() {
    let exercises: Vec<Exercise> = vec![
        WarmUp::new(minutes(5)).into(),
        Vo2::new(2, minutes(3), 120, None).into(),
        SingleLeg::new(1, 76).into(),
        CoolDown::new(minutes(5)).into(),
    ];
    let document = assemble(&script(exercises.clone()));

    let rest = default_rest_segment(83);
    let expected: Vec<Segment> = exercises.iter().flat_map(|e| expand(e, &rest)).collect();
    assert_eq!(document.segments, expected);

    let types: Vec<SegmentType> = document.segments.iter().map(Segment::segment_type).collect();
    assert_eq!(types.first(), Some(&SegmentType::Warmup));
    assert_eq!(types.last(), Some(&SegmentType::Cooldown));
    assert_eq!(document.segments.len(), 1 + 4 + 2 + 1);
}

#[test]
fn test_power_conversion_is_exact() {
    let document = assemble(&script(vec![
        FtpInterval::new(1, minutes(20), 96, None).into(),
        FatBurner::new(1, 100).into(),
    ]));

    assert_eq!(document.segments[0].as_steady_state().unwrap().power, Some(0.96));
    assert_eq!(document.segments[2].as_steady_state().unwrap().power, Some(1.0));
}

#[test]
fn test_zero_sets_expand_to_nothing() {
    let rest = default_rest_segment(75);
    assert!(expand(&Vo2::new(0, minutes(3), 120, None).into(), &rest).is_empty());
    assert!(expand(&SingleLeg::new(0, 76).into(), &rest).is_empty());
}
