//! Exercise expansion engine.
//!
//! Every exercise expands to an ordered run of segments. Expansion is pure: the
//! only shared input is the workout's default rest segment, which is passed in
//! explicitly and never modified.

use std::time::Duration;

use crate::workouts::exercise::{
    CadenceLadder, CoolDown, Custom, Exercise, FatBurner, FtpInterval, SingleLeg, TextEvent,
    Vo2, WarmUp, WorkoutScript, Z5r,
};
use crate::workouts::types::{
    power_fraction, whole_seconds, Ramp, Segment, SegmentTextEvent, SteadyState,
    WorkoutDocument, SPORT_TYPE,
};

/// Cadences called out during a fat burner stage, one every 10 seconds.
const FAT_BURNER_CADENCES: [u32; 13] = [70, 75, 80, 85, 90, 95, 100, 105, 110, 115, 120, 125, 130];
const FAT_BURNER_STEP_SECONDS: u32 = 10;

/// Up from 85 RPM to 120 RPM and back down again.
const CADENCE_LADDER_STEPS: [u32; 15] = [
    85, 90, 95, 100, 105, 110, 115, 120, 115, 110, 105, 100, 95, 90, 85,
];
const CADENCE_LADDER_STEP: Duration = Duration::from_secs(60);

const THRESHOLD_MESSAGE: &str = "Start at threshold";
const RIGHT_LEG_MESSAGE: &str = "Right Leg";
const LEFT_LEG_MESSAGE: &str = "Left Leg";

/// Rest segment shared by every exercise of a workout; only its duration is
/// ever overridden.
pub fn default_rest_segment(restpower: u32) -> SteadyState {
    SteadyState::at_power(0, power_fraction(restpower))
}

/// Expand one exercise into its segments.
pub fn expand(exercise: &Exercise, default_rest: &SteadyState) -> Vec<Segment> {
    let segments = match exercise {
        Exercise::WarmUp(e) => expand_warmup(e),
        Exercise::CoolDown(e) => expand_cooldown(e),
        Exercise::Vo2(e) => expand_vo2(e, default_rest),
        Exercise::FatBurner(e) => expand_fat_burner(e, default_rest),
        Exercise::FtpInterval(e) => expand_ftp_interval(e, default_rest),
        Exercise::Z5r(e) => expand_z5r(e, default_rest),
        Exercise::CadenceLadder(e) => expand_cadence_ladder(e),
        Exercise::SingleLeg(e) => expand_single_leg(e),
        Exercise::Custom(e) => expand_custom(e),
    };

    tracing::debug!(
        exercise = exercise.name(),
        segments = segments.len(),
        "Expanded exercise"
    );
    segments
}

/// Build the full document for a workout script.
pub fn assemble(script: &WorkoutScript) -> WorkoutDocument {
    let default_rest = default_rest_segment(script.restpower);

    let description = script
        .exercises
        .iter()
        .map(Exercise::name)
        .collect::<Vec<_>>()
        .join(", ");

    let segments = script
        .exercises
        .iter()
        .flat_map(|exercise| expand(exercise, &default_rest))
        .collect();

    WorkoutDocument {
        author: script.author.clone(),
        name: script.name.clone(),
        description,
        sport_type: SPORT_TYPE,
        segments,
    }
}

pub fn expand_warmup(warmup: &WarmUp) -> Vec<Segment> {
    vec![Segment::Warmup(Ramp {
        duration_seconds: whole_seconds(warmup.duration),
        power_low: warmup.power_low,
        power_high: warmup.power_high,
    })]
}

pub fn expand_cooldown(cooldown: &CoolDown) -> Vec<Segment> {
    vec![Segment::Cooldown(Ramp {
        duration_seconds: whole_seconds(cooldown.duration),
        power_low: cooldown.power_low,
        power_high: cooldown.power_high,
    })]
}

pub fn expand_vo2(vo2: &Vo2, default_rest: &SteadyState) -> Vec<Segment> {
    let work = SteadyState::at_power(whole_seconds(vo2.duration), power_fraction(vo2.power))
        .with_cadence(vo2.cadence);
    let rest = default_rest.with_duration(whole_seconds(vo2.rest));

    work_and_rest(vo2.sets, work, rest)
}

pub fn expand_fat_burner(fat_burner: &FatBurner, default_rest: &SteadyState) -> Vec<Segment> {
    let text_events = FAT_BURNER_CADENCES
        .iter()
        .zip((0..).step_by(FAT_BURNER_STEP_SECONDS as usize))
        .map(|(cadence, offset)| SegmentTextEvent::new(offset, format!("Cadence of {}", cadence)))
        .collect();

    let work = SteadyState::at_power(
        whole_seconds(fat_burner.duration),
        power_fraction(fat_burner.power),
    )
    .with_text_events(text_events);
    let rest = default_rest.with_duration(whole_seconds(fat_burner.rest));

    work_and_rest(fat_burner.sets, work, rest)
}

pub fn expand_ftp_interval(ftp: &FtpInterval, default_rest: &SteadyState) -> Vec<Segment> {
    let work = SteadyState::at_power(whole_seconds(ftp.duration), power_fraction(ftp.power))
        .with_cadence(ftp.cadence);
    let rest = default_rest.with_duration(whole_seconds(ftp.rest));

    work_and_rest(ftp.sets, work, rest)
}

pub fn expand_z5r(z5r: &Z5r, default_rest: &SteadyState) -> Vec<Segment> {
    let work = SteadyState::at_power(whole_seconds(z5r.duration), power_fraction(z5r.power))
        .with_text_events(vec![
            SegmentTextEvent::new(0, THRESHOLD_MESSAGE),
            SegmentTextEvent::new(whole_seconds(z5r.threshold_duration), z5r.effort.message()),
        ]);
    let rest = default_rest.with_duration(whole_seconds(z5r.rest));

    work_and_rest(z5r.sets, work, rest)
}

/// The ladder is emitted once regardless of `sets`.
pub fn expand_cadence_ladder(ladder: &CadenceLadder) -> Vec<Segment> {
    let power = power_fraction(ladder.power);
    let step = whole_seconds(CADENCE_LADDER_STEP);

    CADENCE_LADDER_STEPS
        .iter()
        .map(|rpm| {
            Segment::SteadyState(
                SteadyState::at_power(step, power)
                    .with_text_events(vec![SegmentTextEvent::new(0, format!("{} RPM", rpm))]),
            )
        })
        .collect()
}

pub fn expand_single_leg(single_leg: &SingleLeg) -> Vec<Segment> {
    let half = whole_seconds(single_leg.duration / 2);
    let leg = |message: &str| {
        Segment::SteadyState(
            SteadyState::at_power(half, power_fraction(single_leg.power))
                .with_cadence(Some(single_leg.cadence))
                .with_text_events(vec![SegmentTextEvent::new(0, message)]),
        )
    };

    (0..single_leg.sets)
        .flat_map(|_| [leg(RIGHT_LEG_MESSAGE), leg(LEFT_LEG_MESSAGE)])
        .collect()
}

pub fn expand_custom(custom: &Custom) -> Vec<Segment> {
    let segment = SteadyState {
        duration_seconds: whole_seconds(custom.duration),
        power: custom.power.map(power_fraction),
        cadence: custom.cadence,
        cadence_high: custom.cadence_high,
        cadence_low: custom.cadence_low,
        power_high: custom.power_high.map(power_fraction),
        power_low: custom.power_low.map(power_fraction),
        zone: custom.zone,
        slop: custom.slop,
        text_events: custom
            .text_events
            .as_deref()
            .map(convert_text_events)
            .unwrap_or_default(),
    };

    (0..custom.sets)
        .map(|_| Segment::SteadyState(segment.clone()))
        .collect()
}

fn convert_text_events(events: &[TextEvent]) -> Vec<SegmentTextEvent> {
    events
        .iter()
        .map(|event| SegmentTextEvent::new(whole_seconds(event.offset), event.message.clone()))
        .collect()
}

fn work_and_rest(sets: u32, work: SteadyState, rest: SteadyState) -> Vec<Segment> {
    (0..sets)
        .flat_map(|_| {
            [
                Segment::SteadyState(work.clone()),
                Segment::SteadyState(rest.clone()),
            ]
        })
        .collect()
}
