//! Workout script (.toml) parser.
//!
//! A script holds the workout header followed by `[[exercise]]` tables. The
//! `kind` key picks the exercise and the remaining keys are its fields:
//!
//! ```toml
//! author = "Andrew Reitz"
//! name = "Friday"
//! restpower = 80
//!
//! [[exercise]]
//! kind = "WarmUp"
//! duration = "5m"
//!
//! [[exercise]]
//! kind = "FatBurner"
//! sets = 5
//! power = 100
//! ```
//!
//! Unknown keys are rejected. Warm-up and cool-down bounds accept `false` to
//! leave that end of the ramp out of the file.

use std::time::Duration;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::workouts::duration;
use crate::workouts::exercise::{
    CadenceLadder, CoolDown, Custom, Exercise, FatBurner, FtpInterval, SingleLeg, TextEvent,
    Vo2, WarmUp, WorkoutScript, Z5r, Z5rType, CADENCE_LADDER_POWER, COOLDOWN_POWER_HIGH,
    COOLDOWN_POWER_LOW, FAT_BURNER_DURATION, SINGLE_LEG_CADENCE,
    SINGLE_LEG_DURATION, WARMUP_POWER_HIGH, WARMUP_POWER_LOW, Z5R_DURATION,
    Z5R_THRESHOLD_DURATION,
};
use crate::workouts::types::WorkoutParseError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptFile {
    author: String,
    name: String,
    restpower: u32,
    #[serde(default)]
    exercise: Vec<ExerciseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", deny_unknown_fields)]
enum ExerciseEntry {
    #[serde(rename_all = "camelCase")]
    WarmUp {
        #[serde(deserialize_with = "duration::deserialize")]
        duration: Duration,
        #[serde(default = "warmup_power_low", deserialize_with = "ramp_bound")]
        power_low: Option<f64>,
        #[serde(default = "warmup_power_high", deserialize_with = "ramp_bound")]
        power_high: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    CoolDown {
        #[serde(deserialize_with = "duration::deserialize")]
        duration: Duration,
        #[serde(default = "cooldown_power_low", deserialize_with = "ramp_bound")]
        power_low: Option<f64>,
        #[serde(default = "cooldown_power_high", deserialize_with = "ramp_bound")]
        power_high: Option<f64>,
    },
    #[serde(rename = "VO2")]
    Vo2 {
        sets: u32,
        #[serde(deserialize_with = "duration::deserialize")]
        duration: Duration,
        power: u32,
        cadence: Option<u32>,
    },
    FatBurner {
        sets: u32,
        power: u32,
        #[serde(
            default = "fat_burner_duration",
            deserialize_with = "duration::deserialize"
        )]
        duration: Duration,
    },
    #[serde(rename = "FTPInterval")]
    FtpInterval {
        sets: u32,
        #[serde(deserialize_with = "duration::deserialize")]
        duration: Duration,
        power: u32,
        cadence: Option<u32>,
    },
    #[serde(rename = "Z5R", rename_all = "camelCase")]
    Z5r {
        sets: u32,
        power: u32,
        #[serde(rename = "type")]
        effort: Z5rType,
        #[serde(default = "z5r_duration", deserialize_with = "duration::deserialize")]
        duration: Duration,
        #[serde(
            default = "z5r_threshold_duration",
            deserialize_with = "duration::deserialize"
        )]
        threshold_duration: Duration,
    },
    CadenceLadder {
        #[serde(default = "one")]
        sets: u32,
        #[serde(default = "cadence_ladder_power")]
        power: u32,
    },
    SingleLeg {
        sets: u32,
        power: u32,
        #[serde(default = "single_leg_cadence")]
        cadence: u32,
        #[serde(
            default = "single_leg_duration",
            deserialize_with = "duration::deserialize"
        )]
        duration: Duration,
    },
    #[serde(rename_all = "camelCase")]
    Custom {
        name: String,
        #[serde(deserialize_with = "duration::deserialize")]
        duration: Duration,
        #[serde(default = "one")]
        sets: u32,
        power: Option<u32>,
        cadence: Option<u32>,
        cadence_high: Option<u32>,
        cadence_low: Option<u32>,
        power_high: Option<u32>,
        power_low: Option<u32>,
        zone: Option<u32>,
        slop: Option<u32>,
        text_events: Option<Vec<TextEventEntry>>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TextEventEntry {
    message: String,
    #[serde(default, deserialize_with = "duration::deserialize")]
    offset: Duration,
}

fn warmup_power_low() -> Option<f64> {
    Some(WARMUP_POWER_LOW)
}

fn warmup_power_high() -> Option<f64> {
    Some(WARMUP_POWER_HIGH)
}

fn cooldown_power_low() -> Option<f64> {
    Some(COOLDOWN_POWER_LOW)
}

fn cooldown_power_high() -> Option<f64> {
    Some(COOLDOWN_POWER_HIGH)
}

fn fat_burner_duration() -> Duration {
    FAT_BURNER_DURATION
}

fn z5r_duration() -> Duration {
    Z5R_DURATION
}

fn z5r_threshold_duration() -> Duration {
    Z5R_THRESHOLD_DURATION
}

fn cadence_ladder_power() -> u32 {
    CADENCE_LADDER_POWER
}

fn single_leg_cadence() -> u32 {
    SINGLE_LEG_CADENCE
}

fn single_leg_duration() -> Duration {
    SINGLE_LEG_DURATION
}

fn one() -> u32 {
    1
}

struct RampBoundVisitor;

impl<'de> Visitor<'de> for RampBoundVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a fraction of FTP or `false`")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Option<f64>, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Option<f64>, E> {
        Ok(Some(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Option<f64>, E> {
        Ok(Some(value as f64))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Option<f64>, E> {
        if value {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(None)
        }
    }
}

/// Ramp bound: a number, or `false` for no bound.
fn ramp_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(RampBoundVisitor)
}

impl From<ExerciseEntry> for Exercise {
    fn from(entry: ExerciseEntry) -> Self {
        match entry {
            ExerciseEntry::WarmUp {
                duration,
                power_low,
                power_high,
            } => WarmUp::new(duration)
                .with_power(power_low, power_high)
                .into(),
            ExerciseEntry::CoolDown {
                duration,
                power_low,
                power_high,
            } => CoolDown::new(duration)
                .with_power(power_low, power_high)
                .into(),
            ExerciseEntry::Vo2 {
                sets,
                duration,
                power,
                cadence,
            } => Vo2::new(sets, duration, power, cadence).into(),
            ExerciseEntry::FatBurner {
                sets,
                power,
                duration,
            } => FatBurner::with_duration(sets, power, duration).into(),
            ExerciseEntry::FtpInterval {
                sets,
                duration,
                power,
                cadence,
            } => FtpInterval::new(sets, duration, power, cadence).into(),
            ExerciseEntry::Z5r {
                sets,
                power,
                effort,
                duration,
                threshold_duration,
            } => Z5r::new(sets, power, effort, duration, threshold_duration).into(),
            ExerciseEntry::CadenceLadder { sets, power } => CadenceLadder { sets, power }.into(),
            ExerciseEntry::SingleLeg {
                sets,
                power,
                cadence,
                duration,
            } => SingleLeg {
                sets,
                power,
                cadence,
                duration,
            }
            .into(),
            ExerciseEntry::Custom {
                name,
                duration,
                sets,
                power,
                cadence,
                cadence_high,
                cadence_low,
                power_high,
                power_low,
                zone,
                slop,
                text_events,
            } => Custom {
                name,
                duration,
                sets,
                power,
                cadence,
                cadence_high,
                cadence_low,
                power_high,
                power_low,
                zone,
                slop,
                text_events: text_events.map(|events| {
                    events
                        .into_iter()
                        .map(|e| TextEvent::at(e.message, e.offset))
                        .collect()
                }),
            }
            .into(),
        }
    }
}

/// Parse a workout script from TOML content.
pub fn parse_script(content: &str) -> Result<WorkoutScript, WorkoutParseError> {
    let file: ScriptFile = toml::from_str(content).map_err(|e| WorkoutParseError::InvalidScript {
        line: e.span().map(|span| line_of(content, span.start)),
        message: e.message().to_string(),
    })?;

    let exercises: Vec<Exercise> = file.exercise.into_iter().map(Exercise::from).collect();
    tracing::debug!(
        name = %file.name,
        exercises = exercises.len(),
        "Parsed workout script"
    );

    Ok(WorkoutScript {
        author: file.author,
        name: file.name,
        restpower: file.restpower,
        exercises,
    })
}

/// Parse a workout script from disk.
pub fn parse_script_file(path: &std::path::Path) -> Result<WorkoutScript, WorkoutParseError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| WorkoutParseError::IoError(e.to_string()))?;

    parse_script(&content)
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
