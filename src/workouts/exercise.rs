//! Author-facing exercise blocks.
//!
//! Each variant is an immutable value built through its constructor. Interval
//! variants carry a `rest` duration derived from their own fields when they are
//! created; it is never set independently.

use std::time::Duration;

use serde::Deserialize;

/// Default warm-up ramp bounds (fraction of FTP), matching Zwift's editor.
pub const WARMUP_POWER_LOW: f64 = 0.25;
pub const WARMUP_POWER_HIGH: f64 = 0.75;

/// Default cool-down ramp bounds. Intentionally the reverse of the warm-up.
pub const COOLDOWN_POWER_LOW: f64 = 0.75;
pub const COOLDOWN_POWER_HIGH: f64 = 0.25;

/// Work interval of a fat burner stage.
pub const FAT_BURNER_DURATION: Duration = Duration::from_secs(120);
/// Recovery after every fat burner stage.
pub const FAT_BURNER_REST: Duration = Duration::from_secs(60);

pub const Z5R_DURATION: Duration = Duration::from_secs(60);
pub const Z5R_THRESHOLD_DURATION: Duration = Duration::from_secs(30);

pub const CADENCE_LADDER_POWER: u32 = 90;

pub const SINGLE_LEG_CADENCE: u32 = 90;
pub const SINGLE_LEG_DURATION: Duration = Duration::from_secs(60);

/// Gradual power increase at the start of a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WarmUp {
    pub duration: Duration,
    /// Starting power as a fraction of FTP
    pub power_low: Option<f64>,
    /// Ending power as a fraction of FTP
    pub power_high: Option<f64>,
}

impl WarmUp {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            power_low: Some(WARMUP_POWER_LOW),
            power_high: Some(WARMUP_POWER_HIGH),
        }
    }

    pub fn with_power(mut self, power_low: Option<f64>, power_high: Option<f64>) -> Self {
        self.power_low = power_low;
        self.power_high = power_high;
        self
    }
}

/// Gradual power decrease at the end of a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolDown {
    pub duration: Duration,
    pub power_low: Option<f64>,
    pub power_high: Option<f64>,
}

impl CoolDown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            power_low: Some(COOLDOWN_POWER_LOW),
            power_high: Some(COOLDOWN_POWER_HIGH),
        }
    }

    pub fn with_power(mut self, power_low: Option<f64>, power_high: Option<f64>) -> Self {
        self.power_low = power_low;
        self.power_high = power_high;
        self
    }
}

/// VO2 max intervals. Cadence should be close to the rider's climbing cadence;
/// the rest interval is half the work interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Vo2 {
    pub sets: u32,
    pub duration: Duration,
    /// Percent of FTP
    pub power: u32,
    pub cadence: Option<u32>,
    pub rest: Duration,
}

impl Vo2 {
    pub fn new(sets: u32, duration: Duration, power: u32, cadence: Option<u32>) -> Self {
        Self {
            sets,
            duration,
            power,
            cadence,
            rest: duration / 2,
        }
    }
}

/// Fat burner stages: stay in one gear, start at 70 RPM and add 5 RPM every
/// 10 seconds, then a minute of rest before shifting to the next gear.
#[derive(Debug, Clone, PartialEq)]
pub struct FatBurner {
    pub sets: u32,
    pub power: u32,
    pub duration: Duration,
    pub rest: Duration,
}

impl FatBurner {
    pub fn new(sets: u32, power: u32) -> Self {
        Self::with_duration(sets, power, FAT_BURNER_DURATION)
    }

    pub fn with_duration(sets: u32, power: u32, duration: Duration) -> Self {
        Self {
            sets,
            power,
            duration,
            rest: FAT_BURNER_REST,
        }
    }
}

/// Threshold intervals at sweet spot cadence. Rest is a third of the work.
#[derive(Debug, Clone, PartialEq)]
pub struct FtpInterval {
    pub sets: u32,
    pub duration: Duration,
    pub power: u32,
    pub cadence: Option<u32>,
    pub rest: Duration,
}

impl FtpInterval {
    pub fn new(sets: u32, duration: Duration, power: u32, cadence: Option<u32>) -> Self {
        Self {
            sets,
            duration,
            power,
            cadence,
            rest: duration / 3,
        }
    }
}

/// How the rider should reach VO2 max during a [`Z5r`] effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Z5rType {
    Cadence,
    Shift,
    Both,
}

impl Z5rType {
    /// Message shown once the threshold part of the effort is over.
    pub fn message(self) -> &'static str {
        match self {
            Z5rType::Cadence => "Spin up to VO2 Max!",
            Z5rType::Shift => "Shift up to VO2 Max!",
            Z5rType::Both => "Shift or Spin up to VO2 Max!",
        }
    }
}

/// Zone 5 repeats: start at threshold, then spin or shift up to VO2 max.
/// Rest is as long as the effort itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Z5r {
    pub sets: u32,
    pub power: u32,
    pub effort: Z5rType,
    pub duration: Duration,
    pub threshold_duration: Duration,
    pub rest: Duration,
}

impl Z5r {
    pub fn new(
        sets: u32,
        power: u32,
        effort: Z5rType,
        duration: Duration,
        threshold_duration: Duration,
    ) -> Self {
        Self {
            sets,
            power,
            effort,
            duration,
            threshold_duration,
            rest: duration,
        }
    }
}

/// Fifteen one-minute steps, 85 RPM up to 120 RPM and back down.
///
/// `sets` is accepted but the ladder is always emitted once.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceLadder {
    pub sets: u32,
    pub power: u32,
}

impl Default for CadenceLadder {
    fn default() -> Self {
        Self {
            sets: 1,
            power: CADENCE_LADDER_POWER,
        }
    }
}

/// Single leg drills, alternating right and left for half the duration each.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleLeg {
    pub sets: u32,
    pub power: u32,
    pub cadence: u32,
    pub duration: Duration,
}

impl SingleLeg {
    pub fn new(sets: u32, power: u32) -> Self {
        Self {
            sets,
            power,
            cadence: SINGLE_LEG_CADENCE,
            duration: SINGLE_LEG_DURATION,
        }
    }
}

/// An annotation shown `offset` into a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    pub message: String,
    pub offset: Duration,
}

impl TextEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: Duration::ZERO,
        }
    }

    pub fn at(message: impl Into<String>, offset: Duration) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// A steady state block whose attributes are written as given.
///
/// Power fields are percent of FTP like every other exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Custom {
    pub name: String,
    pub duration: Duration,
    pub sets: u32,
    pub power: Option<u32>,
    pub cadence: Option<u32>,
    pub cadence_high: Option<u32>,
    pub cadence_low: Option<u32>,
    pub power_high: Option<u32>,
    pub power_low: Option<u32>,
    pub zone: Option<u32>,
    pub slop: Option<u32>,
    pub text_events: Option<Vec<TextEvent>>,
}

impl Custom {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            sets: 1,
            power: None,
            cadence: None,
            cadence_high: None,
            cadence_low: None,
            power_high: None,
            power_low: None,
            zone: None,
            slop: None,
            text_events: None,
        }
    }
}

/// A high-level workout block as written by the author.
#[derive(Debug, Clone, PartialEq)]
pub enum Exercise {
    WarmUp(WarmUp),
    CoolDown(CoolDown),
    Vo2(Vo2),
    FatBurner(FatBurner),
    FtpInterval(FtpInterval),
    Z5r(Z5r),
    CadenceLadder(CadenceLadder),
    SingleLeg(SingleLeg),
    Custom(Custom),
}

impl Exercise {
    /// Name listed in the workout description.
    pub fn name(&self) -> &str {
        match self {
            Exercise::WarmUp(_) => "WarmUp",
            Exercise::CoolDown(_) => "CoolDown",
            Exercise::Vo2(_) => "VO2",
            Exercise::FatBurner(_) => "FatBurner",
            Exercise::FtpInterval(_) => "FTPInterval",
            Exercise::Z5r(_) => "Z5R",
            Exercise::CadenceLadder(_) => "CadenceLadder",
            Exercise::SingleLeg(_) => "SingleLeg",
            Exercise::Custom(custom) => &custom.name,
        }
    }

    /// Recovery after each set, for the variants that have one.
    pub fn rest(&self) -> Option<Duration> {
        match self {
            Exercise::Vo2(e) => Some(e.rest),
            Exercise::FatBurner(e) => Some(e.rest),
            Exercise::FtpInterval(e) => Some(e.rest),
            Exercise::Z5r(e) => Some(e.rest),
            Exercise::WarmUp(_)
            | Exercise::CoolDown(_)
            | Exercise::CadenceLadder(_)
            | Exercise::SingleLeg(_)
            | Exercise::Custom(_) => None,
        }
    }
}

/// An authored workout: header fields plus exercises in the order written.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutScript {
    pub author: String,
    pub name: String,
    /// Rest interval power, percent of FTP
    pub restpower: u32,
    pub exercises: Vec<Exercise>,
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Exercise {
                fn from(value: $variant) -> Self {
                    Exercise::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    WarmUp,
    CoolDown,
    Vo2,
    FatBurner,
    FtpInterval,
    Z5r,
    CadenceLadder,
    SingleLeg,
    Custom,
);
