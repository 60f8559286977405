//! Workout output types and errors.
//!
//! Segments are the primitives written to a `.zwo` file. Durations are whole
//! seconds and power values are fractions of FTP from this point on.

use std::time::Duration;

use thiserror::Error;

/// Sport written to every workout file.
pub const SPORT_TYPE: &str = "bike";

/// Type of workout segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// Gradual power increase
    Warmup,
    /// Gradual power decrease
    Cooldown,
    /// Constant power
    SteadyState,
}

impl SegmentType {
    /// Element name used in the `.zwo` file.
    pub fn element_name(self) -> &'static str {
        match self {
            SegmentType::Warmup => "Warmup",
            SegmentType::Cooldown => "Cooldown",
            SegmentType::SteadyState => "SteadyState",
        }
    }
}

/// Convert an authored percent of FTP into the fraction written to the file.
pub fn power_fraction(percent: u32) -> f64 {
    percent as f64 / 100.0
}

/// Whole seconds of a duration, truncating any fraction. Script durations are
/// bounded by `duration::MAX_DURATION_SECONDS`, so the clamp never applies to
/// parsed input.
pub fn whole_seconds(duration: Duration) -> u32 {
    u32::try_from(duration.as_secs()).unwrap_or(u32::MAX)
}

/// A timed message inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTextEvent {
    /// Seconds from the start of the segment
    pub time_offset: u32,
    pub message: String,
}

impl SegmentTextEvent {
    pub fn new(time_offset: u32, message: impl Into<String>) -> Self {
        Self {
            time_offset,
            message: message.into(),
        }
    }
}

/// A linear power change, used for warm-ups and cool-downs.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    pub duration_seconds: u32,
    pub power_low: Option<f64>,
    pub power_high: Option<f64>,
}

/// Constant power (or free-form targets) for a fixed time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SteadyState {
    pub duration_seconds: u32,
    pub power: Option<f64>,
    pub cadence: Option<u32>,
    pub cadence_high: Option<u32>,
    pub cadence_low: Option<u32>,
    pub power_high: Option<f64>,
    pub power_low: Option<f64>,
    pub zone: Option<u32>,
    pub slop: Option<u32>,
    pub text_events: Vec<SegmentTextEvent>,
}

impl SteadyState {
    /// A segment holding `power` (a fraction of FTP) for `duration_seconds`.
    pub fn at_power(duration_seconds: u32, power: f64) -> Self {
        Self {
            duration_seconds,
            power: Some(power),
            ..Default::default()
        }
    }

    pub fn with_cadence(mut self, cadence: Option<u32>) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_text_events(mut self, text_events: Vec<SegmentTextEvent>) -> Self {
        self.text_events = text_events;
        self
    }

    /// Same segment with a different duration; every other target is kept.
    pub fn with_duration(&self, duration_seconds: u32) -> Self {
        Self {
            duration_seconds,
            ..self.clone()
        }
    }
}

/// A single segment within a workout.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Warmup(Ramp),
    Cooldown(Ramp),
    SteadyState(SteadyState),
}

impl Segment {
    pub fn segment_type(&self) -> SegmentType {
        match self {
            Segment::Warmup(_) => SegmentType::Warmup,
            Segment::Cooldown(_) => SegmentType::Cooldown,
            Segment::SteadyState(_) => SegmentType::SteadyState,
        }
    }

    pub fn duration_seconds(&self) -> u32 {
        match self {
            Segment::Warmup(ramp) | Segment::Cooldown(ramp) => ramp.duration_seconds,
            Segment::SteadyState(steady) => steady.duration_seconds,
        }
    }

    pub fn text_events(&self) -> &[SegmentTextEvent] {
        match self {
            Segment::Warmup(_) | Segment::Cooldown(_) => &[],
            Segment::SteadyState(steady) => &steady.text_events,
        }
    }

    pub fn as_steady_state(&self) -> Option<&SteadyState> {
        match self {
            Segment::SteadyState(steady) => Some(steady),
            _ => None,
        }
    }
}

/// Everything needed to write a `.zwo` file.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDocument {
    pub author: String,
    pub name: String,
    pub description: String,
    pub sport_type: &'static str,
    /// Ordered list of segments
    pub segments: Vec<Segment>,
}

impl WorkoutDocument {
    /// Total workout duration in seconds.
    pub fn total_duration_seconds(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.duration_seconds()))
            .sum()
    }
}

/// Errors related to producing a workout file.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Workout script could not be read or parsed
    #[error(transparent)]
    Parse(#[from] WorkoutParseError),

    /// Rendering or writing the workout file failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Output location is unusable
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors while reading a workout script.
#[derive(Debug, Error)]
pub enum WorkoutParseError {
    /// Malformed script; `line` is 1-based when the location is known
    #[error("{}", script_message(.line, .message))]
    InvalidScript { line: Option<usize>, message: String },

    /// IO error reading file
    #[error("IO error: {0}")]
    IoError(String),
}

fn script_message(line: &Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("at line {}: {}", line, message),
        None => message.to_string(),
    }
}

/// Errors while rendering or writing a workout file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Errors resolving where the workout file goes.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output directory does not exist if \"zwocreate\" should create it re-run with -f flag")]
    MissingDirectory,

    #[error("Could not create {0}")]
    CreateFailed(String),
}
