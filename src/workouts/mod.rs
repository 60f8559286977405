//! Workout module: script parsing, exercise expansion and `.zwo` output.

pub mod duration;
pub mod engine;
pub mod exercise;
pub mod exporter_zwo;
pub mod parser_script;
pub mod types;

pub use engine::{assemble, default_rest_segment, expand};
pub use exercise::{
    CadenceLadder, CoolDown, Custom, Exercise, FatBurner, FtpInterval, SingleLeg, TextEvent, Vo2,
    WarmUp, WorkoutScript, Z5r, Z5rType,
};
pub use exporter_zwo::export_zwo;
pub use parser_script::{parse_script, parse_script_file};
pub use types::{
    ExportError, OutputError, Ramp, Segment, SegmentTextEvent, SegmentType, SteadyState,
    WorkoutDocument, WorkoutError, WorkoutParseError,
};
