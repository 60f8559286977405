//! Zwift workout (.zwo) file writer.
//!
//! Output mirrors what Zwift's own editor saves: no XML declaration, two space
//! indentation, attributes only for values that are present.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::workouts::types::{
    ExportError, Ramp, Segment, SegmentTextEvent, SteadyState, WorkoutDocument,
};

/// Render a workout document as `.zwo` XML.
pub fn export_zwo(document: &WorkoutDocument) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Start(BytesStart::new("workout_file")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    write_element(&mut writer, "author", &document.author)?;
    write_element(&mut writer, "name", &document.name)?;
    write_element(&mut writer, "description", &document.description)?;
    write_element(&mut writer, "sportType", document.sport_type)?;

    write_workout(&mut writer, &document.segments)?;

    writer
        .write_event(Event::End(BytesEnd::new("workout_file")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    let mut result = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| ExportError::XmlError(e.to_string()))?;
    result.push('\n');
    Ok(result)
}

/// Write the `workout` element holding every segment in order.
fn write_workout<W: std::io::Write>(
    writer: &mut Writer<W>,
    segments: &[Segment],
) -> Result<(), ExportError> {
    if segments.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new("workout")))
            .map_err(|e| ExportError::XmlError(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(BytesStart::new("workout")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    for segment in segments {
        write_segment(writer, segment)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("workout")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

/// Write a single segment; segments without text events are self-closing.
fn write_segment<W: std::io::Write>(
    writer: &mut Writer<W>,
    segment: &Segment,
) -> Result<(), ExportError> {
    let name = segment.segment_type().element_name();
    let mut element = BytesStart::new(name);

    match segment {
        Segment::Warmup(ramp) | Segment::Cooldown(ramp) => push_ramp_attributes(&mut element, ramp),
        Segment::SteadyState(steady) => push_steady_state_attributes(&mut element, steady),
    }

    let text_events = segment.text_events();
    if text_events.is_empty() {
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| ExportError::XmlError(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(element))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    for event in text_events {
        write_text_event(writer, event)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

fn push_ramp_attributes(element: &mut BytesStart, ramp: &Ramp) {
    push_attribute(element, "Duration", Some(ramp.duration_seconds.to_string()));
    push_attribute(element, "PowerLow", ramp.power_low.map(format_fraction));
    push_attribute(element, "PowerHigh", ramp.power_high.map(format_fraction));
}

fn push_steady_state_attributes(element: &mut BytesStart, steady: &SteadyState) {
    push_attribute(element, "Duration", Some(steady.duration_seconds.to_string()));
    push_attribute(element, "Power", steady.power.map(format_fraction));
    push_attribute(element, "Cadence", steady.cadence.map(|v| v.to_string()));
    push_attribute(element, "CadenceHigh", steady.cadence_high.map(|v| v.to_string()));
    push_attribute(element, "CadenceLow", steady.cadence_low.map(|v| v.to_string()));
    push_attribute(element, "PowerHigh", steady.power_high.map(format_fraction));
    push_attribute(element, "PowerLow", steady.power_low.map(format_fraction));
    push_attribute(element, "Zone", steady.zone.map(|v| v.to_string()));
    push_attribute(element, "Slop", steady.slop.map(|v| v.to_string()));
}

/// Absent values produce no attribute at all.
fn push_attribute(element: &mut BytesStart, key: &str, value: Option<String>) {
    if let Some(value) = value {
        element.push_attribute((key, value.as_str()));
    }
}

fn write_text_event<W: std::io::Write>(
    writer: &mut Writer<W>,
    event: &SegmentTextEvent,
) -> Result<(), ExportError> {
    let mut element = BytesStart::new("textevent");
    element.push_attribute(("timeoffset", event.time_offset.to_string().as_str()));
    element.push_attribute(("message", event.message.as_str()));

    writer
        .write_event(Event::Empty(element))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

/// Write a simple element with text content.
fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

/// Fractions always keep a decimal point (`1.0`, not `1`).
fn format_fraction(value: f64) -> String {
    format!("{:?}", value)
}
