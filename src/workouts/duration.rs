//! Duration values in workout scripts.
//!
//! A duration is either an integer number of seconds or a string of
//! hour/minute/second components such as `"90s"`, `"5m"` or `"1h 30m"`.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Deserializer, Visitor};

/// Longest duration a workout file can hold, in seconds.
pub const MAX_DURATION_SECONDS: u64 = u32::MAX as u64;

/// Parse a duration string like `"1h30m"`. A bare number is seconds.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty duration".to_string());
    }

    if let Ok(seconds) = trimmed.parse::<u64>() {
        return checked_seconds(seconds).ok_or_else(|| too_long(input));
    }

    let mut total: u64 = 0;
    let mut digits = String::new();

    for c in trimmed.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' | 's' => {
                let value: u64 = digits
                    .parse()
                    .map_err(|_| format!("invalid duration `{}`", input))?;
                let unit = match c {
                    'h' => 3600,
                    'm' => 60,
                    _ => 1,
                };
                total = value
                    .checked_mul(unit)
                    .and_then(|seconds| total.checked_add(seconds))
                    .ok_or_else(|| too_long(input))?;
                digits.clear();
            }
            c if c.is_whitespace() && digits.is_empty() => {}
            _ => return Err(format!("invalid duration `{}`", input)),
        }
    }

    if !digits.is_empty() {
        return Err(format!("missing unit in duration `{}`", input));
    }

    checked_seconds(total).ok_or_else(|| too_long(input))
}

fn checked_seconds(seconds: u64) -> Option<Duration> {
    (seconds <= MAX_DURATION_SECONDS).then(|| Duration::from_secs(seconds))
}

fn too_long(input: impl fmt::Display) -> String {
    format!("duration `{}` is too long", input)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("seconds as an integer or a duration string like \"5m\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
        checked_seconds(value).ok_or_else(|| E::custom(too_long(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
        let seconds = u64::try_from(value)
            .map_err(|_| E::custom(format!("duration cannot be negative: {}", value)))?;
        self.visit_u64(seconds)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
        parse_duration(value).map_err(E::custom)
    }
}

/// `deserialize_with` helper for duration fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}
