//! Parallax: shift an element's background against its scroll progress.

use crate::command::Command;
use crate::constants::{BACKGROUND_POSITION, NEUTRAL_BACKGROUND_POSITION};
use crate::metric::ScrollMetric;
use crate::range::to_range;

/// Background offset in whole pixels for `percent_entered`, truncated toward zero.
///
/// 0 maps to `-max_offset`, 1 maps to `+max_offset`.
#[inline]
pub fn offset_px(percent_entered: f64, max_offset: f64) -> i64 {
    to_range(percent_entered, -max_offset, max_offset).trunc() as i64
}

/// Background-position command for the current metric, or `None` while the
/// element is outside the padded window.
pub fn apply(metric: &ScrollMetric, max_offset: f64) -> Option<Command> {
    if !metric.is_visible {
        return None;
    }
    let offset = offset_px(metric.percent_entered, max_offset);
    Some(Command::SetStyle {
        property: BACKGROUND_POSITION,
        value: format!("50% {offset}px"),
    })
}

/// Centered background, used when effects are switched off with normalization.
pub fn neutral() -> Command {
    Command::SetStyle {
        property: BACKGROUND_POSITION,
        value: NEUTRAL_BACKGROUND_POSITION.to_string(),
    }
}

/// Max offset for one element: its `data-parallax` value when numeric, else `default`.
///
/// Numeric means the trimmed text parses as a finite number. As with
/// `parseInt`, only the leading integer part is kept ("12.7" gives 12,
/// "1e3" gives 1). Text with no leading digits (".5") falls back to `default`.
pub fn resolve_max_offset(attribute: Option<&str>, default: f64) -> f64 {
    let Some(raw) = attribute.map(str::trim) else {
        return default;
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => leading_integer(raw).unwrap_or(default),
        _ => default,
    }
}

// Parsed as f64 so integer parts wider than i64 keep their value.
fn leading_integer(text: &str) -> Option<f64> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}
