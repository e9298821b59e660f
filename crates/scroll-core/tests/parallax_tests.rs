// Host-side tests for the parallax effect.

use scroll_core::parallax::{apply, neutral, offset_px, resolve_max_offset};
use scroll_core::{probe, Command, ElementBox, ScrollMetric, BACKGROUND_POSITION};

fn visible(percent_entered: f64) -> ScrollMetric {
    ScrollMetric {
        is_visible: true,
        is_fully_entered: false,
        is_fully_exited: percent_entered == 0.0,
        percent_entered,
    }
}

fn position(value: &str) -> Command {
    Command::SetStyle {
        property: BACKGROUND_POSITION,
        value: value.to_string(),
    }
}

#[test]
fn midpoint_is_centered() {
    assert_eq!(apply(&visible(0.5), 100.0), Some(position("50% 0px")));
}

#[test]
fn endpoints_reach_max_offset() {
    assert_eq!(apply(&visible(0.0), 100.0), Some(position("50% -100px")));
    assert_eq!(apply(&visible(1.0), 100.0), Some(position("50% 100px")));
}

#[test]
fn offset_truncates_toward_zero() {
    assert_eq!(offset_px(0.5 + 0.7 / 200.0, 100.0), 0);
    assert_eq!(offset_px(0.5 - 0.7 / 200.0, 100.0), 0);
    assert_eq!(offset_px(0.75, 30.0), 15);
    assert_eq!(offset_px(0.25, 30.0), -15);
    assert_eq!(apply(&visible(0.4975), 100.0), Some(position("50% 0px")));
}

#[test]
fn hidden_element_gets_no_command() {
    assert_eq!(apply(&ScrollMetric::HIDDEN, 100.0), None);
}

#[test]
fn probe_then_apply_for_element_at_top() {
    let m = probe(&ElementBox::new(0.0, 100.0), 500.0).unwrap();
    // 100/600 of the way from -100 to 100 = -66.67, truncated
    assert_eq!(apply(&m, 100.0), Some(position("50% -66px")));
}

#[test]
fn neutral_centers_background() {
    assert_eq!(neutral(), position("50% 50%"));
}

#[test]
fn numeric_attribute_overrides_default() {
    assert_eq!(resolve_max_offset(Some("40"), 100.0), 40.0);
    assert_eq!(resolve_max_offset(Some(" 250 "), 100.0), 250.0);
    assert_eq!(resolve_max_offset(Some("-30"), 100.0), -30.0);
    assert_eq!(resolve_max_offset(Some("12.7"), 100.0), 12.0);
    assert_eq!(resolve_max_offset(Some("1e3"), 100.0), 1.0);
}

#[test]
fn non_numeric_attribute_falls_back_to_default() {
    assert_eq!(resolve_max_offset(None, 100.0), 100.0);
    assert_eq!(resolve_max_offset(Some(""), 100.0), 100.0);
    assert_eq!(resolve_max_offset(Some("fast"), 100.0), 100.0);
    assert_eq!(resolve_max_offset(Some("20px"), 100.0), 100.0);
    assert_eq!(resolve_max_offset(Some("NaN"), 100.0), 100.0);
    assert_eq!(resolve_max_offset(Some(".5"), 100.0), 100.0);
}

#[test]
fn long_integer_attribute_keeps_its_value() {
    assert_eq!(
        resolve_max_offset(Some("99999999999999999999"), 100.0),
        99999999999999999999.0
    );
    assert_eq!(
        resolve_max_offset(Some("-123456789012345678901.9"), 100.0),
        -123456789012345678901.0
    );
}
