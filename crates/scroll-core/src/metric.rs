//! Viewport intersection metric.
//!
//! The visibility window is padded by one element height above and below the
//! viewport so progress starts before the element's edge actually appears.

use crate::error::EffectError;
use crate::range::to_percent;

/// Cached viewport dimensions, refreshed on resize only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
}

/// Element geometry in viewport-relative pixels.
///
/// `height` is the element's outer height as reported by layout; it is kept
/// apart from `bottom - top` because transforms can make the two differ.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

impl ElementBox {
    /// Box for an untransformed element: `bottom = top + height`.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            height,
        }
    }
}

/// Per-tick visibility of one element.
///
/// - `is_visible`: overlaps the padded window
/// - `is_fully_entered`: lies entirely inside the unpadded viewport
/// - `is_fully_exited`: `percent_entered` is exactly zero
/// - `percent_entered`: progress of the top edge from the bottom of the top
///   padding (0) to the bottom of the viewport (1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetric {
    pub is_visible: bool,
    pub is_fully_entered: bool,
    pub is_fully_exited: bool,
    pub percent_entered: f64,
}

impl ScrollMetric {
    pub const HIDDEN: ScrollMetric = ScrollMetric {
        is_visible: false,
        is_fully_entered: false,
        is_fully_exited: true,
        percent_entered: 0.0,
    };
}

/// Compute the [`ScrollMetric`] of `element` against a viewport of `viewport_height`.
#[allow(clippy::float_cmp)]
pub fn probe(element: &ElementBox, viewport_height: f64) -> Result<ScrollMetric, EffectError> {
    let ElementBox {
        top,
        bottom,
        height,
    } = *element;
    if ![top, bottom, height, viewport_height]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(EffectError::NonFiniteGeometry {
            top,
            bottom,
            height,
            viewport_height,
        });
    }

    let is_visible = top >= -height && bottom <= viewport_height + height;
    if !is_visible {
        return Ok(ScrollMetric::HIDDEN);
    }

    let percent_entered = to_percent(top, -height, viewport_height)?;
    Ok(ScrollMetric {
        is_visible,
        is_fully_entered: top >= 0.0 && bottom <= viewport_height,
        // Exact comparison: exit fires only when the top edge sits on the padding boundary.
        is_fully_exited: percent_entered == 0.0,
        percent_entered,
    })
}
