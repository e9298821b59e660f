//! Box-model arithmetic on computed-style values.
//!
//! Hosts read `getComputedStyle` strings; these helpers turn them into the
//! content-box viewport size and the fractional outer height the metric uses.

use crate::metric::ViewportState;

/// Pixel value of a computed-style length such as `"20px"` or `"12.5px"`.
/// Anything else (`"auto"`, `""`, percentages) is `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    value
        .trim()
        .strip_suffix("px")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Top, right, bottom and left widths of one box edge (padding or border).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Content-box size from a client size (content + padding), never negative.
pub fn content_size(client_width: f64, client_height: f64, padding: &Edges) -> ViewportState {
    ViewportState {
        width: (client_width - padding.horizontal()).max(0.0),
        height: (client_height - padding.vertical()).max(0.0),
    }
}

/// Outer (border-box) height from the computed `height`.
///
/// With `box-sizing: border-box` the computed height already is the outer
/// height; otherwise padding and border are added on top.
pub fn outer_height(height: f64, border_box: bool, padding: &Edges, border: &Edges) -> f64 {
    if border_box {
        height
    } else {
        height + padding.vertical() + border.vertical()
    }
}
