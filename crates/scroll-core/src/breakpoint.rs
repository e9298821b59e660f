use crate::constants::DEFAULT_BREAKPOINT_MIN_WIDTH;

/// Minimum viewport width at which scroll effects run.
///
/// Below it the host disables controllers with normalization so content is
/// shown statically; at or above it controllers are enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub min_width: f64,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_BREAKPOINT_MIN_WIDTH,
        }
    }
}

impl Breakpoint {
    pub fn new(min_width: f64) -> Self {
        Self { min_width }
    }

    #[inline]
    pub fn is_active(&self, viewport_width: f64) -> bool {
        viewport_width >= self.min_width
    }
}
