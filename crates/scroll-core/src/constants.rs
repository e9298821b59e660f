// Defaults shared by the core and the web front-end.

// Parallax
pub const DEFAULT_PARALLAX_MAX_OFFSET: f64 = 100.0; // px travelled either side of center
pub const PARALLAX_DATA_ATTRIBUTE: &str = "data-parallax"; // per-element max offset override
pub const BACKGROUND_POSITION: &str = "background-position";
pub const NEUTRAL_BACKGROUND_POSITION: &str = "50% 50%";

// Reveal
pub const DEFAULT_REVEALED_CLASS: &str = "js-reveal"; // on while fully in view, off once fully out
// Added on first reveal, kept afterwards
pub const DEFAULT_FIRST_REVEAL_CLASS: &str = "js-revealed";

// Below this viewport width effects are switched off and content shown statically
pub const DEFAULT_BREAKPOINT_MIN_WIDTH: f64 = 900.0;
