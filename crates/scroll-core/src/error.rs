use thiserror::Error;

/// Failures the core can signal. All of them point at bad configuration or
/// broken host geometry; none are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    /// `to_percent` was asked to map onto a zero-width range.
    #[error("degenerate range: min ({min}) equals max ({max})")]
    DegenerateRange { min: f64, max: f64 },
    /// The host reported NaN or infinite geometry.
    #[error(
        "non-finite geometry: top={top} bottom={bottom} height={height} viewport={viewport_height}"
    )]
    NonFiniteGeometry {
        top: f64,
        bottom: f64,
        height: f64,
        viewport_height: f64,
    },
    #[error("unknown effect type: {0:?}")]
    UnknownEffect(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Per-element state built for a different effect than the one driving it.
    #[error("{state} state cannot be driven by the {effect} effect")]
    StateMismatch {
        effect: &'static str,
        state: &'static str,
    },
}
