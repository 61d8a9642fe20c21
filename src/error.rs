//! Error type shared by the engine, the HTTP service and the CLI.

/// Everything that can stop a trajectory computation.
///
/// Validation failures are detected once, before any stepping, so a caller
/// never sees a partially built table.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BallisticsError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("degenerate zero range {zero_range} m (must be positive to solve a zero angle)")]
    DegenerateZero { zero_range: f64 },

    #[error("projectile stalled at {distance} m (velocity no longer positive)")]
    ProjectileStalled { distance: u32 },

    #[error("target distance {requested} m exceeds the limit of {limit} m")]
    TargetTooFar { requested: f64, limit: f64 },
}

impl BallisticsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BallisticsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
