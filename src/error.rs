//! Crate-wide error type.

/// Errors produced while validating widget props or mounting a widget.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("image has {urls} resolution urls but {thresholds} thresholds (expected {} urls)", .thresholds + 1)]
    ResolutionMismatch { urls: usize, thresholds: usize },
    #[error("background opacity {0} is outside [0.0, 1.0]")]
    OpacityOutOfRange(f64),
    #[error("background opacity {0} is not a multiple of 0.01")]
    OpacityStep(f64),
    #[error("unknown {kind} option: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("quantity of items must be a positive multiple of {per_row}, got {got}")]
    UnsupportedItemCount { got: usize, per_row: usize },
    #[error("invalid widget props: {0}")]
    InvalidProps(String),
    #[error("no timer runtime available to schedule resize recomputation")]
    NoTimerRuntime,
}
