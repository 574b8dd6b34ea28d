use thiserror::Error;

use crate::constants::Radian;

/// Errors produced by the rotated-pole coordinate core.
///
/// Every operation in this crate is deterministic pure math: any error is a
/// caller error, surfaced immediately and never retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotPoleError {
    #[error("rotation angle {0} rad is outside the accepted range (|angle| must lie in [0, 2*pi])")]
    InvalidRotationAngle(Radian),

    #[error("paired input sequences must have the same length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
