//! Shared numerical guards for the spherical trigonometry pipeline.
//!
//! The law-of-cosines formulas used in [`crate::trig`] are exact on paper but
//! accumulate floating-point noise in practice: arccos arguments overshoot
//! `[-1, 1]` by a few ulps and angles that should be zero come out around
//! 1e-8. These helpers absorb both effects.

use crate::constants::TINY;

/// Snap a value to exactly `0.0` when its magnitude falls below [`TINY`].
pub(crate) fn filter_tiny(value: f64) -> f64 {
    if value.abs() < TINY {
        0.0
    } else {
        value
    }
}

/// Arccosine with the argument clamped to the mathematical domain `[-1, 1]`.
///
/// Values very slightly outside the domain (floating-point overshoot from
/// sums of trigonometric products) would otherwise yield NaN.
pub(crate) fn clamped_acos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}
