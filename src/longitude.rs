//! Longitude normalization into a configurable 360° interval.
//!
//! Longitudes coming out of `atan2`-based conversions live in `(-180°, 180°]`
//! while most gridded datasets index their longitude axis in `[0°, 360°)`.
//! The sign resolution in [`crate::trig::rotation_angle`] additionally needs
//! windows centered on arbitrary meridians. [`adjust_lon_range`] covers all
//! of these: it maps any longitude into the half-open interval of one full
//! turn beginning at a caller-chosen `start`, in degrees or radians.

use crate::constants::{DEG360, DPI};

/// Unit of the longitude values handed to [`adjust_lon_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Width of one full turn in this unit (360 or 2π).
    pub fn full_turn(&self) -> f64 {
        match *self {
            AngleUnit::Degrees => DEG360,
            AngleUnit::Radians => DPI,
        }
    }
}

/// Express a single longitude in the full-turn interval beginning at `start`.
///
/// The result lies in `[start, start + 360°)` (or `[start, start + 2π)` for
/// radians) and is congruent to `lon` modulo the interval width. The
/// operation is idempotent: a value already inside the interval is returned
/// unchanged.
pub fn adjust_lon(lon: f64, start: f64, unit: AngleUnit) -> f64 {
    let width = unit.full_turn();
    let adjusted = start + (lon - start).rem_euclid(width);
    // rem_euclid can round up to exactly `width` when `lon` sits a few ulps
    // below `start`, which would break the half-open upper bound.
    if adjusted >= start + width {
        adjusted - width
    } else {
        adjusted
    }
}

/// Express every longitude of a sequence in the full-turn interval beginning
/// at `start`.
///
/// Order is preserved and the input slice is never mutated. See
/// [`adjust_lon`] for the per-value contract.
pub fn adjust_lon_range(lons: &[f64], start: f64, unit: AngleUnit) -> Vec<f64> {
    lons.iter().map(|&lon| adjust_lon(lon, start, unit)).collect()
}
