//! # Constants and type definitions for rotpole
//!
//! This module centralizes the **numerical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `rotpole` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians)
//! - Numerical thresholds shared by the precision guards
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the rotation matrix builder,
//! the spherical rotation engine and the spherical trigonometry routines.

// -------------------------------------------------------------------------------------------------
// Numerical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Width of a full longitude interval in degrees
pub const DEG360: f64 = 360.0;

/// Magnitude below which a computed angle is snapped to exactly zero.
///
/// Distances and rotation angles that should be mathematically zero come out
/// of the trigonometric pipeline as values around 1e-8 instead. Anything with
/// a magnitude below this threshold is treated as exactly zero.
pub const TINY: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
