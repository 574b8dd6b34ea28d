//! # rotpole
//!
//! Rotated-pole spherical coordinate transforms: reproject gridded points on
//! a sphere into a coordinate system whose north pole sits at an arbitrary
//! location, and compute the local rotation angle the change of pole induces
//! at each grid point (for rotating vector fields consistently with the
//! coordinate change).
//!
//! The crate is pure math: no I/O, no interpolation numerics, no shared
//! state. See [`north_pole`] for pole placement, [`spherical`] for the grid
//! rotation engine, [`trig`] for distances and per-point rotation angles and
//! [`regrid`] for the grid-switch orchestration around a caller-supplied
//! interpolation strategy.

pub mod constants;
pub mod longitude;
pub mod north_pole;
mod numeric;
pub mod regrid;
pub mod rotation;
pub mod rotpole_errors;
pub mod spherical;
pub mod trig;
