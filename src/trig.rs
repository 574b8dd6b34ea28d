//! Spherical trigonometry: great-circle distances and the per-point rotation
//! angle between the old and new north pole.
//!
//! Both computations use the spherical law of cosines on a unit sphere and
//! share the precision guards from [`crate::numeric`]: arccos arguments are
//! clamped to `[-1, 1]` and angles below 1e-6 in magnitude are snapped to
//! zero.

use crate::constants::{Degree, Radian, RADEG};
use crate::longitude::{adjust_lon, AngleUnit};
use crate::numeric::{clamped_acos, filter_tiny};
use crate::rotpole_errors::RotPoleError;

/// Angular distance between two points on the unit sphere, in radians.
///
/// Inputs are in degrees. The distance is computed with the spherical law of
/// cosines:
///
/// ```text
/// d = arccos(sin(lat1)·sin(lat2) + cos(lat1)·cos(lat2)·cos(lon2 − lon1))
/// ```
///
/// The result always lies in `[0, π]`; values below 1e-6 are snapped to
/// exactly zero, so `angular_distance(p, p) == 0.0` holds for any point.
pub fn angular_distance(lat1: Degree, lon1: Degree, lat2: Degree, lon2: Degree) -> Radian {
    let lat1 = lat1 * RADEG;
    let lon1 = lon1 * RADEG;
    let lat2 = lat2 * RADEG;
    let lon2 = lon2 * RADEG;

    let cos_dist = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();

    filter_tiny(clamped_acos(cos_dist))
}

/// Signed rotation angle between the old and new north pole, as seen from
/// each point of interest.
///
/// For every point C, this is the interior angle at C of the spherical
/// triangle formed by A (the original north pole), B (the new north pole)
/// and C, with the spherical law of cosines:
///
/// ```text
/// angle(C) = arccos((cos c − cos a·cos b) / (sin a·sin b))
/// ```
///
/// where `a = distance(B, C)`, `b = distance(A, C)` and `c = distance(A, B)`
/// (constant across all C).
///
/// Arguments
/// ---------
/// * `lat_a`, `lon_a`: location of the original north pole, in degrees.
/// * `lat_b`, `lon_b`: location of the new north pole, in degrees.
/// * `lats_c`, `lons_c`: the points of interest, in degrees.
///
/// Returns
/// --------
/// * One signed angle in radians per point of interest, snapped to zero
///   below 1e-6 in magnitude.
///
/// Errors
/// -------
/// * [`RotPoleError::LengthMismatch`] if `lats_c` and `lons_c` differ in
///   length.
///
/// Remarks
/// -------
/// * When C coincides with A or B, the corresponding zero triangle side is
///   replaced by 1.0 before the division. This is a crude placeholder, not a
///   correct limiting value; it keeps the computation finite without
///   special-casing further.
/// * Known open bug: when A and B coincide and C sits exactly at that pole,
///   the substitution yields 0 where the geometrically expected angle is π.
/// * The sign rule (see below) has only been validated for an original pole
///   at 90°N, 0°E. Points whose longitude falls in the 180° window behind
///   the new pole get a negative angle.
pub fn rotation_angle(
    lat_a: Degree,
    lon_a: Degree,
    lat_b: Degree,
    lon_b: Degree,
    lats_c: &[Degree],
    lons_c: &[Degree],
) -> Result<Vec<Radian>, RotPoleError> {
    if lats_c.len() != lons_c.len() {
        return Err(RotPoleError::LengthMismatch {
            expected: lats_c.len(),
            actual: lons_c.len(),
        });
    }

    // Side c joins the two poles and does not depend on C.
    let c = angular_distance(lat_a, lon_a, lat_b, lon_b);
    let cos_c = c.cos();

    let mut angles = Vec::with_capacity(lats_c.len());
    for (&lat_c, &lon_c) in lats_c.iter().zip(lons_c.iter()) {
        let mut a = angular_distance(lat_b, lon_b, lat_c, lon_c);
        let mut b = angular_distance(lat_a, lon_a, lat_c, lon_c);

        // Degenerate triangle: C coincides with one of the poles.
        if a == 0.0 {
            a = 1.0;
        }
        if b == 0.0 {
            b = 1.0;
        }

        let magnitude = clamped_acos((cos_c - a.cos() * b.cos()) / (a.sin() * b.sin()));
        angles.push(filter_tiny(rotation_sign(magnitude, lon_b, lon_c)));
    }

    Ok(angles)
}

/// Attach a sign to the rotation angle magnitude.
///
/// Grid points whose longitude falls in the 180° range behind the new pole's
/// longitude get a negative angle. Both longitudes are first expressed in
/// `[0°, 360°)` and then re-normalized into the window starting 180° behind
/// the new pole, so the comparison is wrap-around safe.
///
/// This rule was validated only for an original north pole at 90°N, 0°E; it
/// is reproduced verbatim and not generalized.
fn rotation_sign(magnitude: Radian, lon_b: Degree, lon_c: Degree) -> Radian {
    let lon_b_360 = adjust_lon(lon_b, 0.0, AngleUnit::Degrees);
    let lon_c_360 = adjust_lon(lon_c, 0.0, AngleUnit::Degrees);

    let window_start = lon_b_360 - 180.0;

    let lon_b_win = adjust_lon(lon_b_360, window_start, AngleUnit::Degrees);
    let lon_c_win = adjust_lon(lon_c_360, window_start, AngleUnit::Degrees);

    if lon_c_win < lon_b_win {
        -magnitude
    } else {
        magnitude
    }
}
