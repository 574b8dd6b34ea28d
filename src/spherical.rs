//! Spherical rotation engine: mapping a latitude/longitude grid between the
//! geographic coordinate system and an arbitrarily rotated one.
//!
//! The pipeline is conversion → rotation → conversion: each grid point is
//! lifted onto the unit sphere as a Cartesian vector, rotated with the matrix
//! from [`crate::rotation::rotation_matrix`], and projected back to
//! latitude/longitude. The closed-form trigonometric conversion lives here as
//! well.

use itertools::Itertools;
use nalgebra::Vector3;

use crate::constants::{Degree, RADEG};
use crate::longitude::{adjust_lon_range, AngleUnit};
use crate::rotation::{rotate_cartesian, rotation_matrix};
use crate::rotpole_errors::RotPoleError;

/// Convert a geographic point to a Cartesian unit vector.
///
/// Inputs are in degrees. The returned vector has unit norm: `x` points at
/// (0°N, 0°E), `y` at (0°N, 90°E) and `z` at the north pole.
pub fn geographic_to_cartesian(lat: Degree, lon: Degree) -> Vector3<f64> {
    let lat_rad = lat * RADEG;
    let lon_rad = lon * RADEG;
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();

    Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Convert a Cartesian vector back to a geographic point.
///
/// Returns `(latitude, longitude)` in degrees, with the longitude in
/// `(-180°, 180°]`. The vector does not need to be exactly unit length; it is
/// normalized by its norm. A zero vector maps to (0°, 0°).
pub fn cartesian_to_geographic(point: &Vector3<f64>) -> (Degree, Degree) {
    let norm = point.norm();
    if norm == 0.0 {
        return (0.0, 0.0);
    }

    let lat = (point.z / norm).clamp(-1.0, 1.0).asin() / RADEG;
    let lon = point.y.atan2(point.x) / RADEG;
    (lat, lon)
}

/// Rotate a latitude/longitude grid into the rotated coordinate system (or
/// back, with `invert`).
///
/// The grid is the full cross product of `lat_axis × lon_axis`, flattened
/// with **longitude varying fastest**: the first `lon_axis.len()` output
/// pairs belong to `lat_axis[0]`, the next block to `lat_axis[1]`, and so on.
/// Single points are handled as one-element axes.
///
/// Arguments
/// ---------
/// * `lat_axis`: ordered latitude values in degrees.
/// * `lon_axis`: ordered longitude values in degrees.
/// * `phi`: rotation about the original z axis, in degrees.
/// * `theta`: rotation about the x axis obtained after the first rotation, in degrees.
/// * `psi`: rotation about the final z axis, in degrees.
/// * `invert`: when `true`, apply the rotated → geographic transform.
///
/// Returns
/// --------
/// * `(latitudes, longitudes)` of every rotated grid point, in degrees, one
///   entry per flattened grid point. Longitudes are expressed in `[0°, 360°)`.
///
/// Errors
/// -------
/// * [`RotPoleError::InvalidRotationAngle`] if any angle exceeds one full
///   turn in magnitude.
///
/// Remarks
/// -------
/// * At the poles the inverse conversion can return a longitude 180° out of
///   phase with the pre-rotation value (the longitude of a pole is not
///   well defined). Callers must tolerate this rather than expect pole-exact
///   round-trips.
pub fn rotate_spherical(
    lat_axis: &[Degree],
    lon_axis: &[Degree],
    phi: Degree,
    theta: Degree,
    psi: Degree,
    invert: bool,
) -> Result<(Vec<Degree>, Vec<Degree>), RotPoleError> {
    let matrix = rotation_matrix(phi * RADEG, theta * RADEG, psi * RADEG, invert)?;

    let points: Vec<Vector3<f64>> = lat_axis
        .iter()
        .cartesian_product(lon_axis.iter())
        .map(|(&lat, &lon)| geographic_to_cartesian(lat, lon))
        .collect();

    let rotated = rotate_cartesian(&points, &matrix);

    let mut lats_rot = Vec::with_capacity(rotated.len());
    let mut lons_rot = Vec::with_capacity(rotated.len());
    for point in &rotated {
        let (lat, lon) = cartesian_to_geographic(point);
        lats_rot.push(lat);
        lons_rot.push(lon);
    }

    Ok((lats_rot, adjust_lon_range(&lons_rot, 0.0, AngleUnit::Degrees)))
}

#[cfg(test)]
mod spherical_test {
    use super::*;

    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_geographic_to_cartesian() {
        let v = geographic_to_cartesian(0.0, 0.0);
        assert_relative_eq!(v.x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(v.y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(v.z, 0.0, epsilon = TOLERANCE);

        let v = geographic_to_cartesian(90.0, 0.0);
        assert_relative_eq!(v.z, 1.0, epsilon = TOLERANCE);

        let v = geographic_to_cartesian(-45.0, 135.0);
        assert_relative_eq!(v.norm(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_cartesian_to_geographic() {
        let (lat, lon) = cartesian_to_geographic(&Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(lat, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(lon, 90.0, epsilon = TOLERANCE);

        // Longitude convention is (-180, 180].
        let (lat, lon) = cartesian_to_geographic(&Vector3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(lat, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(lon, -90.0, epsilon = TOLERANCE);

        // Not unit length.
        let (lat, lon) = cartesian_to_geographic(&Vector3::new(0.0, 0.0, 2.5));
        assert_relative_eq!(lat, 90.0, epsilon = TOLERANCE);
        assert_relative_eq!(lon, 0.0, epsilon = TOLERANCE);

        assert_eq!(cartesian_to_geographic(&Vector3::zeros()), (0.0, 0.0));
    }

    #[test]
    fn test_conversion_round_trip() {
        for &(lat, lon) in &[(47.3, 8.5), (-33.9, 151.2), (0.0, 179.9), (-89.0, -120.0)] {
            let v = geographic_to_cartesian(lat, lon);
            let (lat2, lon2) = cartesian_to_geographic(&v);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
            let expected_lon = if lon <= -180.0 { lon + 360.0 } else { lon };
            assert_relative_eq!(lon2, expected_lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotate_spherical_pairing_order() {
        let (lats, lons) =
            rotate_spherical(&[-30.0, 30.0], &[0.0, 90.0, 180.0], 0.0, 0.0, 0.0, false).unwrap();

        // Longitude varies fastest: two latitude blocks of three longitudes.
        assert_eq!(lats.len(), 6);
        assert_eq!(lons.len(), 6);
        for (i, &lat) in lats.iter().enumerate() {
            let expected = if i < 3 { -30.0 } else { 30.0 };
            assert_relative_eq!(lat, expected, epsilon = TOLERANCE);
        }
        for (i, &lon) in lons.iter().enumerate() {
            assert_relative_eq!(lon, [0.0, 90.0, 180.0][i % 3], epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_rotate_spherical_pole_to_equator() {
        // theta = 90 tips the pole onto the equator: the old north pole must
        // land at latitude 0.
        let (lats, lons) = rotate_spherical(&[90.0], &[0.0], 0.0, 90.0, 0.0, false).unwrap();
        assert_relative_eq!(lats[0], 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(lons[0], 90.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_rotate_spherical_round_trip() {
        let lat_axis = [-60.0, -15.0, 0.0, 42.5, 75.0];
        let lon_axis = [0.0, 45.0, 110.0, 255.5, 359.0];
        let (phi, theta, psi) = (12.0, 50.0, 78.0);

        let (lats_rot, lons_rot) =
            rotate_spherical(&lat_axis, &lon_axis, phi, theta, psi, false).unwrap();

        // Invert point by point: the rotated grid is no longer a regular
        // lat × lon product, so feed each pair back as a single point.
        let mut idx = 0;
        for &lat in &lat_axis {
            for &lon in &lon_axis {
                let (lats_back, lons_back) = rotate_spherical(
                    &[lats_rot[idx]],
                    &[lons_rot[idx]],
                    phi,
                    theta,
                    psi,
                    true,
                )
                .unwrap();
                assert_relative_eq!(lats_back[0], lat, epsilon = 1e-8);
                // Same meridian, tolerating the 0°/360° wrap.
                assert_eq!(
                    crate::trig::angular_distance(lat, lon, lats_back[0], lons_back[0]),
                    0.0
                );
                idx += 1;
            }
        }
    }

    #[test]
    fn test_rotate_spherical_rejects_oversized_angles() {
        let result = rotate_spherical(&[0.0], &[0.0], 400.0, 0.0, 0.0, false);
        assert!(matches!(
            result,
            Err(RotPoleError::InvalidRotationAngle(_))
        ));
    }
}
