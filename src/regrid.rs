//! Grid switching: rotate a regular grid and hand the rotated coordinates to
//! a caller-supplied regridder.
//!
//! The interpolation itself is deliberately outside this crate. [`Regridder`]
//! only carries the contract: given field values on scattered source points
//! and a target regular grid, produce one value per target grid point. This
//! crate supplies the rotated coordinate grid and never touches the field
//! values.

use crate::constants::Degree;
use crate::north_pole::NorthPoleSpec;
use crate::rotpole_errors::RotPoleError;
use crate::spherical::rotate_spherical;

/// Pluggable interpolation strategy.
///
/// `values[i]` belongs to the scattered source point
/// `(src_lats[i], src_lons[i])`. The output carries one value per point of
/// the `dst_lat_axis × dst_lon_axis` cross product, flattened with longitude
/// varying fastest (the same pairing order as
/// [`rotate_spherical`](crate::spherical::rotate_spherical)).
pub trait Regridder {
    fn regrid(
        &self,
        src_lats: &[Degree],
        src_lons: &[Degree],
        values: &[f64],
        dst_lat_axis: &[Degree],
        dst_lon_axis: &[Degree],
    ) -> Vec<f64>;
}

/// Rotate the axes of a regular grid and resample the field onto the
/// original grid resolution.
///
/// Derives the rotation angles from `spec`, rotates every grid point with
/// [`rotate_spherical`](crate::spherical::rotate_spherical), and lets the
/// regridder interpolate the (unmodified) field values from the rotated
/// point cloud back onto the original `lat_axis × lon_axis` grid.
///
/// Arguments
/// ---------
/// * `data`: field values on the original grid, flattened with longitude
///   varying fastest; must hold `lat_axis.len() * lon_axis.len()` values.
/// * `lat_axis`, `lon_axis`: the regular grid axes, in degrees.
/// * `spec`: target position of the rotated north pole.
/// * `invert`: when `true`, apply the rotated → geographic transform.
/// * `regridder`: interpolation strategy.
///
/// Errors
/// -------
/// * [`RotPoleError::LengthMismatch`] if `data` does not match the grid size.
/// * [`RotPoleError::InvalidRotationAngle`] if the pole specification yields
///   angles beyond one full turn.
pub fn switch_axes<R: Regridder>(
    data: &[f64],
    lat_axis: &[Degree],
    lon_axis: &[Degree],
    spec: &NorthPoleSpec,
    invert: bool,
    regridder: &R,
) -> Result<Vec<f64>, RotPoleError> {
    let expected = lat_axis.len() * lon_axis.len();
    if data.len() != expected {
        return Err(RotPoleError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let (phi, theta, psi) = spec.rotation_angles()?;
    let (lats_rot, lons_rot) = rotate_spherical(lat_axis, lon_axis, phi, theta, psi, invert)?;

    Ok(regridder.regrid(&lats_rot, &lons_rot, data, lat_axis, lon_axis))
}
