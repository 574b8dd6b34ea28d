//! Deriving the Euler-style rotation angles from a desired rotated-pole
//! location.

use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::rotpole_errors::RotPoleError;
use crate::spherical::rotate_spherical;

/// Target location of the rotated north pole, plus the optional
/// prime-meridian anchor that resolves the remaining rotational degree of
/// freedom.
///
/// The anchor is a `(latitude, longitude)` point through which the rotated
/// prime meridian should travel. Without it, `phi` stays at zero and the
/// rotated prime meridian falls wherever the pole placement alone puts it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NorthPoleSpec {
    pub latitude: Degree,
    pub longitude: Degree,
    pub prime_meridian: Option<(Degree, Degree)>,
}

impl NorthPoleSpec {
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        NorthPoleSpec {
            latitude,
            longitude,
            prime_meridian: None,
        }
    }

    pub fn with_prime_meridian(latitude: Degree, longitude: Degree, anchor: (Degree, Degree)) -> Self {
        NorthPoleSpec {
            latitude,
            longitude,
            prime_meridian: Some(anchor),
        }
    }

    /// Euler angles `(phi, theta, psi)` for this pole placement, in degrees.
    ///
    /// See [`north_pole_to_rotation_angles`].
    pub fn rotation_angles(&self) -> Result<(Degree, Degree, Degree), RotPoleError> {
        north_pole_to_rotation_angles(self.latitude, self.longitude, self.prime_meridian)
    }
}

/// Convert the position of the rotated north pole into the three rotation
/// angles `(phi, theta, psi)`, in degrees.
///
/// `psi = 90° − lon_np` and `theta = 90° − lat_np` place the pole; `phi`
/// fixes the rotated prime meridian. When `prime_meridian` is given, `phi`
/// is obtained self-referentially: the anchor point is pushed through
/// [`rotate_spherical`] with `phi` temporarily fixed at zero, and its rotated
/// longitude becomes `phi`. Without an anchor, `phi = 0`.
///
/// Errors
/// -------
/// * [`RotPoleError::InvalidRotationAngle`] if the derived angles exceed one
///   full turn in magnitude (pole coordinates far outside the usual
///   latitude/longitude ranges).
pub fn north_pole_to_rotation_angles(
    lat_np: Degree,
    lon_np: Degree,
    prime_meridian: Option<(Degree, Degree)>,
) -> Result<(Degree, Degree, Degree), RotPoleError> {
    let psi = 90.0 - lon_np;
    let theta = 90.0 - lat_np;

    let phi = match prime_meridian {
        Some((pm_lat, pm_lon)) => {
            let (_, lons_rot) = rotate_spherical(&[pm_lat], &[pm_lon], 0.0, theta, psi, false)?;
            lons_rot[0]
        }
        None => 0.0,
    };

    Ok((phi, theta, psi))
}
