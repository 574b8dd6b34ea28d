use nalgebra::{Matrix3, Vector3};

use crate::constants::{Radian, DPI};
use crate::rotpole_errors::RotPoleError;

/// Build the rotation matrix between the geographic and rotated coordinate
/// systems, or its inverse.
///
/// The rotation is parameterized by three Euler-style angles applied in
/// sequence: `phi` about the original z axis, `theta` about the x axis
/// obtained after the first rotation, and `psi` about the final z axis.
/// The forward matrix maps geographic Cartesian coordinates to rotated
/// Cartesian coordinates; the inverse matrix maps them back. Both variants
/// are written out explicitly from their own derivation rather than obtained
/// by transposition, although they are numerically inverse to each other.
///
/// Reference: <http://www.ocgy.ubc.ca/~yzq/books/MOM3/s4node19.html>
///
/// Arguments
/// ---------
/// * `phi`: first rotation angle in radians.
/// * `theta`: second rotation angle in radians.
/// * `psi`: third rotation angle in radians.
/// * `inverse`: when `true`, return the rotated → geographic matrix instead
///   of the geographic → rotated one.
///
/// Returns
/// --------
/// * A 3×3 matrix `R` such that the transformed vector is `x' = R · x`.
///
/// Errors
/// -------
/// * [`RotPoleError::InvalidRotationAngle`] if any angle has a magnitude
///   outside `[0, 2π]`.
pub fn rotation_matrix(
    phi: Radian,
    theta: Radian,
    psi: Radian,
    inverse: bool,
) -> Result<Matrix3<f64>, RotPoleError> {
    for angle in [phi, theta, psi] {
        if !(0.0..=DPI).contains(&angle.abs()) {
            return Err(RotPoleError::InvalidRotationAngle(angle));
        }
    }

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_psi, cos_psi) = psi.sin_cos();

    let matrix = if !inverse {
        Matrix3::new(
            cos_psi * cos_phi - cos_theta * sin_phi * sin_psi,
            cos_psi * sin_phi + cos_theta * cos_phi * sin_psi,
            sin_psi * sin_theta,
            -sin_psi * cos_phi - cos_theta * sin_phi * cos_psi,
            -sin_psi * sin_phi + cos_theta * cos_phi * cos_psi,
            cos_psi * sin_theta,
            sin_theta * sin_phi,
            -sin_theta * cos_phi,
            cos_theta,
        )
    } else {
        Matrix3::new(
            cos_psi * cos_phi - cos_theta * sin_phi * sin_psi,
            -sin_psi * cos_phi - cos_theta * sin_phi * cos_psi,
            sin_theta * sin_phi,
            cos_psi * sin_phi + cos_theta * cos_phi * sin_psi,
            -sin_psi * sin_phi + cos_theta * cos_phi * cos_psi,
            -sin_theta * cos_phi,
            sin_psi * sin_theta,
            cos_psi * sin_theta,
            cos_theta,
        )
    };

    Ok(matrix)
}

/// Apply a rotation matrix to a batch of Cartesian unit vectors.
///
/// Each output point is the matrix-vector product `matrix · point`. Points
/// are independent of one another; the input slice is never mutated.
pub fn rotate_cartesian(points: &[Vector3<f64>], matrix: &Matrix3<f64>) -> Vec<Vector3<f64>> {
    points.iter().map(|point| matrix * point).collect()
}

#[cfg(test)]
mod rotation_test {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_matrix_eq(a: &Matrix3<f64>, b: &Matrix3<f64>, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(a[(i, j)], b[(i, j)], epsilon = tol);
            }
        }
    }

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_rotation_matrix_zero_angles_is_identity() {
        let rot = rotation_matrix(0.0, 0.0, 0.0, false).unwrap();
        assert_eq!(rot, Matrix3::identity());

        let rot = rotation_matrix(0.0, 0.0, 0.0, true).unwrap();
        assert_eq!(rot, Matrix3::identity());
    }

    #[test]
    fn test_rotation_matrix_quarter_turn() {
        // theta = psi = 90° moves the pole onto the equator at 0°E.
        let rot = rotation_matrix(0.0, FRAC_PI_2, FRAC_PI_2, false).unwrap();
        let expected = Matrix3::new(
            0.0, 0.0, 1.0, //
            -1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0,
        );
        assert_matrix_eq(&rot, &expected, TOLERANCE);
    }

    #[test]
    fn test_rotation_matrix_inverse_product_is_identity() {
        let triples = [
            (0.3, 1.1, 2.4),
            (-0.3, -1.1, -2.4),
            (FRAC_PI_2, FRAC_PI_2, FRAC_PI_2),
            (PI, 0.5, 2.0 * PI),
            (6.0, 5.0, 0.1),
        ];

        for (phi, theta, psi) in triples {
            let forward = rotation_matrix(phi, theta, psi, false).unwrap();
            let inverse = rotation_matrix(phi, theta, psi, true).unwrap();
            assert_matrix_eq(&(inverse * forward), &Matrix3::identity(), TOLERANCE);
            assert_matrix_eq(&(forward * inverse), &Matrix3::identity(), TOLERANCE);
        }
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let rot = rotation_matrix(0.7, 1.9, 4.2, false).unwrap();
        assert_matrix_eq(&(rot * rot.transpose()), &Matrix3::identity(), TOLERANCE);
        assert_relative_eq!(rot.determinant(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_rotation_matrix_rejects_out_of_range_angles() {
        assert_eq!(
            rotation_matrix(2.0 * PI + 0.1, 0.0, 0.0, false),
            Err(RotPoleError::InvalidRotationAngle(2.0 * PI + 0.1))
        );
        assert_eq!(
            rotation_matrix(0.0, -7.0, 0.0, false),
            Err(RotPoleError::InvalidRotationAngle(-7.0))
        );
        assert!(rotation_matrix(0.0, 0.0, f64::NAN, true).is_err());
    }

    #[test]
    fn test_rotate_cartesian() {
        let rot = rotation_matrix(0.0, FRAC_PI_2, FRAC_PI_2, false).unwrap();
        let points = vec![Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0)];
        let rotated = rotate_cartesian(&points, &rot);

        assert_eq!(rotated.len(), 2);
        // The old pole lands on the equator.
        assert_relative_eq!(rotated[0].x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(rotated[0].y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(rotated[0].z, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(rotated[1].y, -1.0, epsilon = TOLERANCE);

        // Inputs are untouched.
        assert_eq!(points[0], Vector3::new(0.0, 0.0, 1.0));
    }
}
