// src/physics/rotation.rs
use crate::error::{RamanError, Result};
use nalgebra::{Matrix3, Vector3};

/// Tolerance on cos(phi) for the parallel / antiparallel special cases.
pub const PARALLEL_TOL: f64 = 1.0e-10;

/// Rotation matrix R that takes the direction of `a` onto the direction of `b`
/// (Rodrigues' formula about the axis a x b).
///
/// Parallel vectors give the identity. Antiparallel vectors give `-I`, which is
/// an inversion rather than a proper rotation.
pub fn rotation_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Result<Matrix3<f64>> {
    let a = unit(a, "first")?;
    let b = unit(b, "second")?;

    let x = a.cross(&b);
    let cos_phi = a.dot(&b);
    let sin_phi = x.norm();

    if (cos_phi - 1.0).abs() < PARALLEL_TOL {
        return Ok(Matrix3::identity());
    }
    if (cos_phi + 1.0).abs() < PARALLEL_TOL {
        log::warn!("Antiparallel alignment: using -I (improper) instead of a 180° rotation");
        return Ok(-Matrix3::identity());
    }

    // Unit rotation axis
    let k = skew(&(x / sin_phi));

    Ok(Matrix3::identity() + k * sin_phi + (k * k) * (1.0 - cos_phi))
}

/// Rotation about z by `theta` radians.
pub fn xy_rotation(theta: f64) -> Matrix3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    Matrix3::new(
        cos_t, -sin_t, 0.0,
        sin_t, cos_t, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Orthonormal with determinant +1.
pub fn is_proper_rotation(r: &Matrix3<f64>, tol: f64) -> bool {
    let gram = r.transpose() * r;
    (gram - Matrix3::identity()).amax() < tol && (r.determinant() - 1.0).abs() < tol
}

/// Skew-symmetric cross-product matrix, K v = x × v
fn skew(x: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -x.z, x.y,
        x.z, 0.0, -x.x,
        -x.y, x.x, 0.0,
    )
}

fn unit(v: &Vector3<f64>, which: &str) -> Result<Vector3<f64>> {
    let n = v.norm();
    if !n.is_finite() || n == 0.0 {
        return Err(RamanError::InvalidInput(format!(
            "{} vector {:?} cannot be normalised",
            which,
            [v.x, v.y, v.z]
        )));
    }
    Ok(v / n)
}
