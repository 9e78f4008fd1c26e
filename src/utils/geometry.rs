// src/utils/geometry.rs

use nalgebra::Vector3;

/// Angle between two directions in degrees, 0 when either is zero.
pub fn angle_deg(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}
