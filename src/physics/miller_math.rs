use crate::error::{RamanError, Result};
use crate::model::{Lattice, MillerIndex};
use nalgebra::{Matrix3, Vector3};

/// Relative tolerance on |V| / (|a1||a2||a3|) below which the cell is flat.
pub const COPLANAR_TOL: f64 = 1e-10;

/// Reciprocal basis b_i = (a_j x a_k) / V, without the 2π factor.
pub fn reciprocal_lattice(lattice: &Lattice) -> Result<[Vector3<f64>; 3]> {
    let (a1, a2, a3) = (lattice.a1(), lattice.a2(), lattice.a3());

    let volume = lattice.volume();
    let scale = lattice.length_product();
    if !volume.is_finite() || scale == 0.0 || volume.abs() < COPLANAR_TOL * scale {
        return Err(RamanError::DegenerateLattice { volume });
    }

    Ok([
        a2.cross(&a3) / volume,
        a3.cross(&a1) / volume,
        a1.cross(&a2) / volume,
    ])
}

/// Reciprocal metric tensor G*_ij = b_i · b_j
pub fn reciprocal_metric(lattice: &Lattice) -> Result<Matrix3<f64>> {
    let b = reciprocal_lattice(lattice)?;
    Ok(Matrix3::from_fn(|i, j| b[i].dot(&b[j])))
}

/// Unit normal to the (hkl) plane, in Cartesian real space.
///
/// The reciprocal vector g = h b1 + k b2 + l b3 is expressed in the direct
/// basis through the reciprocal metric: n = G* (h, k, l), normal ∝ Σ n_i a_i.
pub fn plane_normal(hkl: MillerIndex, lattice: &Lattice) -> Result<Vector3<f64>> {
    if hkl.is_zero() {
        return Err(RamanError::InvalidMillerIndex);
    }

    let metric = reciprocal_metric(lattice)?;
    let n = metric * hkl.as_vector();

    let direction = lattice.a1() * n.x + lattice.a2() * n.y + lattice.a3() * n.z;
    let norm = direction.norm();
    if !norm.is_finite() || norm == 0.0 {
        return Err(RamanError::InvalidInput(format!(
            "plane normal for ({}) vanished",
            hkl
        )));
    }

    let normal = direction / norm;
    log::debug!(
        "Normal of ({} {} {}): [{:.6}, {:.6}, {:.6}]",
        hkl.h, hkl.k, hkl.l, normal.x, normal.y, normal.z
    );
    Ok(normal)
}

/// Interplanar spacing d_hkl = 1 / |g|, in the lattice's length unit.
pub fn d_spacing(hkl: MillerIndex, lattice: &Lattice) -> Result<f64> {
    if hkl.is_zero() {
        return Err(RamanError::InvalidMillerIndex);
    }
    let b = reciprocal_lattice(lattice)?;
    let g = b[0] * hkl.h as f64 + b[1] * hkl.k as f64 + b[2] * hkl.l as f64;
    Ok(1.0 / g.norm())
}
