// src/physics/polarisation.rs
use crate::error::{RamanError, Result};
use crate::model::{BandIndex, Lattice, MillerIndex, ModeCatalog, RamanTensor, TensorCatalog};
use crate::physics::group_theory::{active_modes, Spectroscopy};
use crate::physics::miller_math::plane_normal;
use crate::physics::rotation::{rotation_between, xy_rotation};
use crate::config::PlotStyle;
use crate::rendering::IntensityVisualizer;
use crate::utils::geometry;
use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default in-plane sweep increment (~1°)
pub const DEFAULT_SWEEP_STEP: f64 = 0.01745;

/// Upper bound on angles per sweep
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;

// --- 1. INPUTS ---

/// Crystal surface and the experimental collection axis it is rotated onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceAlignment {
    pub hkl: MillerIndex,
    pub collection_axis: Vector3<f64>,
    pub lattice: Lattice,
}

impl SurfaceAlignment {
    pub fn new(hkl: MillerIndex, collection_axis: Vector3<f64>, lattice: Lattice) -> Self {
        Self { hkl, collection_axis, lattice }
    }

    /// R_align: surface normal -> collection axis
    pub fn rotation(&self) -> Result<Matrix3<f64>> {
        let normal = plane_normal(self.hkl, &self.lattice)?;
        let r = rotation_between(&normal, &self.collection_axis)?;
        log::debug!(
            "({}) normal is {:.3}° from the collection axis; alignment rotation:{}",
            self.hkl,
            geometry::angle_deg(&normal, &self.collection_axis),
            r
        );
        Ok(r)
    }

    /// R_align · R_xy(theta)
    pub fn rotation_at(&self, r_align: &Matrix3<f64>, theta: f64) -> Matrix3<f64> {
        r_align * xy_rotation(theta)
    }
}

/// How R⁻¹ is obtained when conjugating tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InverseMode {
    /// Numerical inverse (reference behaviour)
    #[default]
    Explicit,
    /// Rᵀ, valid because R is orthogonal
    Transpose,
}

impl InverseMode {
    pub fn invert(self, r: &Matrix3<f64>) -> Result<Matrix3<f64>> {
        match self {
            InverseMode::Explicit => r.try_inverse().ok_or_else(|| {
                RamanError::InvalidInput("rotation matrix is singular".to_string())
            }),
            InverseMode::Transpose => Ok(r.transpose()),
        }
    }
}

/// Incident (ei) and scattered (es) polarisation directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarisationConfig {
    pub incident: Vector3<f64>,
    pub scattered: Vector3<f64>,
}

impl PolarisationConfig {
    /// ei = es = y
    pub fn parallel() -> Self {
        Self {
            incident: Vector3::new(0.0, 1.0, 0.0),
            scattered: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// ei = y, es = x
    pub fn cross() -> Self {
        Self {
            incident: Vector3::new(0.0, 1.0, 0.0),
            scattered: Vector3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn from_cross_flag(cross: bool) -> Self {
        if cross { Self::cross() } else { Self::parallel() }
    }

    /// |ei · T · es|²
    pub fn intensity(&self, tensor: &Matrix3<f64>) -> f64 {
        self.incident.dot(&(tensor * self.scattered)).powi(2)
    }
}

/// Only the Raman-active tensors of `tensors` (per `modes`) are rotated.
#[derive(Debug, Clone)]
pub struct FixedAngleRequest<'a> {
    pub alignment: SurfaceAlignment,
    /// In-plane angle in degrees
    pub theta_deg: f64,
    pub tensors: &'a TensorCatalog,
    pub modes: &'a ModeCatalog,
    pub inverse: InverseMode,
}

/// Only the Raman-active tensors of `tensors` (per `modes`) are swept.
#[derive(Debug, Clone)]
pub struct SweepRequest<'a> {
    pub alignment: SurfaceAlignment,
    pub configuration: PolarisationConfig,
    pub tensors: &'a TensorCatalog,
    pub modes: &'a ModeCatalog,
    pub step_rad: f64,
    pub inverse: InverseMode,
}

#[derive(Debug, Clone)]
pub enum PolarisationRequest<'a> {
    FixedAngle(FixedAngleRequest<'a>),
    Sweep(SweepRequest<'a>),
}

// --- 2. OUTPUTS ---

#[derive(Debug, Clone, Serialize)]
pub struct RotatedTensorSet {
    pub hkl: MillerIndex,
    pub theta_deg: f64,
    pub theta_rad: f64,
    pub tensors: Vec<RamanTensor>,
}

/// Angle-resolved intensity of one tensor, samples are (theta [rad], intensity).
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityCurve {
    pub band_index: BandIndex,
    pub label: String,
    pub samples: Vec<(f64, f64)>,
}

impl IntensityCurve {
    pub fn max_intensity(&self) -> f64 {
        self.samples.iter().map(|&(_, i)| i).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone)]
pub enum PolarisationOutput {
    Rotated(RotatedTensorSet),
    Curves(Vec<IntensityCurve>),
}

// --- 3. OPERATIONS ---

impl PolarisationRequest<'_> {
    pub fn run(&self) -> Result<PolarisationOutput> {
        match self {
            PolarisationRequest::FixedAngle(req) => rotate_tensors(req).map(PolarisationOutput::Rotated),
            PolarisationRequest::Sweep(req) => sweep_intensity(req).map(PolarisationOutput::Curves),
        }
    }
}

/// Raman-active tensors of the catalog, in catalog order.
pub fn active_tensors(tensors: &TensorCatalog, modes: &ModeCatalog) -> Result<Vec<RamanTensor>> {
    let active = active_modes(Spectroscopy::Raman, modes)?;
    let selected = tensors.select(&active.bands());
    log::info!(
        "{} of {} tensors are Raman active in point group {}",
        selected.len(),
        tensors.len(),
        modes.point_group
    );
    Ok(selected)
}

/// T' = R T R⁻¹ for every active tensor, with R = R_align · R_xy(theta).
pub fn rotate_tensors(req: &FixedAngleRequest) -> Result<RotatedTensorSet> {
    if !req.theta_deg.is_finite() {
        return Err(RamanError::InvalidInput(format!(
            "in-plane angle must be finite, got {}",
            req.theta_deg
        )));
    }
    let theta_rad = req.theta_deg.to_radians();
    let active = active_tensors(req.tensors, req.modes)?;

    let r_align = req.alignment.rotation()?;
    let r = req.alignment.rotation_at(&r_align, theta_rad);
    let r_inv = req.inverse.invert(&r)?;

    let tensors = active
        .iter()
        .map(|t| t.with_matrix(r * t.matrix * r_inv))
        .collect();

    Ok(RotatedTensorSet {
        hkl: req.alignment.hkl,
        theta_deg: req.theta_deg,
        theta_rad,
        tensors,
    })
}

/// Sample angles i·step for all i with i·step < 2π.
pub fn sweep_angles(step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(RamanError::InvalidInput(format!(
            "sweep step must be positive, got {}",
            step
        )));
    }
    let count = (2.0 * PI / step).ceil();
    if count > MAX_SWEEP_SAMPLES as f64 {
        return Err(RamanError::InvalidInput(format!(
            "sweep step {} needs {} samples (limit {})",
            step, count, MAX_SWEEP_SAMPLES
        )));
    }

    Ok((0..count as usize)
        .map(|i| i as f64 * step)
        .take_while(|&theta| theta < 2.0 * PI)
        .collect())
}

/// I(theta) = (ei · R T R⁻¹ · es)² over a full in-plane turn, one curve per active tensor.
pub fn sweep_intensity(req: &SweepRequest) -> Result<Vec<IntensityCurve>> {
    let angles = sweep_angles(req.step_rad)?;
    let active = active_tensors(req.tensors, req.modes)?;
    let r_align = req.alignment.rotation()?;

    // Rotations are shared by every tensor
    let rotations: Vec<(f64, Matrix3<f64>, Matrix3<f64>)> = angles
        .iter()
        .map(|&theta| {
            let r = req.alignment.rotation_at(&r_align, theta);
            req.inverse.invert(&r).map(|r_inv| (theta, r, r_inv))
        })
        .collect::<Result<_>>()?;

    let configuration = req.configuration;
    let curves: Vec<IntensityCurve> = active
        .par_iter()
        .map(|tensor| {
            let samples = rotations
                .iter()
                .map(|(theta, r, r_inv)| (*theta, configuration.intensity(&(r * tensor.matrix * r_inv))))
                .collect();

            IntensityCurve {
                band_index: tensor.band_index,
                label: curve_label(req.modes, tensor.band_index),
                samples,
            }
        })
        .collect();

    log::debug!("Swept {} tensors over {} angles", curves.len(), angles.len());
    Ok(curves)
}

/// Run a sweep and hand the curves to `visualizer`.
pub fn render_sweep(
    req: &SweepRequest,
    visualizer: &dyn IntensityVisualizer,
    style: &PlotStyle,
) -> Result<Vec<IntensityCurve>> {
    let curves = sweep_intensity(req)?;
    visualizer.render(&curves, style)?;
    Ok(curves)
}

fn curve_label(modes: &ModeCatalog, band: BandIndex) -> String {
    match modes.label_for(band) {
        Some(label) => label.to_string(),
        None => {
            log::warn!("No labelled normal mode contains band {}", band);
            format!("band {}", band)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NormalMode;
    use std::f64::consts::FRAC_PI_2;

    fn cubic() -> Lattice {
        Lattice::new([[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]])
    }

    fn aligned_001() -> SurfaceAlignment {
        SurfaceAlignment::new(MillerIndex::new(0, 0, 1), Vector3::new(0.0, 0.0, 1.0), cubic())
    }

    // (100) tilted onto z: R_align takes x -> z and z -> -x
    fn tilted_100() -> SurfaceAlignment {
        SurfaceAlignment::new(MillerIndex::new(1, 0, 0), Vector3::new(0.0, 0.0, 1.0), cubic())
    }

    fn diag(band: BandIndex, a: f64, b: f64, c: f64) -> RamanTensor {
        RamanTensor::new(band, Matrix3::from_diagonal(&Vector3::new(a, b, c)))
    }

    fn general(band: BandIndex) -> RamanTensor {
        RamanTensor::from_rows(band, [[1.0, 0.3, -0.2], [0.3, 2.0, 0.5], [-0.2, 0.5, -1.5]])
    }

    // Bands 1-4 are Raman active, 5 is IR only
    fn modes() -> ModeCatalog {
        ModeCatalog::new(
            "m-3m",
            vec![
                NormalMode::new(vec![1], "A1g"),
                NormalMode::new(vec![2, 3], "Eg"),
                NormalMode::new(vec![4], "T2g"),
                NormalMode::new(vec![5], "T1u"),
            ],
        )
    }

    fn fixed<'a>(
        alignment: SurfaceAlignment,
        theta_deg: f64,
        tensors: &'a TensorCatalog,
        modes: &'a ModeCatalog,
    ) -> FixedAngleRequest<'a> {
        FixedAngleRequest { alignment, theta_deg, tensors, modes, inverse: InverseMode::Explicit }
    }

    fn sweep<'a>(
        alignment: SurfaceAlignment,
        configuration: PolarisationConfig,
        tensors: &'a TensorCatalog,
        modes: &'a ModeCatalog,
    ) -> SweepRequest<'a> {
        SweepRequest {
            alignment,
            configuration,
            tensors,
            modes,
            step_rad: DEFAULT_SWEEP_STEP,
            inverse: InverseMode::Explicit,
        }
    }

    fn sample_at(curve: &IntensityCurve, theta: f64) -> f64 {
        curve
            .samples
            .iter()
            .min_by(|a, b| (a.0 - theta).abs().total_cmp(&(b.0 - theta).abs()))
            .map(|s| s.1)
            .unwrap()
    }

    #[test]
    fn test_zero_angle_on_aligned_surface_is_unchanged() {
        let tensors = TensorCatalog::new(vec![general(1), diag(2, 1.0, -1.0, 0.0)]);
        let modes = modes();
        let out = rotate_tensors(&fixed(aligned_001(), 0.0, &tensors, &modes)).unwrap();
        assert_eq!(out.tensors.len(), 2);
        for (orig, rot) in tensors.iter().zip(out.tensors.iter()) {
            assert_eq!(orig.band_index, rot.band_index);
            assert!((orig.matrix - rot.matrix).amax() < 1e-12);
        }
        assert_eq!(out.theta_rad, 0.0);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let tensors = TensorCatalog::new(vec![general(1), diag(2, 3.0, 1.0, 0.5)]);
        let modes = modes();
        let theta = 37.5;
        let forward = rotate_tensors(&fixed(aligned_001(), theta, &tensors, &modes)).unwrap();
        let rotated = TensorCatalog::new(forward.tensors.clone());
        let back = rotate_tensors(&fixed(aligned_001(), -theta, &rotated, &modes)).unwrap();
        for (orig, rt) in tensors.iter().zip(back.tensors.iter()) {
            assert!((orig.matrix - rt.matrix).amax() < 1e-12);
        }
    }

    #[test]
    fn test_fixed_angle_records_both_units() {
        let tensors = TensorCatalog::new(vec![general(4)]);
        let modes = modes();
        let out = rotate_tensors(&fixed(aligned_001(), 90.0, &tensors, &modes)).unwrap();
        assert_eq!(out.theta_deg, 90.0);
        assert!((out.theta_rad - FRAC_PI_2).abs() < 1e-15);
        // Quarter turn about z swaps the xx and yy components
        let m = out.tensors[0].matrix;
        assert!((m[(0, 0)] - 2.0).abs() < 1e-12);
        assert!((m[(1, 1)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tilted_surface_applies_in_plane_turn_first() {
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();
        let out = rotate_tensors(&fixed(tilted_100(), 30.0, &tensors, &modes)).unwrap();

        let r_align = Matrix3::new(
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
        );
        let (s, c) = 30f64.to_radians().sin_cos();
        let r_xy = Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        );
        let r = r_align * r_xy;
        let expected = r * general(1).matrix * r.transpose();
        let got = out.tensors[0].matrix;
        assert!((got - expected).amax() < 1e-12, "got\n{}\nexpected\n{}", got, expected);

        // Composing the other way round gives a different tensor here
        let swapped = r_xy * r_align;
        let wrong = swapped * general(1).matrix * swapped.transpose();
        assert!((got - wrong).amax() > 1e-3);
    }

    #[test]
    fn test_tilted_surface_sweep_samples() {
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();
        let t = general(1).matrix;

        // ei = y, es = x pulled back through R: y -> (sinθ, cosθ, 0), x -> (0, 0, -1)
        let mut req = sweep(tilted_100(), PolarisationConfig::cross(), &tensors, &modes);
        req.step_rad = PI / 180.0;
        let curve = &sweep_intensity(&req).unwrap()[0];
        for &(theta, intensity) in curve.samples.iter().step_by(15) {
            let (s, c) = theta.sin_cos();
            let expected = (s * t[(0, 2)] + c * t[(1, 2)]).powi(2);
            assert!((intensity - expected).abs() < 1e-10, "θ={} got {} want {}", theta, intensity, expected);
        }
        let (s, c) = (PI / 6.0).sin_cos();
        assert!((sample_at(curve, PI / 6.0) - (-0.2 * s + 0.5 * c).powi(2)).abs() < 1e-10);

        req.configuration = PolarisationConfig::parallel();
        let curve = &sweep_intensity(&req).unwrap()[0];
        for &(theta, intensity) in curve.samples.iter().step_by(15) {
            let (s, c) = theta.sin_cos();
            let v = Vector3::new(s, c, 0.0);
            let expected = v.dot(&(t * v)).powi(2);
            assert!((intensity - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_tilted_surface_preserves_invariants() {
        let alignment = SurfaceAlignment::new(MillerIndex::new(1, 1, 1), Vector3::new(0.0, 0.0, 1.0), cubic());
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();
        let out = rotate_tensors(&fixed(alignment, 20.0, &tensors, &modes)).unwrap();
        let m = out.tensors[0].matrix;
        let t = general(1).matrix;
        assert!((m.trace() - t.trace()).abs() < 1e-12);
        assert!((m - m.transpose()).amax() < 1e-12);
        assert!((m.determinant() - t.determinant()).abs() < 1e-10);
    }

    #[test]
    fn test_inverse_modes_agree() {
        let alignment = SurfaceAlignment::new(MillerIndex::new(1, 2, 0), Vector3::new(0.0, 0.0, 1.0), cubic());
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();
        let run = |inverse| {
            let mut req = fixed(alignment, 63.0, &tensors, &modes);
            req.inverse = inverse;
            rotate_tensors(&req).unwrap()
        };
        let explicit = run(InverseMode::Explicit);
        let transpose = run(InverseMode::Transpose);
        assert!((explicit.tensors[0].matrix - transpose.tensors[0].matrix).amax() < 1e-12);
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let tensors = TensorCatalog::default();
        let modes = modes();
        let req = fixed(aligned_001(), f64::NAN, &tensors, &modes);
        assert!(matches!(rotate_tensors(&req), Err(RamanError::InvalidInput(_))));
    }

    #[test]
    fn test_sweep_angle_grid() {
        let angles = sweep_angles(DEFAULT_SWEEP_STEP).unwrap();
        assert_eq!(angles.len(), 361);
        assert_eq!(angles[0], 0.0);
        assert!(*angles.last().unwrap() < 2.0 * PI);
        assert_eq!(sweep_angles(0.1).unwrap().len(), 63);
        assert!(sweep_angles(0.0).is_err());
        assert!(sweep_angles(-0.1).is_err());
        assert!(sweep_angles(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sweep_sample_count_is_capped() {
        assert!(matches!(sweep_angles(1e-10), Err(RamanError::InvalidInput(_))));
        assert!(matches!(sweep_angles(f64::MIN_POSITIVE), Err(RamanError::InvalidInput(_))));
        let finest = 2.0 * PI / MAX_SWEEP_SAMPLES as f64;
        assert!(sweep_angles(finest * 1.001).unwrap().len() <= MAX_SWEEP_SAMPLES);
    }

    #[test]
    fn test_identity_tensor_parallel_and_cross() {
        let tensors = TensorCatalog::new(vec![RamanTensor::new(1, Matrix3::identity())]);
        let modes = modes();
        let mut req = sweep(aligned_001(), PolarisationConfig::parallel(), &tensors, &modes);
        let curves = sweep_intensity(&req).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].label, "A1g");
        for theta in [0.0, FRAC_PI_2, PI] {
            assert!((sample_at(&curves[0], theta) - 1.0).abs() < 1e-12);
        }

        req.configuration = PolarisationConfig::cross();
        let curves = sweep_intensity(&req).unwrap();
        assert!(curves[0].max_intensity() < 1e-20);
    }

    #[test]
    fn test_diagonal_tensor_pattern() {
        let (a, b) = (3.0, 1.0);
        let tensors = TensorCatalog::new(vec![diag(2, a, b, 0.0)]);
        let modes = modes();
        let mut req = sweep(aligned_001(), PolarisationConfig::from_cross_flag(false), &tensors, &modes);
        req.step_rad = PI / 180.0;

        // Parallel: (a sin²θ + b cos²θ)²
        let curve = &sweep_intensity(&req).unwrap()[0];
        assert_eq!(curve.label, "Eg");
        for &(theta, intensity) in curve.samples.iter() {
            let expected = (a * theta.sin().powi(2) + b * theta.cos().powi(2)).powi(2);
            assert!((intensity - expected).abs() < 1e-10, "θ={} got {} want {}", theta, intensity, expected);
        }
        assert!((sample_at(curve, 0.0) - b * b).abs() < 1e-12);
        assert!((sample_at(curve, FRAC_PI_2) - a * a).abs() < 1e-10);

        // Cross: ((a - b) sinθ cosθ)²
        req.configuration = PolarisationConfig::from_cross_flag(true);
        let curve = &sweep_intensity(&req).unwrap()[0];
        for &(theta, intensity) in curve.samples.iter() {
            let expected = ((a - b) * theta.sin() * theta.cos()).powi(2);
            assert!((intensity - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_inactive_bands_are_left_out() {
        let tensors = TensorCatalog::new(vec![general(5), general(3), general(42), general(1)]);
        let modes = modes();

        let rotated = rotate_tensors(&fixed(aligned_001(), 15.0, &tensors, &modes)).unwrap();
        let bands: Vec<BandIndex> = rotated.tensors.iter().map(|t| t.band_index).collect();
        assert_eq!(bands, vec![3, 1]);

        let mut req = sweep(aligned_001(), PolarisationConfig::parallel(), &tensors, &modes);
        req.step_rad = 0.1;
        req.inverse = InverseMode::Transpose;
        let curves = sweep_intensity(&req).unwrap();
        let bands: Vec<BandIndex> = curves.iter().map(|c| c.band_index).collect();
        assert_eq!(bands, vec![3, 1]);
        assert_eq!(curves[0].label, "Eg");
        assert_eq!(curves[1].label, "A1g");
        assert_eq!(curves[0].samples.len(), 63);
    }

    #[test]
    fn test_ir_only_catalog_gives_empty_outputs() {
        let tensors = TensorCatalog::new(vec![general(5)]);
        let modes = modes();
        assert!(rotate_tensors(&fixed(aligned_001(), 0.0, &tensors, &modes)).unwrap().tensors.is_empty());
        let req = sweep(aligned_001(), PolarisationConfig::parallel(), &tensors, &modes);
        assert!(sweep_intensity(&req).unwrap().is_empty());
    }

    #[test]
    fn test_active_tensors_filter() {
        let catalog = TensorCatalog::new(vec![general(1), general(2), general(3), general(4)]);
        let modes = ModeCatalog::new(
            "m-3m",
            vec![
                NormalMode::new(vec![1], "T1u"),
                NormalMode::new(vec![2, 3], "Eg"),
                NormalMode::new(vec![4], "A2u"),
            ],
        );
        let active = active_tensors(&catalog, &modes).unwrap();
        let bands: Vec<BandIndex> = active.iter().map(|t| t.band_index).collect();
        assert_eq!(bands, vec![2, 3]);
    }

    #[test]
    fn test_tagged_request_dispatch() {
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();
        let request = PolarisationRequest::FixedAngle(fixed(aligned_001(), 10.0, &tensors, &modes));
        assert!(matches!(request.run().unwrap(), PolarisationOutput::Rotated(_)));

        let request = PolarisationRequest::Sweep(sweep(aligned_001(), PolarisationConfig::parallel(), &tensors, &modes));
        match request.run().unwrap() {
            PolarisationOutput::Curves(c) => assert_eq!(c[0].samples.len(), 361),
            other => panic!("expected curves, got {:?}", other),
        }
    }

    #[test]
    fn test_upstream_errors_propagate() {
        let tensors = TensorCatalog::new(vec![general(1)]);
        let modes = modes();

        let mut alignment = aligned_001();
        alignment.hkl = MillerIndex::new(0, 0, 0);
        let req = fixed(alignment, 0.0, &tensors, &modes);
        assert!(matches!(rotate_tensors(&req), Err(RamanError::InvalidMillerIndex)));

        let mut alignment = aligned_001();
        alignment.collection_axis = Vector3::zeros();
        let req = fixed(alignment, 0.0, &tensors, &modes);
        assert!(matches!(rotate_tensors(&req), Err(RamanError::InvalidInput(_))));

        let unknown = ModeCatalog::new("P4/mmm", vec![NormalMode::new(vec![1], "A1g")]);
        let req = fixed(aligned_001(), 0.0, &tensors, &unknown);
        assert!(matches!(rotate_tensors(&req), Err(RamanError::UnknownPointGroup(_))));
    }
}
