// src/model/tensor.rs
use nalgebra::Matrix3;
use serde::Serialize;

/// Phonon band index as numbered by the lattice-dynamics code (1-based).
pub type BandIndex = u32;

/// Raman tensor of one vibrational mode. The band index travels with the
/// matrix through every transformation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "TensorRecord")]
pub struct RamanTensor {
    pub band_index: BandIndex,
    pub matrix: Matrix3<f64>,
}

/// Plain serialisable form of a [`RamanTensor`].
#[derive(Clone, Debug, Serialize)]
pub struct TensorRecord {
    pub band_index: BandIndex,
    pub raman_tensor: [[f64; 3]; 3],
}

impl RamanTensor {
    pub fn new(band_index: BandIndex, matrix: Matrix3<f64>) -> Self {
        Self { band_index, matrix }
    }

    pub fn from_rows(band_index: BandIndex, rows: [[f64; 3]; 3]) -> Self {
        let matrix = Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        );
        Self { band_index, matrix }
    }

    pub fn rows(&self) -> [[f64; 3]; 3] {
        let m = &self.matrix;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Same band, new matrix
    pub fn with_matrix(&self, matrix: Matrix3<f64>) -> Self {
        Self { band_index: self.band_index, matrix }
    }
}

impl From<RamanTensor> for TensorRecord {
    fn from(t: RamanTensor) -> Self {
        TensorRecord {
            band_index: t.band_index,
            raman_tensor: t.rows(),
        }
    }
}

/// Ordered (band index, tensor) pairs, read-only once loaded.
#[derive(Clone, Debug, Default)]
pub struct TensorCatalog {
    entries: Vec<RamanTensor>,
}

impl TensorCatalog {
    pub fn new(entries: Vec<RamanTensor>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RamanTensor> {
        self.entries.iter()
    }

    pub fn get(&self, band: BandIndex) -> Option<&RamanTensor> {
        self.entries.iter().find(|t| t.band_index == band)
    }

    /// Tensors whose band is listed in `bands`, in catalog order.
    pub fn select(&self, bands: &[BandIndex]) -> Vec<RamanTensor> {
        self.entries
            .iter()
            .filter(|t| bands.contains(&t.band_index))
            .cloned()
            .collect()
    }
}
