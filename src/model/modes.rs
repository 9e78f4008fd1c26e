// src/model/modes.rs
use super::tensor::BandIndex;
use serde::{Deserialize, Serialize};

/// One normal mode (or degenerate multiplet) with its irrep label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalMode {
    pub band_indices: Vec<BandIndex>,
    // phonopy writes null when the irrep could not be assigned
    #[serde(default)]
    pub ir_label: Option<String>,
    #[serde(default)]
    pub frequency: Option<f64>,
}

impl NormalMode {
    pub fn new(band_indices: Vec<BandIndex>, ir_label: &str) -> Self {
        Self {
            band_indices,
            ir_label: Some(ir_label.to_string()),
            frequency: None,
        }
    }

    pub fn contains(&self, band: BandIndex) -> bool {
        self.band_indices.contains(&band)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeCatalog {
    pub point_group: String,
    pub modes: Vec<NormalMode>,
}

impl ModeCatalog {
    pub fn new(point_group: &str, modes: Vec<NormalMode>) -> Self {
        Self {
            point_group: point_group.to_string(),
            modes,
        }
    }

    /// Irrep label of the mode containing `band`.
    pub fn label_for(&self, band: BandIndex) -> Option<&str> {
        self.modes
            .iter()
            .find(|m| m.contains(band))
            .and_then(|m| m.ir_label.as_deref())
    }
}
