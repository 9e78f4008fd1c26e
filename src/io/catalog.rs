// src/io/catalog.rs

use crate::error::{RamanError, Result};
use crate::model::{BandIndex, ModeCatalog, NormalMode, RamanTensor, TensorCatalog};
use serde::Deserialize;
use std::path::Path;

/// Document syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Yaml,
    Json,
}

impl Encoding {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Encoding::Json,
            _ => Encoding::Yaml,
        }
    }
}

// --- Raw document shapes (phonopy style) ---

#[derive(Deserialize)]
struct TensorDocument {
    raman_activities: Vec<RawActivity>,
}

#[derive(Deserialize)]
struct RawActivity {
    band_index: BandIndex,
    raman_tensor: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct ModeDocument {
    point_group: Symbol,
    normal_modes: Vec<NormalMode>,
}

// YAML reads `point_group: 222` or `-1` as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum Symbol {
    Text(String),
    Number(i64),
}

impl Symbol {
    fn into_string(self) -> String {
        match self {
            Symbol::Text(s) => s,
            Symbol::Number(n) => n.to_string(),
        }
    }
}

// --- Tensor catalog ---

pub fn parse_tensor_catalog(text: &str, encoding: Encoding) -> Result<TensorCatalog> {
    let doc: TensorDocument = match encoding {
        Encoding::Yaml => serde_yaml::from_str(text)?,
        Encoding::Json => serde_json::from_str(text)?,
    };

    let entries = doc
        .raman_activities
        .into_iter()
        .map(|a| -> Result<RamanTensor> {
            let rows = to_rows(a.band_index, &a.raman_tensor)?;
            Ok(RamanTensor::from_rows(a.band_index, rows))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TensorCatalog::new(entries))
}

fn to_rows(band: BandIndex, raw: &[Vec<f64>]) -> Result<[[f64; 3]; 3]> {
    if raw.len() != 3 || raw.iter().any(|row| row.len() != 3) {
        return Err(RamanError::DataFormat(format!(
            "raman_tensor of band {} is not 3x3",
            band
        )));
    }
    let mut rows = [[0.0; 3]; 3];
    for (i, row) in raw.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            if !x.is_finite() {
                return Err(RamanError::DataFormat(format!(
                    "raman_tensor of band {} has a non-finite entry",
                    band
                )));
            }
            rows[i][j] = x;
        }
    }
    Ok(rows)
}

// --- Mode catalog ---

pub fn parse_mode_catalog(text: &str, encoding: Encoding) -> Result<ModeCatalog> {
    let doc: ModeDocument = match encoding {
        Encoding::Yaml => serde_yaml::from_str(text)?,
        Encoding::Json => serde_json::from_str(text)?,
    };

    if let Some(mode) = doc.normal_modes.iter().find(|m| m.band_indices.is_empty()) {
        return Err(RamanError::DataFormat(format!(
            "normal mode {:?} has no band indices",
            mode.ir_label
        )));
    }

    Ok(ModeCatalog {
        point_group: doc.point_group.into_string(),
        modes: doc.normal_modes,
    })
}
