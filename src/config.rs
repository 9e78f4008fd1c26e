// src/config.rs

use crate::error::Result;
use crate::physics::polarisation::{InverseMode, DEFAULT_SWEEP_STEP};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Plot style ---
// Lives here so Config can own it

/// Legend anchor on a circle around the plot centre, in axes fractions:
/// (0.6 + cos(angle)/2, 0.6 + sin(angle)/2)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub angle_deg: f64,
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self { angle_deg: 0.0 }
    }
}

impl LegendPlacement {
    pub fn anchor(&self) -> (f64, f64) {
        let angle = self.angle_deg.to_radians();
        (0.6 + angle.cos() / 2.0, 0.6 + angle.sin() / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    #[serde(default)]
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub show_radial_ticks: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub legend: LegendPlacement,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            show_radial_ticks: false,
            show_grid: true,
            legend: LegendPlacement::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// In-plane increment in radians
    pub step_rad: f64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self { step_rad: DEFAULT_SWEEP_STEP }
    }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub sweep: SweepSettings,

    #[serde(default)]
    pub inverse: InverseMode,

    #[serde(default)]
    pub plot: PlotStyle,
}

impl Config {
    /// Loads config from standard OS location (e.g., ~/.config/polraman/settings.json)
    pub fn load() -> (Self, String) {
        let path = Self::get_path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                Err(e) => {
                    log::warn!("Ignoring config {:?}: {}", path, e);
                    (Self::default(), format!("Error reading config: {}", e))
                }
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        let path = Self::get_path();
        match self.save_to(&path) {
            Ok(()) => format!("Config saved to {:?}", path),
            Err(e) => format!("Failed to save config: {}", e),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "polraman") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
