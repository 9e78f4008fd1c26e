// src/error.rs

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RamanError {
    /// Zero, non-finite or otherwise unusable vectors and parameters
    InvalidInput(String),
    /// Lattice vectors are coplanar (triple product ~ 0)
    DegenerateLattice { volume: f64 },
    /// Miller indices (0 0 0)
    InvalidMillerIndex,
    UnknownPointGroup(String),
    /// Malformed catalog or lattice data coming from a loader
    DataFormat(String),
    Io(io::Error),
    Render(String),
}

pub type Result<T> = std::result::Result<T, RamanError>;

impl fmt::Display for RamanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RamanError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            RamanError::DegenerateLattice { volume } => write!(
                f,
                "Lattice vectors are coplanar (cell volume {:.3e})",
                volume
            ),
            RamanError::InvalidMillerIndex => write!(f, "Miller indices cannot be (0 0 0)"),
            RamanError::UnknownPointGroup(symbol) => {
                write!(f, "Unknown crystallographic point group '{}'", symbol)
            }
            RamanError::DataFormat(msg) => write!(f, "Malformed data: {}", msg),
            RamanError::Io(e) => write!(f, "I/O error: {}", e),
            RamanError::Render(msg) => write!(f, "Plot rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for RamanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RamanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RamanError {
    fn from(e: io::Error) -> Self {
        RamanError::Io(e)
    }
}

impl From<serde_yaml::Error> for RamanError {
    fn from(e: serde_yaml::Error) -> Self {
        RamanError::DataFormat(e.to_string())
    }
}

impl From<serde_json::Error> for RamanError {
    fn from(e: serde_json::Error) -> Self {
        RamanError::DataFormat(e.to_string())
    }
}
