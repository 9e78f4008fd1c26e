// src/lib.rs
//! Polarisation-resolved Raman intensities of oriented crystal surfaces.
//!
//! Raman tensors computed for a bulk crystal are rotated so that a chosen
//! (hkl) surface faces the collection optics, then either evaluated at a
//! fixed in-plane angle or swept through a full turn for a given incident /
//! scattered polarisation pair.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod utils;

pub use config::Config;
pub use error::{RamanError, Result};
pub use model::{BandIndex, Lattice, MillerIndex, ModeCatalog, NormalMode, RamanTensor, TensorCatalog};
pub use physics::group_theory::{select_active, ActiveModeSet, Spectroscopy};
pub use physics::polarisation::{
    FixedAngleRequest, IntensityCurve, InverseMode, PolarisationConfig, PolarisationOutput,
    PolarisationRequest, RotatedTensorSet, SurfaceAlignment, SweepRequest,
};
