// src/io/mod.rs
pub mod catalog;
pub mod poscar;
pub mod rotated;

use crate::error::Result;
use crate::model::{Lattice, ModeCatalog, TensorCatalog};
use crate::physics::polarisation::RotatedTensorSet;
use catalog::Encoding;
use std::fs;
use std::path::Path;

pub fn load_tensor_catalog(path: impl AsRef<Path>) -> Result<TensorCatalog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let catalog = catalog::parse_tensor_catalog(&text, Encoding::from_path(path))?;
    log::info!("Loaded {} Raman tensors from {:?}", catalog.len(), path);
    Ok(catalog)
}

pub fn load_mode_catalog(path: impl AsRef<Path>) -> Result<ModeCatalog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let catalog = catalog::parse_mode_catalog(&text, Encoding::from_path(path))?;
    log::info!(
        "Loaded {} normal modes (point group {}) from {:?}",
        catalog.modes.len(),
        catalog.point_group,
        path
    );
    Ok(catalog)
}

/// Lattice vectors are always read from POSCAR.
pub fn load_lattice(path: impl AsRef<Path>) -> Result<Lattice> {
    let path = path.as_ref();
    let lattice = poscar::parse(path)?;
    log::info!("Loaded lattice from {:?} (V = {:.4})", path, lattice.volume());
    Ok(lattice)
}

pub fn save_rotated(path: impl AsRef<Path>, set: &RotatedTensorSet) -> Result<()> {
    let path = path.as_ref();
    rotated::write(path, set)?;
    log::info!("Rotated tensors for ({}) at {}° written to {:?}", set.hkl, set.theta_deg, path);
    Ok(())
}
