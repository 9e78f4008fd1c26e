// src/io/rotated.rs

use crate::error::Result;
use crate::model::MillerIndex;
use crate::physics::polarisation::RotatedTensorSet;
use crate::utils::report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `Rotated_Raman_Tensors_[hkl]_<theta>deg.dat`
pub fn default_file_name(hkl: MillerIndex, theta_deg: f64) -> String {
    format!("Rotated_Raman_Tensors_[{}]_{}deg.dat", hkl, theta_deg)
}

/// Text record for `.dat` (and any other extension), pretty JSON for `.json`.
pub fn write(path: &Path, set: &RotatedTensorSet) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("json"));

    let mut file = BufWriter::new(File::create(path)?);
    if is_json {
        serde_json::to_writer_pretty(&mut file, set)?;
        writeln!(file)?;
    } else {
        file.write_all(report::rotated_tensor_record(set).as_bytes())?;
    }
    file.flush()?;
    Ok(())
}
