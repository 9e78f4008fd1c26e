// src/io/poscar.rs

use crate::error::{RamanError, Result};
use crate::model::Lattice;
use std::fs;
use std::path::Path;

pub fn parse(path: &Path) -> Result<Lattice> {
    let text = fs::read_to_string(path)?;
    parse_lattice(&text)
}

/// Lattice vectors from POSCAR text: comment, scale, then three rows.
/// A single negative scale is the target cell volume. Three scale values
/// multiply the Cartesian x, y and z components separately (VASP 6).
pub fn parse_lattice(text: &str) -> Result<Lattice> {
    let mut lines = text.lines();

    let _ = lines.next().ok_or_else(|| format_err("Empty POSCAR"))?; // Comment

    // Scale (anything after the numbers is a comment)
    let scale_line = lines.next().ok_or_else(|| format_err("Unexpected EOF"))?;
    let scales: Vec<f64> = scale_line
        .split_whitespace()
        .map_while(|s| s.parse::<f64>().ok())
        .collect();

    // Lattice
    let mut vectors = [[0.0; 3]; 3];
    for (i, row) in vectors.iter_mut().enumerate() {
        let line = lines.next().ok_or_else(|| format_err("Missing Lattice"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(format_err(&format!("Invalid Lattice Line {}", i + 1)));
        }
        for (j, x) in row.iter_mut().enumerate() {
            *x = parts[j]
                .parse::<f64>()
                .map_err(|_| format_err(&format!("Invalid lattice entry '{}'", parts[j])))?;
        }
    }

    let raw = Lattice::new(vectors);
    match scales.as_slice() {
        [scale] => uniform_scale(raw, *scale),
        [sx, sy, sz] => {
            if [sx, sy, sz].iter().any(|s| !s.is_finite() || **s <= 0.0) {
                return Err(format_err("Per-axis scale factors must be positive"));
            }
            let mut vectors = raw.vectors;
            for row in vectors.iter_mut() {
                row[0] *= sx;
                row[1] *= sy;
                row[2] *= sz;
            }
            Ok(Lattice::new(vectors))
        }
        [] => Err(format_err("Invalid Scale")),
        other => Err(format_err(&format!(
            "Expected 1 or 3 scale factors, found {}",
            other.len()
        ))),
    }
}

fn uniform_scale(raw: Lattice, scale: f64) -> Result<Lattice> {
    let factor = if scale > 0.0 {
        scale
    } else if scale < 0.0 {
        let volume = raw.volume().abs();
        if volume == 0.0 {
            return Err(RamanError::DegenerateLattice { volume });
        }
        (-scale / volume).cbrt()
    } else {
        return Err(format_err("Scale factor cannot be zero"));
    };
    Ok(raw.scaled(factor))
}

fn format_err(msg: &str) -> RamanError {
    RamanError::DataFormat(format!("POSCAR: {}", msg))
}
