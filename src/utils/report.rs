// src/utils/report.rs

use crate::model::ModeCatalog;
use crate::physics::group_theory::{ActiveModeSet, Spectroscopy};
use crate::physics::polarisation::{IntensityCurve, RotatedTensorSet};

/// Text record of a fixed-angle rotation, as written to `.dat` files
pub fn rotated_tensor_record(set: &RotatedTensorSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "crystal_surface: [{} {} {}]\n",
        set.hkl.h, set.hkl.k, set.hkl.l
    ));
    out.push_str(&format!("theta: {} degrees\n", set.theta_deg));
    out.push_str(&format!("theta: {:.8} radians\n", set.theta_rad));
    out.push_str("--------------------------------------------------\n");

    for tensor in &set.tensors {
        out.push_str(&format!("band_index: {}\n", tensor.band_index));
        out.push_str("raman_tensor:\n");
        for row in tensor.rows().iter() {
            out.push_str(&format!(
                "  [{:>14.8}, {:>14.8}, {:>14.8}]\n",
                row[0], row[1], row[2]
            ));
        }
    }
    out
}

/// Mode table with an activity column for `spectroscopy`
pub fn active_mode_summary(
    catalog: &ModeCatalog,
    active: &ActiveModeSet,
    spectroscopy: Spectroscopy,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Point group: {}\n", catalog.point_group));
    out.push_str(&format!(
        "{} active modes: {} of {}\n",
        spectroscopy,
        active.groups.len(),
        catalog.modes.len()
    ));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<14} {:<8} {:<12} {:<6}\n",
        "Bands", "Irrep", "Freq", "Active"
    ));
    out.push_str("--------------------------------------------------\n");

    for mode in &catalog.modes {
        let bands = mode
            .band_indices
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let freq = mode
            .frequency
            .map_or_else(|| "-".to_string(), |f| format!("{:.4}", f));
        let is_active = active.groups.iter().any(|g| *g == mode.band_indices);
        out.push_str(&format!(
            "{:<14} {:<8} {:<12} {:<6}\n",
            bands,
            mode.ir_label.as_deref().unwrap_or("?"),
            freq,
            if is_active { "yes" } else { "no" }
        ));
    }
    out
}

/// Peak intensity and its angle for each swept curve
pub fn curve_summary(curves: &[IntensityCurve]) -> String {
    if curves.is_empty() {
        return "No Raman-active tensors to plot.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<10} {:<14} {:<10}\n",
        "Band", "Label", "I_max", "θ_max (°)"
    ));
    out.push_str("--------------------------------------------------\n");
    for curve in curves {
        let peak = curve
            .samples
            .iter()
            .copied()
            .fold((0.0, 0.0), |best, s| if s.1 > best.1 { s } else { best });
        out.push_str(&format!(
            "{:<8} {:<10} {:<14.6e} {:<10.2}\n",
            curve.band_index,
            curve.label,
            peak.1,
            peak.0.to_degrees()
        ));
    }
    out
}
