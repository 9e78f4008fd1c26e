// src/physics/group_theory.rs

use crate::error::{RamanError, Result};
use crate::model::{BandIndex, ModeCatalog, NormalMode};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spectroscopy {
    Infrared,
    Raman,
}

impl FromStr for Spectroscopy {
    type Err = RamanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ir" | "infrared" => Ok(Spectroscopy::Infrared),
            "raman" => Ok(Spectroscopy::Raman),
            other => Err(RamanError::InvalidInput(format!(
                "unknown spectroscopy type '{}' (expected 'ir' or 'raman')",
                other
            ))),
        }
    }
}

impl fmt::Display for Spectroscopy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Spectroscopy::Infrared => write!(f, "IR"),
            Spectroscopy::Raman => write!(f, "Raman"),
        }
    }
}

/// Active irreps of one crystallographic point group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGroup {
    /// Hermann–Mauguin symbol, the primary key (e.g. "4/mmm")
    pub symbol: &'static str,
    pub schoenflies: &'static str,
    pub ir: &'static [&'static str],
    pub raman: &'static [&'static str],
}

impl PointGroup {
    pub fn allowed(&self, spectroscopy: Spectroscopy) -> &'static [&'static str] {
        match spectroscopy {
            Spectroscopy::Infrared => self.ir,
            Spectroscopy::Raman => self.raman,
        }
    }

    /// Exact, case- and prime-sensitive label match
    pub fn is_active(&self, label: &str, spectroscopy: Spectroscopy) -> bool {
        self.allowed(spectroscopy).iter().any(|l| *l == label)
    }
}

macro_rules! pg {
    ($hm:expr, $sch:expr, [$($ir:expr),*], [$($ra:expr),*]) => {
        PointGroup { symbol: $hm, schoenflies: $sch, ir: &[$($ir),*], raman: &[$($ra),*] }
    };
}

// "1" lists nothing as active for either technique.
// Complex-conjugate pairs keep the split labels (1E/2E) used by phonopy.
static POINT_GROUPS: [PointGroup; 32] = [
    // === TRICLINIC ===
    pg!("1", "C1", [], []),
    pg!("-1", "Ci", ["Au"], ["Ag"]),
    // === MONOCLINIC ===
    pg!("2", "C2", ["A", "B"], ["A", "B"]),
    pg!("m", "Cs", ["A'", "A''"], ["A'", "A''"]),
    pg!("2/m", "C2h", ["Au", "Bu"], ["Ag", "Bg"]),
    // === ORTHORHOMBIC ===
    pg!("222", "D2", ["B1", "B2", "B3"], ["A", "B1", "B2", "B3"]),
    pg!("mm2", "C2v", ["A1", "B1", "B2"], ["A1", "A2", "B1", "B2"]),
    pg!("mmm", "D2h", ["B1u", "B2u", "B3u"], ["Ag", "B1g", "B2g", "B3g"]),
    // === TETRAGONAL ===
    pg!("4", "C4", ["A", "1E", "2E"], ["A", "B", "1E", "2E"]),
    pg!("-4", "S4", ["B", "1E", "2E"], ["A", "B", "1E", "2E"]),
    pg!("4/m", "C4h", ["Au", "1Eu", "2Eu"], ["Ag", "Bg", "1Eg", "2Eg"]),
    pg!("422", "D4", ["A2", "E"], ["A1", "B1", "B2", "E"]),
    pg!("4mm", "C4v", ["A1", "E"], ["A1", "B1", "B2", "E"]),
    pg!("-42m", "D2d", ["B2", "E"], ["A1", "B1", "B2", "E"]),
    pg!("4/mmm", "D4h", ["A2u", "E"], ["A1g", "B1g", "B2g", "Eg"]),
    // === TRIGONAL ===
    pg!("3", "C3", ["A", "1E", "2E"], ["A", "1E", "2E"]),
    pg!("-3", "C3i", ["Au", "1Eu", "2Eu"], ["Ag", "1Eg", "2Eg"]),
    pg!("32", "D3", ["A2", "E"], ["A1", "E"]),
    pg!("3m", "C3v", ["A1", "E"], ["A1", "E"]),
    pg!("-3m", "D3d", ["A2u", "Eu"], ["A1g", "Eg"]),
    // === HEXAGONAL ===
    pg!("6", "C6", ["A", "2E1", "1E1"], ["A", "1E2", "2E2", "2E1", "1E1"]),
    pg!("-6", "C3h", ["A''", "2E'", "1E'"], ["A'", "2E'", "1E'", "2E''", "1E''"]),
    pg!("6/m", "C6h", ["Au", "2E1u", "1E1u"], ["Ag", "1E2g", "2E2g", "2E1g", "1E1g"]),
    pg!("622", "D6", ["A2", "E1"], ["A1", "E2", "E1"]),
    pg!("6mm", "C6v", ["A1", "E1"], ["A1", "E2", "E1"]),
    pg!("-6m2", "D3h", ["A''2", "E'"], ["A'1", "E'", "E''"]),
    pg!("6/mmm", "D6h", ["A2u", "E1u"], ["A1g", "E2g", "E1g"]),
    // === CUBIC ===
    pg!("23", "T", ["T"], ["A", "1E", "2E", "T"]),
    pg!("m-3", "Th", ["Tu"], ["Ag", "1Eg", "2Eg", "Tg"]),
    pg!("432", "O", ["T1"], ["A1", "E", "T2"]),
    pg!("-43m", "Td", ["T2"], ["A1", "E", "T2"]),
    pg!("m-3m", "Oh", ["T1u"], ["A1g", "Eg", "T2g"]),
];

// Symbol index (initialized once, on first lookup)
static POINT_GROUP_INDEX: OnceLock<HashMap<&'static str, &'static PointGroup>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static PointGroup> {
    POINT_GROUP_INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for group in POINT_GROUPS.iter() {
            map.insert(group.symbol, group);
            map.insert(group.schoenflies, group);
        }
        map
    })
}

/// All 32 groups, triclinic to cubic.
pub fn point_groups() -> impl Iterator<Item = &'static PointGroup> {
    POINT_GROUPS.iter()
}

/// Look up a group by Hermann–Mauguin symbol or Schoenflies name.
pub fn point_group(symbol: &str) -> Result<&'static PointGroup> {
    index()
        .get(symbol.trim())
        .copied()
        .ok_or_else(|| RamanError::UnknownPointGroup(symbol.to_string()))
}

/// Band-index groups allowed for `spectroscopy`, one group per active normal mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveModeSet {
    pub groups: Vec<Vec<BandIndex>>,
}

impl ActiveModeSet {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, band: BandIndex) -> bool {
        self.groups.iter().any(|g| g.contains(&band))
    }

    /// Flattened band list, in mode order
    pub fn bands(&self) -> Vec<BandIndex> {
        self.groups.iter().flatten().copied().collect()
    }
}

/// Select the modes whose irrep is active in `point_group` for `spectroscopy`.
pub fn select_active(
    point_group_symbol: &str,
    spectroscopy: Spectroscopy,
    modes: &[NormalMode],
) -> Result<ActiveModeSet> {
    let group = point_group(point_group_symbol)?;

    let groups: Vec<Vec<BandIndex>> = modes
        .iter()
        .filter(|m| {
            m.ir_label
                .as_deref()
                .map_or(false, |label| group.is_active(label, spectroscopy))
        })
        .map(|m| m.band_indices.clone())
        .collect();

    log::debug!(
        "{} active modes in {} ({}): {:?}",
        spectroscopy, group.symbol, group.schoenflies, groups
    );
    Ok(ActiveModeSet { groups })
}

/// [`select_active`] using the catalog's own point group.
pub fn active_modes(spectroscopy: Spectroscopy, catalog: &ModeCatalog) -> Result<ActiveModeSet> {
    select_active(&catalog.point_group, spectroscopy, &catalog.modes)
}
