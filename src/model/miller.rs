// src/model/miller.rs
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Miller indices (h k l) of a crystal surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillerIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl MillerIndex {
    pub fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, l }
    }

    pub fn is_zero(&self) -> bool {
        self.h == 0 && self.k == 0 && self.l == 0
    }

    /// Indices promoted to reals, in (h, k, l) order.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.h as f64, self.k as f64, self.l as f64)
    }

    /// Divide out the common factor, e.g. (2 2 0) -> (1 1 0).
    /// (0 0 0) is returned unchanged.
    pub fn reduced(&self) -> Self {
        let g = gcd(gcd(self.h.abs(), self.k.abs()), self.l.abs());
        if g <= 1 {
            return *self;
        }
        Self::new(self.h / g, self.k / g, self.l / g)
    }
}

impl From<[i32; 3]> for MillerIndex {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(i32, i32, i32)> for MillerIndex {
    fn from(v: (i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

/// Compact form used in file names and records: (1 -1 0) -> "1-10".
impl fmt::Display for MillerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.h, self.k, self.l)
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
