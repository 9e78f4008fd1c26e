// src/model/lattice.rs
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    // Lattice vectors: [a1, a2, a3]
    pub vectors: [[f64; 3]; 3],
}

impl Lattice {
    pub fn new(vectors: [[f64; 3]; 3]) -> Self {
        Self { vectors }
    }

    pub fn a1(&self) -> Vector3<f64> {
        Vector3::from(self.vectors[0])
    }

    pub fn a2(&self) -> Vector3<f64> {
        Vector3::from(self.vectors[1])
    }

    pub fn a3(&self) -> Vector3<f64> {
        Vector3::from(self.vectors[2])
    }

    /// Lattice vectors as matrix rows
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_rows(&[
            self.a1().transpose(),
            self.a2().transpose(),
            self.a3().transpose(),
        ])
    }

    /// Signed triple product a1 · (a2 × a3)
    pub fn volume(&self) -> f64 {
        self.a1().dot(&self.a2().cross(&self.a3()))
    }

    /// Product of the three vector lengths, the scale a volume is compared against.
    pub fn length_product(&self) -> f64 {
        self.a1().norm() * self.a2().norm() * self.a3().norm()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        let mut vectors = self.vectors;
        for row in vectors.iter_mut() {
            for x in row.iter_mut() {
                *x *= factor;
            }
        }
        Self { vectors }
    }
}
