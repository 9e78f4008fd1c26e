// src/physics/mod.rs
pub mod group_theory;
pub mod miller_math;
pub mod polarisation;
pub mod rotation;
