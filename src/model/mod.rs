//src/model/mod.rs
pub mod lattice;
pub mod miller;
pub mod modes;
pub mod tensor;

// Re-exports for cleaner imports
pub use lattice::Lattice;
pub use miller::MillerIndex;
pub use modes::{ModeCatalog, NormalMode};
pub use tensor::{BandIndex, RamanTensor, TensorCatalog};
