//! Dense adjacency matrices: storage, band derivations and the text format.

pub mod adjacency;
pub mod threshold;
/// Text format reader/writer and row printer.
pub mod text;
pub mod weight;

pub use adjacency::{AdjacencyMatrix, BooleanMatrix, WeightedMatrix, FOOTPRINT_WARNING_BYTES};
pub use weight::{Cell, Weight};
