#![forbid(unsafe_code)]
#![deny(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # cnsd-core
//!
//! Complex-network structural descriptors (CNSD) for weighted graphs:
//! - dense directed/undirected adjacency matrices with ratcheted extrema
//! - band derivations (`cut`, `binarize`) and degree counting
//! - a multi-threshold pipeline summarising each binarized graph by its
//!   maximum and mean degree
//!
//! This crate is single-threaded and deterministic.

pub mod config;
/// Degree counting over binarized matrices.
pub mod degree;
pub mod errors;
pub mod matrix;
/// High-level pipelines.
pub mod pipeline;
/// Persistence of descriptor reports.
pub mod persistence;
pub mod types;

pub use config::CnsdConfig;
pub use degree::DegreeCounter;
pub use errors::{CnsdError, Result};
pub use matrix::{AdjacencyMatrix, BooleanMatrix, Weight, WeightedMatrix};
pub use pipeline::{cnsd, Descriptor, DescriptorPipeline};
pub use types::{ConnectionType, DegreeVector, NodeIndex};
