//! High-level pipelines: multi-threshold descriptors.

pub mod descriptor;

pub use descriptor::{cnsd, Descriptor, DescriptorPipeline};
