//! Error types for the gearbox protocol layer.

mod registry;

pub use registry::*;
