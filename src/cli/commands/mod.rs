//! CLI command implementations.

pub mod identify;
pub mod plan;
