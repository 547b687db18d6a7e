//! Core business logic modules.

pub mod classifier;
pub mod enrichment;
pub mod extractor;
pub mod identifier;
pub mod normalizer;
pub mod patterns;
pub mod planner;
pub mod scanner;
