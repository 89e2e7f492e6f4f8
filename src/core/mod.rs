//! Core conversion logic: half-width normalization and the file pipeline.

pub mod normalizer;
pub mod pipeline;
