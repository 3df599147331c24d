//! BDE Test Harness - generators and helpers for solver testing
//!
//! This crate provides:
//! - Deterministic series generators (square waves, seeded random series)
//! - Random numeric sample generation for threshold testing
//!
//! Scenario and property tests live in this crate's `tests/` directory;
//! criterion benchmarks under `benches/`.

pub mod generate;

pub use generate::*;
