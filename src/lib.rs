//! # Plane Sampler Core
//!
//! Core routines for the plane sampler tool: typed point tables, the
//! three-point plane fit, regular grid sampling, and delimited/chart
//! output. The binary in `main.rs` wires these into a single pipeline:
//! load table → fit plane per height column → sample grid → write files.

pub mod data;
pub mod grid;
pub mod output;
pub mod plane;
pub mod plot;
pub mod text;
