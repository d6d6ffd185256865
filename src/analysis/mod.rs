//! All-pairs path analysis over a built topology.
//!
//! Provides functionality for:
//! - Enumerating every simple path between every ordered node pair
//! - Propagating a fresh signal along each path
//! - Exporting the per-path latency, noise and SNR as CSV

pub mod export;
pub mod report;

pub use export::write_csv;
pub use report::{AnalysisOptions, PathReport, analyze};
