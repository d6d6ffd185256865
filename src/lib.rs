//! Signal propagation over a static optical network.
//!
//! A topology of nodes and directional fiber links is built from a JSON
//! description. Every simple path between two nodes can be enumerated, and a
//! signal injected at the head of a path accumulates latency and noise as it
//! hops Node → Link → Node until its route is consumed.
//!
//! ## Module Organization
//!
//! - `network`: topology model, path enumeration and propagation
//! - `common`: topology file loading and validation
//! - `analysis`: all-pairs path analysis and CSV export
//! - `config`: TOML configuration for the command-line driver

pub mod analysis;
pub mod common;
pub mod config;
pub mod network;

pub use network::{Link, LinkId, Node, Signal, Termination, Topology};
