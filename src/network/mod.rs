//! Network model and propagation core.
//!
//! The `Topology` owns every node and link. Nodes and links only know each
//! other by identifier, and all cross references are resolved back through
//! the topology during traversal. Traversal takes `&self` everywhere, so a
//! built topology can be shared between threads while each run owns its
//! `Signal`.
//!
//! ## Module Organization
//!
//! - `signal`: the signal record threaded through a propagation run
//! - `signal_calculations`: fiber constants, noise model and SNR helpers
//! - `geometry`: planar distance between node positions
//! - `link`: directional fiber span
//! - `node`: topology vertex and its routing rule
//! - `topology`: construction, `connect`, path enumeration, propagation

pub mod geometry;
pub mod link;
pub mod node;
pub mod signal;
pub mod signal_calculations;
pub mod topology;

pub use link::{Link, LinkId};
pub use node::Node;
pub use signal::Signal;
pub use topology::{Termination, Topology};
