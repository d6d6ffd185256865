//! Input handling shared by the library and the command-line driver.

pub mod topology_file;

pub use topology_file::{NodeDescription, TopologyDescription, TopologyLoadError, load_topology};
