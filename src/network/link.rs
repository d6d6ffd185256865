//! Directional fiber span between two nodes.

use std::fmt;

use super::signal::Signal;
use super::signal_calculations::{generated_noise, propagation_latency};
use super::topology::{Termination, Topology};

/// Identifier of a directed link: the ordered pair of its endpoints.
///
/// Displays as the concatenation `from + to`, so the link from `A` to `B` is
/// `AB` and its reverse is `BA`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId {
    pub from: String,
    pub to: String,
}

impl LinkId {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Identifier of the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A directional link with a fixed length.
///
/// `successor` is the destination node identifier, wired by
/// `Topology::connect`. Until then the link forwards nowhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub length: f64,
    pub(crate) successor: Option<String>,
}

impl Link {
    pub fn new(id: LinkId, length: f64) -> Self {
        Self {
            id,
            length,
            successor: None,
        }
    }

    pub fn propagation_latency(&self) -> f64 {
        propagation_latency(self.length)
    }

    pub fn generated_noise(&self, input_power: f64) -> f64 {
        generated_noise(input_power, self.length)
    }

    /// Destination node, once connected.
    pub fn successor(&self) -> Option<&str> {
        self.successor.as_deref()
    }

    /// Add this span's latency and noise, then hand the signal to the
    /// destination node if it is the next hop on the route.
    ///
    /// Latency is accumulated before noise, and both before forwarding.
    pub fn propagate(&self, topology: &Topology, signal: &mut Signal) -> Termination {
        signal.update_latency(self.propagation_latency());
        signal.update_noise(self.generated_noise(signal.power));
        log::debug!(
            "Link {} crossed: latency {:.3e} s, noise {:.3e} W",
            self.id,
            signal.latency,
            signal.noise
        );

        let Some(next) = signal.next_hop() else {
            return Termination::Completed;
        };

        let node = self
            .successor
            .as_deref()
            .filter(|successor| *successor == next)
            .and_then(|successor| topology.node(successor));
        match node {
            Some(node) => node.propagate(topology, signal),
            None => Termination::UnknownNextHop {
                at: self.id.to_string(),
                next: next.to_string(),
            },
        }
    }
}
