//! Topology vertex and its routing rule.

use std::collections::BTreeMap;

use super::geometry::Point;
use super::link::LinkId;
use super::signal::Signal;
use super::topology::{Termination, Topology};

/// A node with a position and its declared neighbors.
///
/// `successive` maps each neighbor identifier to the outgoing link toward it.
/// It is filled by `Topology::connect` and read-only during propagation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub position: Point,
    /// Neighbors in declaration order; this order drives path enumeration.
    pub connected_nodes: Vec<String>,
    pub(crate) successive: BTreeMap<String, LinkId>,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Point, connected_nodes: Vec<String>) -> Self {
        Self {
            id: id.into(),
            position,
            connected_nodes,
            successive: BTreeMap::new(),
        }
    }

    /// Outgoing link toward `neighbor`, if connected.
    pub fn link_to(&self, neighbor: &str) -> Option<&LinkId> {
        self.successive.get(neighbor)
    }

    /// Consume this node from the route, then forward along the link toward
    /// the new route head.
    ///
    /// A node always removes itself before looking ahead. Reaching the end of
    /// the route, or a next hop with no outgoing link, ends the run.
    pub fn propagate(&self, topology: &Topology, signal: &mut Signal) -> Termination {
        if signal.remaining_route.is_empty() {
            return Termination::EmptyRoute;
        }
        signal.advance_route();

        let Some(next) = signal.next_hop() else {
            log::debug!("Node {} is the end of the route", self.id);
            return Termination::Completed;
        };

        match self.successive.get(next).and_then(|id| topology.link(id)) {
            Some(link) => {
                log::debug!("Node {} forwarding to link {}", self.id, link.id);
                link.propagate(topology, signal)
            }
            None => Termination::UnknownNextHop {
                at: self.id.clone(),
                next: next.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_node_consumes_itself_and_completes() {
        let topology = Topology::default();
        let node = Node::new("A", Point::new(0.0, 0.0), Vec::new());
        let mut signal = Signal::new(0.001, vec!["A".to_string()]);

        assert_eq!(node.propagate(&topology, &mut signal), Termination::Completed);
        assert!(signal.remaining_route.is_empty());
        assert_eq!(signal.latency, 0.0);
        assert_eq!(signal.noise, 0.0);
    }

    #[test]
    fn unknown_next_hop_stops_without_touching_accumulators() {
        let topology = Topology::default();
        let node = Node::new("A", Point::new(0.0, 0.0), vec!["B".to_string()]);
        let mut signal = Signal::new(0.001, vec!["A".to_string(), "Z".to_string()]);

        let outcome = node.propagate(&topology, &mut signal);

        assert_eq!(
            outcome,
            Termination::UnknownNextHop {
                at: "A".to_string(),
                next: "Z".to_string()
            }
        );
        assert_eq!(signal.remaining_route, vec!["Z".to_string()]);
        assert_eq!(signal.noise, 0.0);
    }

    #[test]
    fn empty_route_is_reported() {
        let topology = Topology::default();
        let node = Node::new("A", Point::new(0.0, 0.0), Vec::new());
        let mut signal = Signal::new(0.001, Vec::new());
        assert_eq!(node.propagate(&topology, &mut signal), Termination::EmptyRoute);
    }
}
