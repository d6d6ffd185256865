//! Topology container: construction, wiring, path enumeration and
//! propagation.
//!
//! ## Construction
//!
//! Every declared node becomes a `Node`. For each declared adjacency whose
//! neighbor exists, a forward link sized by the Euclidean distance is created
//! once per ordered pair, together with the reverse link of the same length.
//! `connect` then wires node and link lookups from the link identifiers.
//!
//! ## Propagation
//!
//! A signal is injected at the node named by the head of its route and is
//! handed Node → Link → Node by direct calls until a routing decision finds
//! no successor. Every step shrinks the route, so a run always terminates.

use std::collections::BTreeMap;

use crate::common::topology_file::TopologyDescription;

use super::geometry::{Point, distance};
use super::link::{Link, LinkId};
use super::node::Node;
use super::signal::Signal;

/// How a propagation run ended.
///
/// Only `Completed` is expected for a well-formed path. The other variants
/// are reported for observability; they never alter accumulators already
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The route was fully consumed.
    Completed,
    /// The signal carried no route.
    EmptyRoute,
    /// The route head is not a node of this topology.
    UnknownSource(String),
    /// No link leads from `at` (a node or link identifier) toward `next`.
    UnknownNextHop { at: String, next: String },
}

/// Owner of all nodes and links.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: BTreeMap<String, Node>,
    links: BTreeMap<LinkId, Link>,
}

impl Topology {
    /// Build and connect a topology from its declarative description.
    ///
    /// Neighbor references to unknown nodes and self references are skipped
    /// with a warning.
    pub fn new(description: &TopologyDescription) -> Self {
        let mut nodes = BTreeMap::new();
        for (id, node_description) in description {
            let mut connected_nodes: Vec<String> = Vec::new();
            for neighbor in &node_description.connected_nodes {
                if neighbor == id {
                    log::warn!("Node {} lists itself as a neighbor, ignoring", id);
                } else if !description.contains_key(neighbor) {
                    log::warn!("Node {} references unknown neighbor {}, ignoring", id, neighbor);
                } else if !connected_nodes.contains(neighbor) {
                    connected_nodes.push(neighbor.clone());
                }
            }
            let position = Point::from(node_description.position);
            nodes.insert(id.clone(), Node::new(id.clone(), position, connected_nodes));
        }

        let mut links = BTreeMap::new();
        for node in nodes.values() {
            for neighbor_id in &node.connected_nodes {
                let forward = LinkId::new(node.id.clone(), neighbor_id.clone());
                if links.contains_key(&forward) {
                    continue;
                }
                let Some(neighbor) = nodes.get(neighbor_id) else {
                    continue;
                };
                let length = distance(&node.position, &neighbor.position);
                let reverse = forward.reversed();
                links.insert(reverse.clone(), Link::new(reverse, length));
                links.insert(forward.clone(), Link::new(forward, length));
            }
        }

        let mut topology = Self { nodes, links };
        topology.connect();
        log::info!(
            "Topology built: {} nodes, {} links",
            topology.node_count(),
            topology.link_count()
        );
        topology
    }

    /// Wire node adjacency and link successors from the link identifiers.
    ///
    /// Entries are assigned, never appended, so repeated calls leave the
    /// mappings unchanged.
    pub fn connect(&mut self) {
        for (id, link) in self.links.iter_mut() {
            if let Some(node) = self.nodes.get_mut(&id.from) {
                node.successive.insert(id.to.clone(), id.clone());
            }
            link.successor = self.nodes.contains_key(&id.to).then(|| id.to.clone());
        }
    }

    pub fn nodes(&self) -> &BTreeMap<String, Node> {
        &self.nodes
    }

    pub fn links(&self) -> &BTreeMap<LinkId, Link> {
        &self.links
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Every path from `start` to `end` that visits no node twice.
    ///
    /// Exhaustive depth-first search in neighbor declaration order. The cost
    /// is exponential on densely meshed topologies. `start == end` yields the
    /// single path `[start]`; an unknown `start` yields nothing.
    pub fn find_all_simple_paths(&self, start: &str, end: &str) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        if start != end && !self.nodes.contains_key(start) {
            return paths;
        }
        let mut path = vec![start.to_string()];
        self.collect_paths(start, end, &mut path, &mut paths);
        paths
    }

    fn collect_paths(&self, current: &str, end: &str, path: &mut Vec<String>, paths: &mut Vec<Vec<String>>) {
        if current == end {
            paths.push(path.clone());
            return;
        }
        let Some(node) = self.nodes.get(current) else {
            return;
        };
        for neighbor in &node.connected_nodes {
            if path.contains(neighbor) {
                continue;
            }
            path.push(neighbor.clone());
            self.collect_paths(neighbor, end, path, paths);
            path.pop();
        }
    }

    /// Propagate `signal` along its route and return it.
    ///
    /// A route whose head is not part of this topology comes back unmodified.
    pub fn propagate(&self, signal: Signal) -> Signal {
        self.propagate_traced(signal).0
    }

    /// Like `propagate`, also reporting how the run ended.
    pub fn propagate_traced(&self, mut signal: Signal) -> (Signal, Termination) {
        let Some(head) = signal.next_hop() else {
            return (signal, Termination::EmptyRoute);
        };
        let termination = match self.nodes.get(head) {
            Some(node) => node.propagate(self, &mut signal),
            None => Termination::UnknownSource(head.to_string()),
        };
        if termination != Termination::Completed {
            log::warn!("Propagation ended early: {:?}", termination);
        }
        (signal, termination)
    }
}
