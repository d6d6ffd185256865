//! Path enumeration and propagation for every node pair.

use crate::config::DEFAULT_SIGNAL_POWER;
use crate::network::signal_calculations::snr_db;
use crate::network::{Signal, Topology};

/// Result of propagating one signal along one path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathReport {
    pub path: Vec<String>,
    /// Total latency in seconds.
    pub latency: f64,
    /// Total noise power in watts.
    pub noise: f64,
    /// SNR in dB, `+inf` when no noise accumulated.
    pub snr_db: f64,
}

impl PathReport {
    /// Path rendered as `A->B->C`.
    pub fn path_label(&self) -> String {
        self.path.join("->")
    }
}

/// Which pairs to analyze and how.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Launch power of each signal, in watts.
    pub signal_power: f64,
    /// Worker threads. Values above 1 split source nodes across scoped
    /// threads; the output order does not change.
    pub workers: usize,
    /// Restrict sources to this node.
    pub source: Option<String>,
    /// Restrict destinations to this node.
    pub destination: Option<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            signal_power: DEFAULT_SIGNAL_POWER,
            workers: 1,
            source: None,
            destination: None,
        }
    }
}

/// Propagate a fresh signal along every simple path of every ordered pair of
/// distinct nodes.
///
/// Reports are ordered by source, then destination (both in node order), then
/// by path enumeration order.
pub fn analyze(topology: &Topology, options: &AnalysisOptions) -> Vec<PathReport> {
    let sources: Vec<&str> = topology
        .nodes()
        .keys()
        .map(String::as_str)
        .filter(|id| options.source.as_deref().is_none_or(|source| source == *id))
        .collect();

    let workers = options.workers.clamp(1, sources.len().max(1));
    let reports: Vec<PathReport> = if workers == 1 {
        sources.iter().flat_map(|source| analyze_source(topology, source, options)).collect()
    } else {
        let chunk_size = sources.len().div_ceil(workers);
        std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .flat_map(|source| analyze_source(topology, source, options))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(reports) => reports,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    };

    log::info!("Analyzed {} paths from {} source nodes using {} workers", reports.len(), sources.len(), workers);
    reports
}

fn analyze_source(topology: &Topology, source: &str, options: &AnalysisOptions) -> Vec<PathReport> {
    let mut reports = Vec::new();
    for destination in topology.nodes().keys() {
        if destination == source {
            continue;
        }
        if options.destination.as_deref().is_some_and(|wanted| wanted != destination) {
            continue;
        }
        for path in topology.find_all_simple_paths(source, destination) {
            let signal = topology.propagate(Signal::new(options.signal_power, path.clone()));
            log::debug!("Path {} reached latency {:.3e} s, noise {:.3e} W", path.join("->"), signal.latency, signal.noise);
            reports.push(PathReport {
                path,
                latency: signal.latency,
                noise: signal.noise,
                snr_db: snr_db(signal.power, signal.noise),
            });
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::topology_file::parse_description;
    use crate::network::signal_calculations::{FIBER_SPEED, NOISE_COEFFICIENT};

    fn mesh() -> Topology {
        let description = parse_description(
            r#"{
                "A": { "position": [0, 0], "connected_nodes": ["B", "C", "D"] },
                "B": { "position": [0, 3], "connected_nodes": ["A", "C"] },
                "C": { "position": [4, 3], "connected_nodes": ["A", "B", "D"] },
                "D": { "position": [4, 0], "connected_nodes": ["A", "C"] },
                "E": { "position": [9, 9], "connected_nodes": [] }
            }"#,
        )
        .unwrap();
        Topology::new(&description)
    }

    #[test]
    fn every_pair_and_path_is_reported() {
        let topology = mesh();
        let reports = analyze(&topology, &AnalysisOptions::default());

        let expected: usize = topology
            .nodes()
            .keys()
            .flat_map(|s| topology.nodes().keys().map(move |d| (s, d)))
            .filter(|(s, d)| s != d)
            .map(|(s, d)| topology.find_all_simple_paths(s, d).len())
            .sum();
        assert_eq!(reports.len(), expected);
        assert!(reports.iter().all(|r| r.path.len() >= 2 && r.path.first() != r.path.last()));
        assert!(reports.iter().all(|r| !r.path.contains(&"E".to_string())));
    }

    #[test]
    fn report_values_follow_the_link_model() {
        let topology = mesh();
        let options = AnalysisOptions {
            source: Some("A".to_string()),
            destination: Some("B".to_string()),
            ..AnalysisOptions::default()
        };
        let reports = analyze(&topology, &options);
        let direct = reports.iter().find(|r| r.path_label() == "A->B").unwrap();
        assert_eq!(direct.latency, 3.0 / FIBER_SPEED);
        assert_eq!(direct.noise, NOISE_COEFFICIENT * 0.001 * 3.0);
        assert!((direct.snr_db - 10.0 * (0.001 / direct.noise).log10()).abs() < 1e-9);
        assert!(reports.iter().all(|r| r.path.first().unwrap() == "A" && r.path.last().unwrap() == "B"));
    }

    #[test]
    fn parallel_analysis_matches_sequential() {
        let topology = mesh();
        let sequential = analyze(&topology, &AnalysisOptions::default());
        let parallel = analyze(
            &topology,
            &AnalysisOptions {
                workers: 3,
                ..AnalysisOptions::default()
            },
        );
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn unknown_source_filter_yields_nothing() {
        let topology = mesh();
        let options = AnalysisOptions {
            source: Some("Q".to_string()),
            workers: 4,
            ..AnalysisOptions::default()
        };
        assert!(analyze(&topology, &options).is_empty());
    }
}
