//! Signal record carried along a path.

/// A signal travelling along a route.
///
/// Accumulators only ever grow during propagation; the caller reads the final
/// `power`, `noise` and `latency` once the run returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Launch power in watts.
    pub power: f64,
    /// Accumulated noise power in watts.
    pub noise: f64,
    /// Accumulated latency in seconds.
    pub latency: f64,
    /// Node identifiers still to be visited. The head is whoever handles the
    /// signal next.
    pub remaining_route: Vec<String>,
}

impl Signal {
    pub fn new(power: f64, route: Vec<String>) -> Self {
        Self {
            power,
            noise: 0.0,
            latency: 0.0,
            remaining_route: route,
        }
    }

    pub fn update_power(&mut self, delta: f64) {
        self.power += delta;
    }

    pub fn update_noise(&mut self, delta: f64) {
        self.noise += delta;
    }

    pub fn update_latency(&mut self, delta: f64) {
        self.latency += delta;
    }

    /// Drop the current hop from the route. No-op on an empty route.
    pub fn advance_route(&mut self) {
        if !self.remaining_route.is_empty() {
            self.remaining_route.remove(0);
        }
    }

    /// Identifier of whoever handles the signal next.
    pub fn next_hop(&self) -> Option<&str> {
        self.remaining_route.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_signal_starts_clean() {
        let s = Signal::new(0.001, route(&["A", "B"]));
        assert_eq!(s.power, 0.001);
        assert_eq!(s.noise, 0.0);
        assert_eq!(s.latency, 0.0);
        assert_eq!(s.next_hop(), Some("A"));
    }

    #[test]
    fn updates_accumulate() {
        let mut s = Signal::new(1.0, Vec::new());
        s.update_noise(0.5);
        s.update_noise(0.25);
        s.update_latency(2.0);
        s.update_power(-0.5);
        assert_eq!(s.noise, 0.75);
        assert_eq!(s.latency, 2.0);
        assert_eq!(s.power, 0.5);
    }

    #[test]
    fn advance_route_consumes_head_and_tolerates_empty() {
        let mut s = Signal::new(1.0, route(&["A", "B"]));
        s.advance_route();
        assert_eq!(s.remaining_route, route(&["B"]));
        s.advance_route();
        assert!(s.remaining_route.is_empty());
        s.advance_route();
        assert!(s.remaining_route.is_empty());
        assert_eq!(s.next_hop(), None);
    }
}
