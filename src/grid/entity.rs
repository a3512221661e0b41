//! Monitored entity record and its resource snapshot.

/// Latest known resource usage of one entity.
///
/// The collector always hands over a whole snapshot; the store replaces the
/// previous one in a single assignment, so readers never observe a mix of
/// two updates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    /// CPU usage in percent (may exceed 100 on multi-core hosts).
    pub cpu_percent: f64,
    /// Resident memory in bytes.
    pub mem_usage: u64,
    /// Memory limit in bytes (0 = unknown / unlimited).
    pub mem_limit: u64,
    /// Cumulative bytes received.
    pub net_rx: u64,
    /// Cumulative bytes transmitted.
    pub net_tx: u64,
}

impl Metrics {
    /// Returns a copy safe to display: non-finite or negative CPU becomes 0.
    pub fn sanitized(self) -> Self {
        let cpu_percent = if self.cpu_percent.is_finite() && self.cpu_percent > 0.0 {
            self.cpu_percent
        } else {
            0.0
        };
        Self {
            cpu_percent,
            ..self
        }
    }

    /// Memory usage relative to the limit, in `[0, 100]`.
    pub fn mem_percent(&self) -> f64 {
        if self.mem_limit == 0 {
            return 0.0;
        }
        let pct = self.mem_usage as f64 / self.mem_limit as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    /// Total network traffic (rx + tx).
    pub fn net_total(&self) -> u64 {
        self.net_rx.saturating_add(self.net_tx)
    }
}

/// One monitored unit (a container).
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: String,
    display_name: String,
    metrics: Metrics,
}

impl Entity {
    /// Creates an entity with zeroed metrics.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            metrics: Metrics::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(crate) fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    pub(crate) fn replace_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics.sanitized();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_has_default_metrics() {
        let e = Entity::new("abc", "web");
        assert_eq!(e.id(), "abc");
        assert_eq!(e.display_name(), "web");
        assert_eq!(*e.metrics(), Metrics::default());
    }

    #[test]
    fn sanitized_drops_invalid_cpu() {
        let nan = Metrics {
            cpu_percent: f64::NAN,
            mem_usage: 7,
            ..Metrics::default()
        };
        assert_eq!(nan.sanitized().cpu_percent, 0.0);
        assert_eq!(nan.sanitized().mem_usage, 7);

        let negative = Metrics {
            cpu_percent: -3.0,
            ..Metrics::default()
        };
        assert_eq!(negative.sanitized().cpu_percent, 0.0);

        let inf = Metrics {
            cpu_percent: f64::INFINITY,
            ..Metrics::default()
        };
        assert_eq!(inf.sanitized().cpu_percent, 0.0);

        let ok = Metrics {
            cpu_percent: 150.5,
            ..Metrics::default()
        };
        assert_eq!(ok.sanitized().cpu_percent, 150.5);
    }

    #[test]
    fn mem_percent_handles_missing_limit_and_overshoot() {
        let no_limit = Metrics {
            mem_usage: 1024,
            ..Metrics::default()
        };
        assert_eq!(no_limit.mem_percent(), 0.0);

        let half = Metrics {
            mem_usage: 512,
            mem_limit: 1024,
            ..Metrics::default()
        };
        assert_eq!(half.mem_percent(), 50.0);

        let over = Metrics {
            mem_usage: 4096,
            mem_limit: 1024,
            ..Metrics::default()
        };
        assert_eq!(over.mem_percent(), 100.0);
    }

    #[test]
    fn net_total_saturates() {
        let m = Metrics {
            net_rx: u64::MAX,
            net_tx: 10,
            ..Metrics::default()
        };
        assert_eq!(m.net_total(), u64::MAX);
    }
}
