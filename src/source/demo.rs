//! Synthetic container source.
//!
//! Produces a fixed set of containers with oscillating CPU and memory usage
//! and growing network counters. With churn enabled a short-lived container
//! appears every `churn` polls and is reported gone a few polls later.

use xxhash_rust::xxh3::xxh3_64;

use super::{MetricsSource, Observation};
use crate::grid::Metrics;

const NAMES: &[&str] = &[
    "nginx",
    "redis",
    "postgres",
    "api",
    "worker",
    "grafana",
    "prometheus",
    "rabbitmq",
    "memcached",
    "traefik",
    "minio",
    "elasticsearch",
];

const MIB: u64 = 1024 * 1024;

/// Short container id derived from the name (12 hex digits).
pub fn container_id(name: &str) -> String {
    let hex = format!("{:016x}", xxh3_64(name.as_bytes()));
    hex[..12].to_string()
}

#[derive(Debug, Clone)]
struct DemoContainer {
    id: String,
    name: String,
    seed: u64,
    net_rx: u64,
    net_tx: u64,
}

impl DemoContainer {
    fn new(name: String) -> Self {
        Self {
            id: container_id(&name),
            seed: xxh3_64(name.as_bytes()),
            name,
            net_rx: 0,
            net_tx: 0,
        }
    }

    fn sample(&mut self, tick: u64) -> Metrics {
        let t = tick as f64;
        let phase = (self.seed % 628) as f64 / 100.0;
        let cpu_base = 2.0 + (self.seed % 60) as f64;
        let mem_limit = (256 * MIB) << (self.seed % 3);

        self.net_rx = self.net_rx.saturating_add(1024 * (1 + self.seed % 50));
        self.net_tx = self.net_tx.saturating_add(512 * (1 + (self.seed >> 8) % 20));

        Metrics {
            cpu_percent: cpu_base * (1.0 + 0.6 * (t * 0.3 + phase).sin()),
            mem_usage: (mem_limit as f64 * (0.45 + 0.25 * (t * 0.1 + phase).sin())) as u64,
            mem_limit,
            net_rx: self.net_rx,
            net_tx: self.net_tx,
        }
    }

    fn observe(&mut self, tick: u64) -> Observation {
        Observation::Seen {
            id: self.id.clone(),
            name: self.name.clone(),
            metrics: self.sample(tick),
        }
    }
}

/// Deterministic stand-in for a container runtime.
#[derive(Debug)]
pub struct DemoSource {
    containers: Vec<DemoContainer>,
    churn: u64,
    polls: u64,
    spawned: u64,
    ephemeral: Option<(DemoContainer, u64)>,
}

impl DemoSource {
    /// Creates `count` containers; `churn == 0` disables short-lived ones.
    pub fn new(count: usize, churn: u64) -> Self {
        let containers = (0..count)
            .map(|i| {
                let base = NAMES[i % NAMES.len()];
                let name = match i / NAMES.len() {
                    0 => base.to_string(),
                    n => format!("{}-{}", base, n + 1),
                };
                DemoContainer::new(name)
            })
            .collect();
        Self {
            containers,
            churn,
            polls: 0,
            spawned: 0,
            ephemeral: None,
        }
    }

    pub fn len(&self) -> usize {
        self.containers.len() + usize::from(self.ephemeral.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MetricsSource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn poll(&mut self) -> Vec<Observation> {
        self.polls += 1;
        let tick = self.polls;
        let mut out = Vec::with_capacity(self.containers.len() + 1);

        if let Some((container, expires)) = self.ephemeral.take() {
            if tick >= expires {
                out.push(Observation::Gone { id: container.id });
            } else {
                self.ephemeral = Some((container, expires));
            }
        }
        if self.churn > 0 && tick % self.churn == 0 && self.ephemeral.is_none() {
            self.spawned += 1;
            let container = DemoContainer::new(format!("job-{}", self.spawned));
            self.ephemeral = Some((container, tick + self.churn / 2 + 1));
        }

        for container in &mut self.containers {
            out.push(container.observe(tick));
        }
        if let Some((container, _)) = self.ephemeral.as_mut() {
            out.push(container.observe(tick));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seen_metrics(obs: &[Observation], id: &str) -> Option<Metrics> {
        obs.iter().find_map(|o| match o {
            Observation::Seen { id: oid, metrics, .. } if oid == id => Some(*metrics),
            _ => None,
        })
    }

    #[test]
    fn container_id_is_stable_short_hex() {
        let id = container_id("nginx");
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, container_id("nginx"));
        assert_ne!(id, container_id("redis"));
    }

    #[test]
    fn names_and_ids_are_unique_beyond_name_list() {
        let mut source = DemoSource::new(NAMES.len() * 2 + 1, 0);
        let obs = source.poll();
        let ids: HashSet<&str> = obs
            .iter()
            .map(|o| match o {
                Observation::Seen { id, .. } | Observation::Gone { id } => id.as_str(),
            })
            .collect();
        assert_eq!(ids.len(), NAMES.len() * 2 + 1);
        assert!(obs.iter().any(|o| matches!(
            o,
            Observation::Seen { name, .. } if name == "nginx-2"
        )));
    }

    #[test]
    fn metrics_stay_in_range_and_counters_grow() {
        let mut source = DemoSource::new(4, 0);
        let id = container_id("redis");
        let mut last_rx = 0;
        for _ in 0..50 {
            let obs = source.poll();
            assert_eq!(obs.len(), 4);
            let m = seen_metrics(&obs, &id).unwrap();
            assert!(m.cpu_percent.is_finite() && m.cpu_percent >= 0.0);
            assert!(m.mem_usage <= m.mem_limit);
            assert!(m.net_rx > last_rx);
            last_rx = m.net_rx;
        }
    }

    #[test]
    fn churn_spawns_and_retires_containers() {
        let mut source = DemoSource::new(2, 4);
        let job = container_id("job-1");

        for _ in 0..3 {
            assert!(seen_metrics(&source.poll(), &job).is_none());
        }
        // 4th poll spawns job-1, expiring at poll 7
        assert!(seen_metrics(&source.poll(), &job).is_some());
        assert_eq!(source.len(), 3);
        assert!(seen_metrics(&source.poll(), &job).is_some());
        assert!(seen_metrics(&source.poll(), &job).is_some());

        let obs = source.poll();
        assert!(obs.contains(&Observation::Gone { id: job.clone() }));
        assert!(seen_metrics(&obs, &job).is_none());
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn empty_source_reports_nothing() {
        let mut source = DemoSource::new(0, 0);
        assert!(source.is_empty());
        assert!(source.poll().is_empty());
        assert_eq!(source.name(), "demo");
    }
}
