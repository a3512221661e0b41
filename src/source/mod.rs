//! Metrics source abstraction.
//!
//! Acquiring container metrics is not the grid's concern. A source reports
//! what it saw on each poll; the application applies those observations to
//! the grid on its own thread.

mod demo;

pub use demo::{DemoSource, container_id};

use crate::grid::Metrics;

/// One observation reported by a metrics source.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Entity is present with this name and metrics snapshot.
    Seen {
        id: String,
        name: String,
        metrics: Metrics,
    },
    /// Entity disappeared and should be evicted.
    Gone { id: String },
}

/// Producer of entity observations.
///
/// `poll` runs on a dedicated thread, never on the input loop.
pub trait MetricsSource: Send {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Returns the observations since the previous poll.
    fn poll(&mut self) -> Vec<Observation>;
}
