//! Runtime configuration of the dashboard.

use std::fmt;
use std::time::Duration;

use crate::grid::{Grid, SortError};
use crate::source::DemoSource;

/// Configuration errors detected before the terminal is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Initial sort field is not registered.
    Sort(SortError),
    /// An option has a value the dashboard cannot run with.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Sort(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Sort(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<SortError> for ConfigError {
    fn from(e: SortError) -> Self {
        ConfigError::Sort(e)
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Redraw tick when no input arrives.
    pub tick_rate: Duration,
    /// How often the metrics source is polled.
    pub refresh: Duration,
    /// Initial sort field.
    pub sort_field: String,
    /// Start with the sort order reversed.
    pub reverse: bool,
    /// Number of synthetic containers.
    pub demo_containers: usize,
    /// Polls between short-lived demo containers (0 = off).
    pub churn: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(1),
            refresh: Duration::from_secs(1),
            sort_field: "cpu".to_string(),
            reverse: false,
            demo_containers: 8,
            churn: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate.is_zero() {
            return Err(ConfigError::Invalid("tick rate must be positive".into()));
        }
        if self.refresh.is_zero() {
            return Err(ConfigError::Invalid("refresh interval must be positive".into()));
        }
        if self.demo_containers == 0 {
            return Err(ConfigError::Invalid(
                "at least one demo container is required".into(),
            ));
        }
        Ok(())
    }

    /// Builds the grid with the configured sort settings.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        let mut grid = Grid::with_sort_field(&self.sort_field)?;
        if self.reverse {
            grid.toggle_reverse();
        }
        Ok(grid)
    }

    pub fn build_source(&self) -> DemoSource {
        DemoSource::new(self.demo_containers, self.churn)
    }
}
