//! ctgrid - terminal dashboard of containers and their resource usage.
//!
//! - `grid`: entity store, sort strategies, cursor and selection
//! - `source`: metrics source abstraction and a synthetic demo source
//! - `config`: runtime configuration and validation
//! - `fmt`: formatting helpers for table cells
//! - `tui`: terminal driver (ratatui/crossterm), input, widgets

pub mod config;
pub mod fmt;
pub mod grid;
pub mod source;
pub mod tui;
