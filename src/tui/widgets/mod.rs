//! TUI widgets for ctgrid.

mod footer;
mod grid_table;
mod header;

pub use footer::render_footer;
pub use grid_table::render_grid;
pub use header::render_header;
