//! TUI widgets for psitop.

mod graph;
mod pressure_table;
mod selectors;
mod status;

pub use graph::render_graph;
pub use pressure_table::render_pressure_table;
pub use selectors::render_selector;
pub use status::render_status;
