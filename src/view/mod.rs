//! UI-agnostic view models.
//!
//! [`frame::compose_frame`] turns the view state and the history tail into a
//! [`frame::FrameSpec`]: selectors, tables and the graph with their positions,
//! formatted values and color classes. The TUI maps the frame to ratatui
//! widgets for rendering.

pub mod common;
pub mod frame;
pub mod graph;
pub mod table;

pub use common::{Area, CpuThresholds, PressureLevel, ViewCell};
pub use frame::{FrameSpec, Pane, PaneContent, SelectorSpec, StatusSpec, compose_frame};
pub use graph::{GRAPH_WINDOW, LineKind, PlotLine, PlotSpec, graph_max_val, render_graph};
pub use table::{TableRow, TableSpec, render_table};
