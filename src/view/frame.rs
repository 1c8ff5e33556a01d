//! Full-screen layout: selectors, tables and the graph.
//!
//! Coordinates are fixed and absolute. The renderer clips them to the
//! terminal, so a small terminal cuts panes off instead of reflowing them.

use crate::models::{AveragingWindow, PressureMode, ResourceFocus};
use crate::storage::model::{AllPressures, Resource, resource_series};
use crate::tui::state::ViewState;

use super::common::{Area, CpuThresholds};
use super::graph::{PlotSpec, render_graph};
use super::table::{TableSpec, render_table};

/// Resource selector position.
pub const RESOURCE_SELECTOR_AREA: Area = Area::new(1, 1, 35, 3);
/// Some/full selector position.
pub const MODE_SELECTOR_AREA: Area = Area::new(37, 1, 28, 3);
/// Averaging window selector position.
pub const WINDOW_SELECTOR_AREA: Area = Area::new(67, 1, 31, 3);

const PANE_X: u16 = 4;
const PANE_TOP: u16 = 5;
const PANE_WIDTH: u16 = 90;
const PANE_GAP: u16 = 1;
/// Table height with one row (borders and header included).
const TABLE_HEIGHT_ONE_ROW: u16 = 5;
/// Table height with both rows.
const TABLE_HEIGHT_TWO_ROWS: u16 = 7;
const GRAPH_HEIGHT: u16 = 32;

/// One tabbed selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorSpec {
    pub title: &'static str,
    pub tabs: Vec<&'static str>,
    pub active: usize,
    pub area: Area,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaneContent {
    Table(TableSpec),
    Graph(PlotSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub area: Area,
    pub content: PaneContent,
}

/// Summary shown on the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSpec {
    /// Unix timestamp of the newest sample.
    pub latest_timestamp: Option<i64>,
    pub samples: usize,
    pub capacity: usize,
    pub logical_cpus: usize,
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub status: StatusSpec,
    /// Resource, mode and window selectors, left to right.
    pub selectors: [SelectorSpec; 3],
    /// Empty until the first sample arrives.
    pub panes: Vec<Pane>,
}

/// Lays out one frame from the view state and the history tail.
///
/// `capacity` is the history bound, shown next to the sample count.
pub fn compose_frame(
    view: &ViewState,
    history: &[AllPressures],
    thresholds: CpuThresholds,
    capacity: usize,
) -> FrameSpec {
    let status = StatusSpec {
        latest_timestamp: history.last().map(|s| s.timestamp),
        samples: history.len(),
        capacity,
        logical_cpus: thresholds.logical_cpus(),
    };

    let panes = if history.is_empty() {
        Vec::new()
    } else {
        match view.focus().resource() {
            Some(resource) => single_resource_panes(resource, view, history, thresholds),
            None => overview_panes(view.mode(), history, thresholds),
        }
    };

    FrameSpec {
        status,
        selectors: selectors(view),
        panes,
    }
}

fn selectors(view: &ViewState) -> [SelectorSpec; 3] {
    let mode_tabs = if view.focus() == ResourceFocus::Cpu {
        vec![PressureMode::Some.label()]
    } else {
        PressureMode::all().iter().map(|m| m.label()).collect()
    };
    // Only "[s]ome" is shown with CPU in focus, and the mode is always Some.
    let mode_active = if view.focus() == ResourceFocus::Cpu {
        0
    } else {
        view.mode().tab_index()
    };

    [
        SelectorSpec {
            title: "Resource",
            tabs: ResourceFocus::all().iter().map(|f| f.label()).collect(),
            active: view.focus().tab_index(),
            area: RESOURCE_SELECTOR_AREA,
        },
        SelectorSpec {
            title: "Some/full",
            tabs: mode_tabs,
            active: mode_active,
            area: MODE_SELECTOR_AREA,
        },
        SelectorSpec {
            title: "Graph metric",
            tabs: AveragingWindow::all().iter().map(|w| w.label()).collect(),
            active: view.window().tab_index(),
            area: WINDOW_SELECTOR_AREA,
        },
    ]
}

fn table_height(resource: Resource, mode: PressureMode) -> u16 {
    if resource.has_full() && mode == PressureMode::Both {
        TABLE_HEIGHT_TWO_ROWS
    } else {
        TABLE_HEIGHT_ONE_ROW
    }
}

/// Stacked tables for every resource. CPU always shows only its "some" row.
fn overview_panes(
    mode: PressureMode,
    history: &[AllPressures],
    thresholds: CpuThresholds,
) -> Vec<Pane> {
    let mut panes = Vec::with_capacity(Resource::all().len());
    let mut y = PANE_TOP;

    for &resource in Resource::all() {
        let mode = if resource.has_full() {
            mode
        } else {
            PressureMode::Some
        };
        let series = resource_series(history, resource);
        let Some(table) = render_table(resource, &series, mode, thresholds) else {
            continue;
        };

        let area = Area::new(PANE_X, y, PANE_WIDTH, table_height(resource, mode));
        y = area.bottom() + PANE_GAP;
        panes.push(Pane {
            area,
            content: PaneContent::Table(table),
        });
    }

    panes
}

/// One table above the graph for a single resource.
fn single_resource_panes(
    resource: Resource,
    view: &ViewState,
    history: &[AllPressures],
    thresholds: CpuThresholds,
) -> Vec<Pane> {
    let series = resource_series(history, resource);
    let mut panes = Vec::with_capacity(2);

    let table_area = Area::new(
        PANE_X,
        PANE_TOP,
        PANE_WIDTH,
        table_height(resource, view.mode()),
    );
    if let Some(table) = render_table(resource, &series, view.mode(), thresholds) {
        panes.push(Pane {
            area: table_area,
            content: PaneContent::Table(table),
        });
    }

    panes.push(Pane {
        area: Area::new(
            PANE_X,
            table_area.bottom() + PANE_GAP,
            PANE_WIDTH,
            GRAPH_HEIGHT,
        ),
        content: PaneContent::Graph(render_graph(&series, view.mode(), view.window())),
    });

    panes
}
