//! Pressure time-series plot.

use crate::models::{AveragingWindow, PressureMode};
use crate::storage::model::ResourcePressure;

/// Number of trailing samples plotted.
pub const GRAPH_WINDOW: usize = 70;

/// Which pressure line a plotted series comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// TUI: green.
    Some,
    /// TUI: yellow.
    Full,
}

impl LineKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Some => "some",
            LineKind::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub kind: LineKind,
    pub data: Vec<f64>,
}

/// Complete plot ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: &'static str,
    pub window: AveragingWindow,
    pub lines: Vec<PlotLine>,
    /// Upper bound of the y axis.
    pub max_val: f64,
}

impl PlotSpec {
    /// Number of points on the x axis.
    pub fn len(&self) -> usize {
        self.lines.iter().map(|l| l.data.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the plot of the trailing [`GRAPH_WINDOW`] samples of `series`.
///
/// Older samples are dropped from the plot only, not from the history.
pub fn render_graph(
    series: &[ResourcePressure],
    mode: PressureMode,
    window: AveragingWindow,
) -> PlotSpec {
    let tail = &series[series.len().saturating_sub(GRAPH_WINDOW)..];

    let mut lines = Vec::with_capacity(2);
    if mode.includes_some() {
        lines.push(PlotLine {
            kind: LineKind::Some,
            data: tail.iter().map(|p| window.value(&p.some)).collect(),
        });
    }
    if mode.includes_full() {
        lines.push(PlotLine {
            kind: LineKind::Full,
            data: tail.iter().map(|p| window.value(&p.full)).collect(),
        });
    }

    let max_val = graph_max_val(lines.iter().flat_map(|l| l.data.iter().copied()));

    PlotSpec {
        title: "Pressure",
        window,
        lines,
        max_val,
    }
}

/// Rounds the largest plotted value up to a power of two, never below 1.
///
/// A power-of-two ceiling keeps the axis steady while the rolling maximum
/// moves around. An empty or all-zero series yields 1.0 directly instead of
/// going through `log2(0)`. Non-finite values are ignored.
pub fn graph_max_val(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return 1.0;
    }

    let scaled = 2.0_f64.powf(max.log2().ceil());
    if scaled < 1.0 { 1.0 } else { scaled }
}
