//! Pressure graph widget.
//! Thin TUI wrapper over [`crate::view::render_graph`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

use crate::tui::style::Styles;
use crate::view::{GRAPH_WINDOW, PlotSpec};

pub fn render_graph(frame: &mut Frame, area: Rect, spec: &PlotSpec) {
    let points: Vec<Vec<(f64, f64)>> = spec
        .lines
        .iter()
        .map(|line| {
            line.data
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .lines
        .iter()
        .zip(points.iter())
        .map(|(line, data)| {
            Dataset::default()
                .name(line.kind.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Styles::line(line.kind))
                .data(data)
        })
        .collect();

    let x_max = (GRAPH_WINDOW.saturating_sub(1)).max(1) as f64;
    let title = format!("{} (avg{})", spec.title, spec.window.seconds());

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .x_axis(Axis::default().style(Styles::dim()).bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .style(Styles::dim())
                .bounds([0.0, spec.max_val])
                .labels([
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", spec.max_val / 2.0)),
                    Span::raw(format!("{:.0}", spec.max_val)),
                ]),
        );

    frame.render_widget(chart, area);
}
