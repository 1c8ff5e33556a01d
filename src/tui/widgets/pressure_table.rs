//! Pressure table widget.
//! Thin TUI wrapper over [`crate::view::render_table`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::tui::style::Styles;
use crate::view::TableSpec;

const LABEL_WIDTH: u16 = 6;
const VALUE_WIDTH: u16 = 10;

pub fn render_pressure_table(frame: &mut Frame, area: Rect, spec: &TableSpec) {
    let header = Row::new(
        spec.headers
            .iter()
            .map(|h| Cell::from(Span::styled(*h, Styles::table_header()))),
    )
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = spec
        .rows
        .iter()
        .map(|row| {
            let label = Cell::from(Span::styled(row.label, Styles::dim()));
            let values = row.cells.iter().map(|c| {
                Cell::from(Span::styled(
                    c.text.clone(),
                    Styles::value(c.level, c.emphasized),
                ))
            });
            Row::new(std::iter::once(label).chain(values)).height(1)
        })
        .collect();

    let constraints = [
        Constraint::Length(LABEL_WIDTH),
        Constraint::Length(VALUE_WIDTH),
        Constraint::Length(VALUE_WIDTH),
        Constraint::Length(VALUE_WIDTH),
    ];

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(Span::styled(
                    spec.title,
                    Styles::resource_title(spec.resource),
                ))
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}
