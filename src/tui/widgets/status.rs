//! Status line on the top row.

use chrono::{DateTime, Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::StatusSpec;

pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusSpec) {
    let time_str = status
        .latest_timestamp
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----".to_string());

    let line = Line::from(vec![
        Span::styled(" psitop ", Styles::status()),
        Span::styled(time_str, Styles::default()),
        Span::styled(
            format!("  samples {}/{}", status.samples, status.capacity),
            Styles::dim(),
        ),
        Span::styled(format!("  cpus {}", status.logical_cpus), Styles::dim()),
        Span::styled("  q: quit", Styles::dim()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
