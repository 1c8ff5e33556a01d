//! Tabbed selector boxes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::tui::style::Styles;
use crate::view::SelectorSpec;

/// Renders one selector with its active tab highlighted.
pub fn render_selector(frame: &mut Frame, area: Rect, spec: &SelectorSpec) {
    let titles: Vec<Line> = spec.tabs.iter().map(|t| Line::from(*t)).collect();

    let tabs = Tabs::new(titles)
        .select(spec.active)
        .block(
            Block::default()
                .title(spec.title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .style(Styles::tab_inactive())
        .highlight_style(Styles::tab_active())
        .divider("|");

    frame.render_widget(tabs, area);
}
