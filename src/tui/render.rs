//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use crate::view::{Area, FrameSpec, PaneContent};

use super::widgets::{render_graph, render_pressure_table, render_selector, render_status};

/// Draws a composed frame.
///
/// Fixed areas are clipped to the terminal; anything entirely off-screen is
/// skipped.
pub fn render(frame: &mut Frame, spec: &FrameSpec) {
    let bounds = frame.area();
    frame.render_widget(Clear, bounds);

    if let Some(area) = clip(Area::new(0, 0, bounds.width, 1), bounds) {
        render_status(frame, area, &spec.status);
    }

    for selector in &spec.selectors {
        if let Some(area) = clip(selector.area, bounds) {
            render_selector(frame, area, selector);
        }
    }

    for pane in &spec.panes {
        let Some(area) = clip(pane.area, bounds) else {
            continue;
        };
        match &pane.content {
            PaneContent::Table(table) => render_pressure_table(frame, area, table),
            PaneContent::Graph(plot) => render_graph(frame, area, plot),
        }
    }
}

fn clip(area: Area, bounds: Rect) -> Option<Rect> {
    let rect = Rect::new(area.x, area.y, area.width, area.height).intersection(bounds);
    (!rect.is_empty()).then_some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::model::{AllPressures, PressureSnapshot, ResourcePressure};
    use crate::tui::state::ViewState;
    use crate::view::{CpuThresholds, compose_frame};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn sample(timestamp: i64, value: f64) -> AllPressures {
        let snapshot = PressureSnapshot {
            avg10: value,
            avg60: value / 2.0,
            avg300: value / 4.0,
            total: 1000,
        };
        let pressure = ResourcePressure {
            some: snapshot,
            full: snapshot,
        };
        AllPressures {
            timestamp,
            cpu: pressure,
            memory: pressure,
            io: pressure,
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(view: &ViewState, history: &[AllPressures], width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let spec = compose_frame(view, history, CpuThresholds::new(4), 100);
        terminal.draw(|frame| render(frame, &spec)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_overview_draws_all_tables() {
        let history: Vec<_> = (0..3).map(|i| sample(i, i as f64)).collect();
        let text = draw(&ViewState::new(), &history, 100, 40);

        assert!(text.contains("Resource"));
        assert!(text.contains("[m]emory"));
        assert!(text.contains("Graph metric"));
        assert!(text.contains("CPU"));
        assert!(text.contains("Memory"));
        assert!(text.contains("IO"));
        assert!(text.contains("avg300"));
        assert!(text.contains("2.00"));
        assert!(text.contains("samples 3/100"));
    }

    #[test]
    fn test_single_resource_draws_graph() {
        let mut view = ViewState::new();
        view.apply(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE));
        let history: Vec<_> = (0..10).map(|i| sample(i, i as f64)).collect();
        let text = draw(&view, &history, 100, 50);

        assert!(text.contains("IO"));
        assert!(text.contains("Pressure"));
    }

    #[test]
    fn test_empty_history_draws_selectors() {
        let text = draw(&ViewState::new(), &[], 100, 10);
        assert!(text.contains("Some/full"));
        assert!(text.contains("samples 0/100"));
        assert!(!text.contains("avg300"));
    }

    #[test]
    fn test_tiny_terminal_is_clipped() {
        let history: Vec<_> = (0..3).map(|i| sample(i, i as f64)).collect();
        let mut view = ViewState::new();
        view.apply(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));

        // Smaller than every fixed pane; must not panic.
        draw(&view, &history, 20, 6);
        draw(&view, &history, 1, 1);
    }

    #[test]
    fn test_clip() {
        let bounds = Rect::new(0, 0, 50, 20);
        assert_eq!(
            clip(Area::new(4, 5, 90, 7), bounds),
            Some(Rect::new(4, 5, 46, 7))
        );
        assert_eq!(clip(Area::new(67, 1, 31, 3), bounds), None);
    }
}
