//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::storage::model::Resource;
use crate::view::{LineKind, PressureLevel};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    // Value levels
    pub const LEVEL_IDLE: Color = Color::White;
    pub const LEVEL_NORMAL: Color = Color::Green;
    pub const LEVEL_ELEVATED: Color = Color::Yellow;
    pub const LEVEL_CRITICAL: Color = Color::Red;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::White;

    // Resource titles
    pub const CPU_COLOR: Color = Color::Cyan;
    pub const MEM_COLOR: Color = Color::Blue;
    pub const IO_COLOR: Color = Color::Magenta;

    // Graph lines
    pub const SOME_LINE: Color = Color::Green;
    pub const FULL_LINE: Color = Color::Yellow;
}

/// Pre-defined styles for UI elements.
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn status() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Title style of a resource's table.
    pub fn resource_title(resource: Resource) -> Style {
        let color = match resource {
            Resource::Cpu => Theme::CPU_COLOR,
            Resource::Memory => Theme::MEM_COLOR,
            Resource::Io => Theme::IO_COLOR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Value cell style: color by level, bold when the value changed.
    pub fn value(level: PressureLevel, emphasized: bool) -> Style {
        let color = match level {
            PressureLevel::Idle => Theme::LEVEL_IDLE,
            PressureLevel::Normal => Theme::LEVEL_NORMAL,
            PressureLevel::Elevated => Theme::LEVEL_ELEVATED,
            PressureLevel::Critical => Theme::LEVEL_CRITICAL,
        };
        let style = Style::default().fg(color);
        if emphasized {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn line(kind: LineKind) -> Style {
        match kind {
            LineKind::Some => Style::default().fg(Theme::SOME_LINE),
            LineKind::Full => Style::default().fg(Theme::FULL_LINE),
        }
    }
}
