//! Selector enums shared by the view state and the view models.
//!
//! Each selector is a plain enum with a total mapping to its tab index,
//! defined once here.

use crate::storage::model::{PressureSnapshot, Resource};

/// Which resource(s) the frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceFocus {
    /// Overview: one table per resource, no graphs.
    #[default]
    All,
    Cpu,
    Memory,
    Io,
}

impl ResourceFocus {
    pub fn all() -> &'static [ResourceFocus] {
        &[
            ResourceFocus::All,
            ResourceFocus::Cpu,
            ResourceFocus::Memory,
            ResourceFocus::Io,
        ]
    }

    pub fn tab_index(&self) -> usize {
        match self {
            ResourceFocus::All => 0,
            ResourceFocus::Cpu => 1,
            ResourceFocus::Memory => 2,
            ResourceFocus::Io => 3,
        }
    }

    /// Tab label; the bracketed letter is the hotkey.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceFocus::All => "[a]ll",
            ResourceFocus::Cpu => "[c]pu",
            ResourceFocus::Memory => "[m]emory",
            ResourceFocus::Io => "[i]o",
        }
    }

    /// The single resource in focus, `None` for the overview.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            ResourceFocus::All => None,
            ResourceFocus::Cpu => Some(Resource::Cpu),
            ResourceFocus::Memory => Some(Resource::Memory),
            ResourceFocus::Io => Some(Resource::Io),
        }
    }
}

/// Which pressure lines are shown: "some", "full", or both.
///
/// Always referred to qualified (`PressureMode::Some`) to keep it apart
/// from `Option::Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureMode {
    Some,
    Full,
    #[default]
    Both,
}

impl PressureMode {
    pub fn all() -> &'static [PressureMode] {
        &[PressureMode::Some, PressureMode::Full, PressureMode::Both]
    }

    pub fn tab_index(&self) -> usize {
        match self {
            PressureMode::Some => 0,
            PressureMode::Full => 1,
            PressureMode::Both => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PressureMode::Some => "[s]ome",
            PressureMode::Full => "[f]ull",
            PressureMode::Both => "[b]oth",
        }
    }

    pub fn includes_some(&self) -> bool {
        matches!(self, PressureMode::Some | PressureMode::Both)
    }

    pub fn includes_full(&self) -> bool {
        matches!(self, PressureMode::Full | PressureMode::Both)
    }
}

/// Averaging window plotted by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AveragingWindow {
    #[default]
    Avg10,
    Avg60,
    Avg300,
}

impl AveragingWindow {
    pub fn all() -> &'static [AveragingWindow] {
        &[
            AveragingWindow::Avg10,
            AveragingWindow::Avg60,
            AveragingWindow::Avg300,
        ]
    }

    pub fn tab_index(&self) -> usize {
        match self {
            AveragingWindow::Avg10 => 0,
            AveragingWindow::Avg60 => 1,
            AveragingWindow::Avg300 => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AveragingWindow::Avg10 => "avg[1]0",
            AveragingWindow::Avg60 => "avg[6]0",
            AveragingWindow::Avg300 => "avg[3]00",
        }
    }

    /// Window length in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            AveragingWindow::Avg10 => 10,
            AveragingWindow::Avg60 => 60,
            AveragingWindow::Avg300 => 300,
        }
    }

    /// Picks this window's average out of a snapshot.
    pub fn value(&self, snapshot: &PressureSnapshot) -> f64 {
        match self {
            AveragingWindow::Avg10 => snapshot.avg10,
            AveragingWindow::Avg60 => snapshot.avg60,
            AveragingWindow::Avg300 => snapshot.avg300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index_matches_position() {
        for (i, focus) in ResourceFocus::all().iter().enumerate() {
            assert_eq!(focus.tab_index(), i);
        }
        for (i, mode) in PressureMode::all().iter().enumerate() {
            assert_eq!(mode.tab_index(), i);
        }
        for (i, window) in AveragingWindow::all().iter().enumerate() {
            assert_eq!(window.tab_index(), i);
        }
    }

    #[test]
    fn test_mode_includes() {
        assert!(PressureMode::Some.includes_some());
        assert!(!PressureMode::Some.includes_full());
        assert!(!PressureMode::Full.includes_some());
        assert!(PressureMode::Full.includes_full());
        assert!(PressureMode::Both.includes_some());
        assert!(PressureMode::Both.includes_full());
    }

    #[test]
    fn test_window_value() {
        let snapshot = PressureSnapshot {
            avg10: 1.0,
            avg60: 2.0,
            avg300: 3.0,
            total: 0,
        };
        assert_eq!(AveragingWindow::Avg10.value(&snapshot), 1.0);
        assert_eq!(AveragingWindow::Avg60.value(&snapshot), 2.0);
        assert_eq!(AveragingWindow::Avg300.value(&snapshot), 3.0);
        assert_eq!(AveragingWindow::Avg300.seconds(), 300);
    }

    #[test]
    fn test_focus_resource() {
        assert_eq!(ResourceFocus::All.resource(), None);
        assert_eq!(ResourceFocus::Cpu.resource(), Some(Resource::Cpu));
        assert_eq!(ResourceFocus::Io.resource(), Some(Resource::Io));
    }
}
