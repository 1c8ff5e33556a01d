//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering framework. The TUI maps them to ratatui styles.

/// Color class of a pressure value, relative to the logical CPU count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureLevel {
    /// Exactly zero (TUI: white).
    #[default]
    Idle,
    /// Below the CPU count (TUI: green).
    Normal,
    /// Up to twice the CPU count (TUI: yellow).
    Elevated,
    /// Twice the CPU count or more (TUI: red).
    Critical,
}

/// Coloring thresholds derived from the host's logical CPU count.
///
/// Computed once at startup and passed in explicitly, so renderers stay
/// pure functions of their inputs. The same thresholds apply to memory and
/// io pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuThresholds {
    logical_cpus: usize,
}

impl CpuThresholds {
    /// A zero count is treated as one CPU.
    pub fn new(logical_cpus: usize) -> Self {
        Self {
            logical_cpus: logical_cpus.max(1),
        }
    }

    /// Reads the host's logical CPU count, falling back to 1.
    pub fn detect() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(cpus)
    }

    pub fn logical_cpus(&self) -> usize {
        self.logical_cpus
    }

    pub fn classify(&self, value: f64) -> PressureLevel {
        let cpus = self.logical_cpus as f64;
        if value == 0.0 {
            PressureLevel::Idle
        } else if value < cpus {
            PressureLevel::Normal
        } else if value < 2.0 * cpus {
            PressureLevel::Elevated
        } else {
            PressureLevel::Critical
        }
    }
}

/// A single formatted value cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCell {
    pub text: String,
    pub level: PressureLevel,
    /// Set when the value differs from the previous sample.
    pub emphasized: bool,
}

/// Formats a value against its previous value.
///
/// Emphasis uses exact float comparison: a repeated identical average is
/// not highlighted.
pub fn format_cell(current: f64, previous: f64, thresholds: CpuThresholds) -> ViewCell {
    ViewCell {
        text: format!("{:.2}", current),
        level: thresholds.classify(current),
        emphasized: current != previous,
    }
}

/// Position and size of a pane in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First row below this area.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}
