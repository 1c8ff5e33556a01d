//! View state: the three selectors and their key transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{AveragingWindow, PressureMode, ResourceFocus};

/// Current selector values.
///
/// Fields are private so every change goes through a transition that keeps
/// the CPU invariant: with CPU in focus the mode is always
/// [`PressureMode::Some`], since the kernel reports no "full" CPU pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    focus: ResourceFocus,
    mode: PressureMode,
    window: AveragingWindow,
}

impl ViewState {
    /// Startup state: all resources, both lines, 10s average.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> ResourceFocus {
        self.focus
    }

    pub fn mode(&self) -> PressureMode {
        self.mode
    }

    pub fn window(&self) -> AveragingWindow {
        self.window
    }

    /// Switches the resource focus.
    ///
    /// Entering CPU forces `Some`; any other focus resets the mode to `Both`.
    pub fn select_focus(&mut self, focus: ResourceFocus) {
        self.focus = focus;
        self.mode = match focus {
            ResourceFocus::Cpu => PressureMode::Some,
            _ => PressureMode::Both,
        };
    }

    /// Sets the pressure mode. Returns `false` (and changes nothing) when
    /// `Full` or `Both` is requested with CPU in focus.
    pub fn select_mode(&mut self, mode: PressureMode) -> bool {
        if self.focus == ResourceFocus::Cpu && mode != PressureMode::Some {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn select_window(&mut self, window: AveragingWindow) {
        self.window = window;
    }

    /// Applies a selector hotkey. Returns `false` for keys that are not
    /// selector hotkeys and for rejected mode changes.
    ///
    /// Keys carrying Ctrl or Alt are never hotkeys (`Ctrl-C` is not `c`).
    pub fn apply(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        let KeyCode::Char(c) = key.code else {
            return false;
        };

        match c {
            'a' => self.select_focus(ResourceFocus::All),
            'c' => self.select_focus(ResourceFocus::Cpu),
            'm' => self.select_focus(ResourceFocus::Memory),
            'i' => self.select_focus(ResourceFocus::Io),
            '1' => self.select_window(AveragingWindow::Avg10),
            '6' => self.select_window(AveragingWindow::Avg60),
            '3' => self.select_window(AveragingWindow::Avg300),
            's' => return self.select_mode(PressureMode::Some),
            'f' => return self.select_mode(PressureMode::Full),
            'b' => return self.select_mode(PressureMode::Both),
            _ => return false,
        }
        true
    }
}
