//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here: the navigator driving the chart, the active
//! panel, hover state and the error history.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use affordlab_core::hover::HoverNote;
use affordlab_core::navigator::Navigator;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Chart,
    Points,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Chart => 0,
            Panel::Points => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Chart),
            1 => Some(Panel::Points),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Chart => "Chart",
            Panel::Points => "Points",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Navigation,
    State,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Data => "DATA",
            ErrorCategory::Navigation => "NAV",
            ErrorCategory::State => "STATE",
        }
    }
}

/// Points panel state: a cursor over the dataset rows.
#[derive(Debug, Clone, Default)]
pub struct PointsPanelState {
    pub cursor: usize,
}

impl PointsPanelState {
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }
}

/// Hovered chart point plus its prepared tooltip.
#[derive(Debug, Clone)]
pub struct HoverState {
    pub index: usize,
    pub note: HoverNote,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // The engine
    pub navigator: Navigator,

    // Panel states
    pub points: PointsPanelState,
    pub hover: Option<HoverState>,
    /// Plot area of the chart panel, written back by the last render so
    /// mouse events can be hit-tested against the same projection.
    pub chart_plot: Option<Rect>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub welcome_dismissed: bool,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(navigator: Navigator, state_path: PathBuf) -> Self {
        Self {
            active_panel: Panel::Chart,
            running: true,
            navigator,
            points: PointsPanelState::default(),
            hover: None,
            chart_plot: None,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::Welcome,
            welcome_dismissed: false,
            state_path,
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
