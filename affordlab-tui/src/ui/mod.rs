//! Top-level UI layout — summary strip, active panel, status bar.

pub mod chart_panel;
pub mod help_panel;
pub mod overlays;
pub mod points_panel;
pub mod status_bar;
pub mod summary_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Overlay, Panel};
use crate::theme::Theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let theme = Theme::default();

    // Split: summary strip + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let summary_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    // Summary strip is always visible, whatever panel is active.
    summary_panel::render(f, summary_area, app, &theme);

    // Draw the active panel.
    draw_panel(f, main_area, app, &theme);

    // Draw status bar.
    status_bar::render(f, status_area, app, &theme);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area, &theme),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app, &theme),
        Overlay::None => {}
    }
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &mut AppState, theme: &Theme) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.deposit))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(
            Style::default()
                .fg(theme.deposit)
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Chart => chart_panel::render(f, inner, app, theme),
        Panel::Points => {
            // Mouse events are only hit-tested while the chart is on screen.
            app.chart_plot = None;
            points_panel::render(f, inner, app, theme);
        }
        Panel::Help => {
            app.chart_plot = None;
            help_panel::render(f, inner, theme);
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
