//! Input dispatch — overlays first, then global keys, then the active panel.
//! Mouse events are hit-tested against the chart projection from the last
//! render.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use affordlab_core::cursor::NavigationError;
use affordlab_core::hover::hover_note;
use affordlab_core::scale::ChartProjection;

use crate::app::{AppState, ErrorCategory, HoverState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            app.welcome_dismissed = true;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Chart;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Points;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Chart => handle_chart_key(app, key),
        Panel::Points => handle_points_key(app, key),
        Panel::Help => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_chart_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            step_backward(app);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            step_forward(app);
        }
        KeyCode::Char('d') => {
            let borrowing = app.navigator.select_deposit().borrowing.clone();
            app.set_status(borrowing);
        }
        KeyCode::Char('s') => {
            let borrowing = app.navigator.select_sweet_spot().borrowing.clone();
            app.set_status(borrowing);
        }
        _ => {}
    }
}

fn step_forward(app: &mut AppState) {
    match app.navigator.next().map(|view| view.borrowing.clone()) {
        Ok(borrowing) => app.set_status(borrowing),
        Err(err) => app.push_error(
            ErrorCategory::Navigation,
            err.to_string(),
            "step forward".to_string(),
        ),
    }
}

fn step_backward(app: &mut AppState) {
    match app.navigator.previous().map(|view| view.borrowing.clone()) {
        Ok(borrowing) => app.set_status(borrowing),
        Err(err) => app.push_error(
            ErrorCategory::Navigation,
            err.to_string(),
            "step backward".to_string(),
        ),
    }
}

fn handle_points_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.navigator.dataset().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.points.cursor_down(row_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.points.cursor_up();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = app.points.cursor;
            let Some(loan) = app.navigator.dataset().point(cursor).map(|p| p.loan) else {
                return;
            };
            match app.navigator.select_loan(loan).map(|view| view.borrowing.clone()) {
                Ok(borrowing) => app.set_status(borrowing),
                Err(NavigationError::NotInteractive { .. }) => {
                    app.set_warning("Point is not interactive");
                }
                Err(err) => app.push_error(
                    ErrorCategory::Navigation,
                    err.to_string(),
                    format!("row {cursor}"),
                ),
            }
        }
        _ => {}
    }
}

/// Handle a mouse event against the chart plot captured by the last render.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    let Some(plot) = app.chart_plot else {
        return;
    };
    if mouse.column < plot.x
        || mouse.column >= plot.x + plot.width
        || mouse.row < plot.y
        || mouse.row >= plot.y + plot.height
    {
        if matches!(mouse.kind, MouseEventKind::Moved) {
            app.hover = None;
        }
        return;
    }
    let column = mouse.column - plot.x;
    let row = mouse.row - plot.y;
    let projection = ChartProjection::new(app.navigator.dataset(), plot.width, plot.height);
    let hit = projection.hit_test(app.navigator.dataset(), column, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(index) = hit else {
                return;
            };
            let Some(loan) = app.navigator.dataset().point(index).map(|p| p.loan) else {
                return;
            };
            match app.navigator.select_loan(loan).map(|view| view.borrowing.clone()) {
                Ok(borrowing) => app.set_status(borrowing),
                Err(err) => app.push_error(
                    ErrorCategory::Navigation,
                    err.to_string(),
                    "chart click".to_string(),
                ),
            }
        }
        MouseEventKind::Moved => {
            app.hover = hit.and_then(|index| {
                hover_note(app.navigator.dataset(), index)
                    .ok()
                    .map(|note| HoverState { index, note })
            });
        }
        _ => {}
    }
}
