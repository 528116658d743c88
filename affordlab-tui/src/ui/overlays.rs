//! Overlay widgets — welcome and error history.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let accent = Style::default().fg(theme.deposit);
    let accent_bold = accent.add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .title(" Welcome to AffordLab ")
        .title_style(accent_bold);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", accent_bold)),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Step through the points with ← and →",
            muted,
        )),
        Line::from(Span::styled(
            "  2. Press d for your deposit, s for the sweet spot",
            muted,
        )),
        Line::from(Span::styled(
            "  3. Hover or click the chart with the mouse",
            muted,
        )),
        Line::from(Span::styled(
            "  4. Press 2 for the full point table",
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss...",
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let muted = Style::default().fg(theme.muted);
    let negative = Style::default().fg(theme.low);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(negative)
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(negative);

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", muted));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let is_active = i == app.error_scroll;
        let style = if is_active {
            negative.add_modifier(Modifier::BOLD)
        } else {
            muted
        };

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", err.timestamp.format("%H:%M:%S")), muted),
            Span::styled(
                format!("[{}] ", err.category.label()),
                Style::default().fg(theme.moderate),
            ),
            Span::styled(&err.message, style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(&err.context, muted),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
