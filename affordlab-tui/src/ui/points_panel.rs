//! Points panel — dataset table with cursor selection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use affordlab_core::format::format_gbp;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let muted = Style::default().fg(theme.muted);
    let mut lines: Vec<Line> = Vec::new();

    // Header
    let points = app.navigator.dataset().points();
    let interactive = points.iter().filter(|point| point.is_interactive()).count();
    lines.push(Line::from(vec![
        Span::styled("Points: ", muted),
        Span::styled(
            format!("{} ({interactive} interactive)", points.len()),
            Style::default().fg(theme.deposit),
        ),
        Span::styled("  [j/k]move [Enter]select", muted),
    ]));
    lines.push(Line::from(""));

    for (index, point) in points.iter().enumerate() {
        let is_cursor = index == app.points.cursor;
        let is_selected = app.navigator.is_selected(index);

        let marker = if is_selected { "● " } else { "  " };
        let mut spans: Vec<Span> = vec![Span::styled(
            marker,
            Style::default().fg(theme.deposit),
        )];

        let loan_style = if is_cursor {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::REVERSED)
        } else if point.is_interactive() {
            Style::default().fg(theme.text_primary)
        } else {
            muted
        };
        spans.push(Span::styled(
            format!("{:>12}", format_gbp(point.loan)),
            loan_style,
        ));

        spans.push(Span::styled(
            format!("  {:>3} lenders", point.lenders),
            muted,
        ));

        if let Some(rate) = point.interest_rate {
            spans.push(Span::styled(
                format!("  {rate}%"),
                Style::default().fg(theme.text_secondary),
            ));
        }
        if point.deposit {
            spans.push(Span::styled(
                "  deposit",
                Style::default().fg(theme.deposit),
            ));
        }
        if let Some(band) = point.likelihood {
            spans.push(Span::styled(
                format!("  {band} likelihood"),
                Style::default().fg(theme.band_color(band)),
            ));
        }

        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
