//! Summary strip — borrowing headline and the selected point's card.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use affordlab_core::format::format_gbp;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface))
        .title(" Affordability ")
        .title_style(Style::default().fg(theme.text_secondary));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let headline = app.navigator.headline();
    let view = app.navigator.view();

    let muted = Style::default().fg(theme.muted);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("You can comfortably borrow up to ", muted),
        Span::styled(
            format_gbp(headline.comfortable),
            Style::default()
                .fg(theme.high)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Your maximum borrowing amount is ", muted),
        Span::styled(
            format_gbp(headline.maximum),
            Style::default().fg(theme.low).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    // Selected point card.
    let band_color = theme.band_color(view.band);
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(band_color)),
        Span::styled(
            view.borrowing.clone(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} likelihood", view.band),
            Style::default().fg(band_color),
        ),
    ]));

    let rate = if view.interest_rate == "-" {
        "-".to_string()
    } else {
        format!("{}%", view.interest_rate)
    };
    lines.push(Line::from(vec![
        Span::styled("  Lenders: ", muted),
        Span::styled(view.lenders.clone(), Style::default().fg(theme.text_primary)),
        Span::styled("   Rate: ", muted),
        Span::styled(rate, Style::default().fg(theme.text_primary)),
        Span::styled("   Avg payment: ", muted),
        Span::styled(
            view.average_payment.clone(),
            Style::default().fg(theme.text_primary),
        ),
    ]));

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
