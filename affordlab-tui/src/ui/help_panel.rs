//! Help panel — keyboard shortcuts and chart legend.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Global Navigation");
    key(&mut lines, theme, "1-3", "Switch to panel by number");
    key(&mut lines, theme, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, theme, "e", "Open error history overlay");
    key(&mut lines, theme, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Panel 1 — Chart");
    key(&mut lines, theme, "h / ←", "Step to the previous interactive point");
    key(&mut lines, theme, "l / →", "Step to the next interactive point");
    key(&mut lines, theme, "d", "Jump to the deposit point");
    key(&mut lines, theme, "s", "Jump to the sweet spot");
    key(&mut lines, theme, "Mouse hover", "Show the lender tooltip for a point");
    key(&mut lines, theme, "Mouse click", "Select the point under the cursor");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Panel 2 — Points");
    key(&mut lines, theme, "j / k", "Move cursor down / up");
    key(&mut lines, theme, "Enter / Space", "Select the row's point");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Reading the chart");
    key(&mut lines, theme, "mint / amber / coral", "High, moderate and low likelihood bands");
    key(&mut lines, theme, "green hatch", "Loans already covered by your deposit");
    key(&mut lines, theme, "◉", "Currently selected point");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.deposit)
            .add_modifier(Modifier::BOLD),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {keys:>20}  "),
            Style::default().fg(theme.deposit),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.muted)),
    ]));
}
