//! Chart panel — affordability curve with banded regions, markers, tooltip.
//!
//! Renders the curve using direct buffer writes:
//! - Each column = one loan amount via the shared chart projection
//! - Area under the curve filled with the column's likelihood band color
//! - Deposit region hatched in bright green on top of the fill
//! - Interactive points marked on the curve, selected point emphasized
//! - Hovered point gets a tooltip in the empty top-left of the plot

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use affordlab_core::dataset::Dataset;
use affordlab_core::format::{format_gbp, format_gbp_compact};
use affordlab_core::hover::HoverNote;
use affordlab_core::scale::ChartProjection;

use crate::app::AppState;
use crate::theme::Theme;

/// Left margin reserved for lender-count labels.
const LABEL_WIDTH: u16 = 4;

/// Plot area inside the panel, after the axis margins.
///
/// Mouse hit-testing rebuilds the projection from this same rect, so the
/// margin math lives in exactly one place.
pub fn plot_area(area: Rect) -> Rect {
    Rect {
        x: area.x + LABEL_WIDTH,
        y: area.y,
        width: area.width.saturating_sub(LABEL_WIDTH),
        height: area.height.saturating_sub(1),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState, theme: &Theme) {
    let plot = plot_area(area);
    app.chart_plot = (plot.width > 0 && plot.height > 0).then_some(plot);

    let chart = AffordabilityChart {
        dataset: app.navigator.dataset(),
        selected: app.navigator.selected_index(),
        hover: app.hover.as_ref().map(|state| &state.note),
        theme,
    };
    f.render_widget(chart, area);
}

/// Affordability curve widget
pub struct AffordabilityChart<'a> {
    pub dataset: &'a Dataset,
    pub selected: usize,
    pub hover: Option<&'a HoverNote>,
    pub theme: &'a Theme,
}

impl<'a> AffordabilityChart<'a> {
    fn marker_loan(&self, slot: Option<usize>) -> Option<u64> {
        slot.and_then(|index| self.dataset.point(index))
            .map(|point| point.loan)
    }

    /// Fill color for the column covering `loan`.
    fn region_color(&self, loan: u64) -> Color {
        let markers = self.dataset.markers();
        if let Some(high) = self.marker_loan(markers.high) {
            if loan <= high {
                return self.theme.high;
            }
        }
        if let Some(moderate) = self.marker_loan(markers.moderate) {
            if loan <= moderate {
                return self.theme.moderate;
            }
        }
        if let Some(low) = self.marker_loan(markers.low) {
            if loan <= low {
                return self.theme.low;
            }
        }
        self.theme.surface
    }
}

impl<'a> Widget for AffordabilityChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plot = plot_area(area);
        if plot.width == 0 || plot.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.theme.background));

        let projection = ChartProjection::new(self.dataset, plot.width, plot.height);
        let deposit_loan = self.marker_loan(self.dataset.markers().deposit);

        // Area fill, one column per cell.
        for col in 0..plot.width {
            let loan = projection.loan_at(col);
            let lenders = self.dataset.lenders_at(loan);
            let top = projection.y_cell(lenders);
            let color = self.region_color(loan);
            let in_deposit = deposit_loan.is_some_and(|deposit| loan <= deposit);

            let x = plot.x + col;
            for y in top..plot.height {
                let (symbol, style) = if in_deposit && (col + y) % 2 == 0 {
                    ("▚", Style::default().fg(self.theme.deposit))
                } else {
                    ("█", Style::default().fg(color))
                };
                buf.set_string(x, plot.y + y, symbol, style);
            }

            // Curve line rides on top of the fill.
            buf.set_string(
                x,
                plot.y + top,
                "█",
                Style::default().fg(self.theme.line),
            );
        }

        // Interactive point markers.
        for index in self.dataset.interactive_indices() {
            let Some(point) = self.dataset.point(index) else {
                continue;
            };
            let x = plot.x + projection.x_cell(point.loan);
            let y = plot.y + projection.y_cell(f64::from(point.lenders));
            let (symbol, style) = if index == self.selected {
                (
                    "◉",
                    Style::default()
                        .fg(self.theme.deposit)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("●", Style::default().fg(self.theme.line))
            };
            buf.set_string(x, y, symbol, style);
        }

        // Lender-count labels down the left margin.
        let max_lenders = self
            .dataset
            .points()
            .iter()
            .map(|point| point.lenders)
            .max()
            .unwrap_or(0);
        let y_labels = [max_lenders, max_lenders / 2, 0];
        let y_positions = [0u16, plot.height / 2, plot.height.saturating_sub(1)];
        for (value, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            let label = format!("{value:>3}");
            buf.set_string(
                area.x,
                plot.y + y_pos,
                &label,
                Style::default().fg(self.theme.muted),
            );
        }

        // Loan ticks along the bottom row.
        let axis_y = plot.y + plot.height;
        if axis_y < area.bottom() {
            for tick in projection.x_ticks() {
                let x = plot.x + projection.x_cell(tick);
                let label = format_gbp_compact(tick);
                if x < area.right() {
                    let room = (area.right() - x) as usize;
                    buf.set_stringn(
                        x,
                        axis_y,
                        &label,
                        room,
                        Style::default().fg(self.theme.muted),
                    );
                }
            }
        }

        // Hover tooltip in the top-left of the plot, where the curve is low.
        if let Some(note) = self.hover {
            let width = plot.width.saturating_sub(2) as usize;
            if width >= 16 {
                let heading = format!("{} · {} lenders", format_gbp(note.loan), note.lenders);
                let heading_style = Style::default()
                    .fg(self.theme.relation_color(note.relation))
                    .add_modifier(Modifier::BOLD);
                buf.set_stringn(plot.x + 1, plot.y, &heading, width, heading_style);

                let mut row = plot.y + 1;
                for line in wrap_words(&note.message, width) {
                    if row >= plot.y + plot.height {
                        break;
                    }
                    buf.set_stringn(
                        plot.x + 1,
                        row,
                        &line,
                        width,
                        Style::default().fg(self.theme.muted),
                    );
                    row += 1;
                }
            }
        }
    }
}

/// Greedy word wrap for tooltip text.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use affordlab_core::hover::hover_note;

    fn render_sample(area: Rect, selected: usize, hover: Option<&HoverNote>) -> Buffer {
        let theme = Theme::default();
        let dataset = Dataset::sample();
        let chart = AffordabilityChart {
            dataset: &dataset,
            selected,
            hover,
            theme: &theme,
        };
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        buf
    }

    fn buffer_content(buf: &Buffer, area: Rect) -> String {
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        content
    }

    #[test]
    fn test_chart_renders_without_panic() {
        let area = Rect::new(0, 0, 80, 24);
        render_sample(area, 2, None);
    }

    #[test]
    fn test_markers_follow_the_projection() {
        // Plot is 61x21 after margins, so the deposit at £20,000 / 75 lenders
        // lands on column 4, row 0.
        let area = Rect::new(0, 0, 65, 22);
        let buf = render_sample(area, 2, None);

        assert_eq!(buf.cell((8, 0)).unwrap().symbol(), "●");
        // Sweet spot is selected, so it gets the emphasized marker.
        assert_eq!(buf.cell((29, 0)).unwrap().symbol(), "◉");

        let content = buffer_content(&buf, area);
        assert_eq!(content.matches('●').count(), 3);
        assert_eq!(content.matches('◉').count(), 1);
    }

    #[test]
    fn test_regions_color_the_fill() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 65, 22);
        let buf = render_sample(area, 2, None);

        // Column 20 covers £91,000: high band, past the deposit.
        assert_eq!(buf.cell((24, 20)).unwrap().style().fg, Some(theme.high));
        // Column 55 covers £250,250: past the low marker, plain surface.
        assert_eq!(buf.cell((59, 20)).unwrap().style().fg, Some(theme.surface));

        // Column 2 covers £9,100: inside the deposit, so the hatch shows up.
        let hatched = (0..21).any(|y| {
            let cell = buf.cell((6, y)).unwrap();
            cell.symbol() == "▚" && cell.style().fg == Some(theme.deposit)
        });
        assert!(hatched, "expected deposit hatch in column 2");
    }

    #[test]
    fn test_axis_labels_present() {
        let area = Rect::new(0, 0, 65, 22);
        let buf = render_sample(area, 2, None);
        let content = buffer_content(&buf, area);

        assert!(content.contains("£50K"));
        assert!(content.contains("£250K"));
        assert!(content.contains(" 75"));
    }

    #[test]
    fn test_tooltip_renders_message() {
        let dataset = Dataset::sample();
        let note = hover_note(&dataset, 2).unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let buf = render_sample(area, 2, Some(&note));
        let content = buffer_content(&buf, area);

        assert!(content.contains("£113,456 · 75 lenders"));
        assert!(content.contains("sweet spot"));
    }

    #[test]
    fn test_tiny_area_is_safe() {
        let area = Rect::new(0, 0, 3, 2);
        render_sample(area, 2, None);
    }

    #[test]
    fn test_wrap_words_respects_width() {
        let lines = wrap_words("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap_words("", 10).is_empty());
    }
}
