//! Period list panel.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the registry of periods.
///
/// `highlighted` is the cursor row; `selected` marks the period being drawn.
pub fn render_periods(
    frame: &mut Frame,
    area: Rect,
    periods: &[String],
    highlighted: usize,
    selected: Option<usize>,
) {
    let theme = ColorTheme::default();

    let items: Vec<ListItem> = if periods.is_empty() {
        vec![ListItem::new(Line::styled(
            "no periods",
            theme.muted_style(),
        ))]
    } else {
        periods
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let marker = if selected == Some(i) { "● " } else { "  " };
                let style = if i == highlighted {
                    theme.highlight_style()
                } else {
                    theme.text_style()
                };
                let pointer = if i == highlighted { "›" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::raw(marker),
                    Span::styled(name.as_str(), style),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Periods ")
            .border_style(Style::default().fg(theme.muted)),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(periods: &[String], highlighted: usize, selected: Option<usize>) -> Vec<String> {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_periods(frame, area, periods, highlighted, selected);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn lists_periods_in_order() {
        let periods = vec!["P1".to_string(), "P2".to_string()];
        let rows = draw(&periods, 0, None);
        assert!(rows[1].contains("P1"));
        assert!(rows[2].contains("P2"));
        assert!(rows[1].contains('›'));
    }

    #[test]
    fn marks_selected_period() {
        let periods = vec!["P1".to_string(), "P2".to_string()];
        let rows = draw(&periods, 0, Some(1));
        assert!(rows[2].contains('●'));
        assert!(!rows[1].contains('●'));
    }

    #[test]
    fn empty_registry() {
        let rows = draw(&[], 0, None);
        assert!(rows[1].contains("no periods"));
    }
}
