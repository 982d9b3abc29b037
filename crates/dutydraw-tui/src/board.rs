//! Results board panel.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use dutydraw_orchestration::board::{RevealPhase, RevealUnit};

use crate::styles::ColorTheme;

/// Placeholder for a slot with nothing to show.
const EMPTY_SLOT: &str = "—";

fn unit_line<'a>(unit: &'a RevealUnit, now: Instant, theme: &ColorTheme) -> Line<'a> {
    if !unit.visible {
        return Line::styled(unit.label.as_str(), theme.muted_style());
    }

    let (slot, style) = match unit.phase {
        RevealPhase::Spinning => (
            unit.slot_text(now).unwrap_or(EMPTY_SLOT),
            theme.spinning_style(),
        ),
        RevealPhase::Revealed if unit.is_impacting() => (
            unit.slot_text(now).unwrap_or(EMPTY_SLOT),
            theme.impact_style(),
        ),
        RevealPhase::Revealed => (
            unit.slot_text(now).unwrap_or(EMPTY_SLOT),
            theme.revealed_style(),
        ),
    };

    Line::from(vec![
        Span::styled(unit.label.as_str(), theme.text_style()),
        Span::raw("  "),
        Span::styled(format!(" {slot} "), style),
    ])
}

/// Render reveal units from `start`, one per row.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    units: &[RevealUnit],
    start: usize,
    now: Instant,
) {
    let theme = ColorTheme::default();
    let visible_height = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = units
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|unit| ListItem::new(unit_line(unit, now, &theme)))
        .collect();

    let title = if units.len() > visible_height {
        let last = (start + visible_height).min(units.len());
        format!(" Results ({}-{} of {}) ", start + 1, last, units.len())
    } else {
        " Results ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.primary)),
    );
    frame.render_widget(list, area);
}

/// Render a static message in place of the board.
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let theme = ColorTheme::default();
    let style = if is_error {
        theme.error_style()
    } else {
        theme.muted_style()
    };
    let paragraph = Paragraph::new(Line::styled(message, style))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Results "));
    frame.render_widget(paragraph, area);
}
