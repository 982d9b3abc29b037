//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use dutydraw_core::sequencer::TriggerLabel;

use crate::styles::ColorTheme;

/// What the header shows about the current draw.
#[derive(Debug, Clone, Copy)]
pub struct HeaderInfo<'a> {
    pub source: &'a str,
    pub period: Option<&'a str>,
    pub cursor: usize,
    pub total: usize,
    pub label: TriggerLabel,
}

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, info: &HeaderInfo<'_>) {
    let theme = ColorTheme::default();
    let period = info.period.unwrap_or("none");
    let text = vec![Line::from(vec![
        Span::styled("DutyDraw", theme.header_style()),
        Span::raw(format!(
            " | {} | Period: {period} | {}/{} | ",
            info.source, info.cursor, info.total
        )),
        Span::styled(
            format!("[ {} ]", info.label.text()),
            theme.trigger_style(info.label.is_enabled()),
        ),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" DutyDraw ");
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
