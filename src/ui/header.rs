use crate::game::Phase;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: Phase, round: u64) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let phase_style = Style::default()
            .fg(phase_color(phase))
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Number Guessing Game",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(phase.to_string(), phase_style),
        ];
        if round > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("Round {round}"), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => HEADER_TEXT,
        Phase::Playing | Phase::Won => STATUS_OK,
        Phase::Paused => STATUS_WARN,
        Phase::TimedOut => STATUS_ERROR,
    }
}
