use crate::game::Phase;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: Phase, area: Rect) -> Paragraph<'static> {
        let hints = hints(phase);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Key hints for the screen shown in `phase`.
pub fn hints(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => " Enter/S: Start │ Esc: Quit",
        Phase::Playing => " 0-9: Type │ Enter: Guess │ Backspace: Delete │ P: Pause │ Esc: Quit",
        Phase::Paused => " P/R: Resume │ Esc: Quit",
        Phase::Won | Phase::TimedOut => " Enter/T: Try Again │ N: New Round │ Esc: Quit",
    }
}
