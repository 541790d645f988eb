use crate::game::{Screen, MAX_INPUT_LEN};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, CARD_BORDER, CLOCK_CRITICAL_SECONDS, HEADER_TEXT, INPUT_BG, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const CARD_MIN_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    frame.render_widget(
        Header::new().widget(view.phase, app.game().rounds()),
        header,
    );
    frame.render_widget(Clear, body);

    let (title, lines) = screen_lines(&view.screen);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let card_width = content_width.saturating_add(6).max(CARD_MIN_WIDTH);
    let card_height = (lines.len() as u16).saturating_add(2);
    let card_area = centered_rect_by_size(body, card_width, card_height);

    let card = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(card),
        card_area,
    );

    frame.render_widget(Footer::new().widget(view.phase, footer), footer);
}

/// Card title and body for one screen.
pub fn screen_lines(screen: &Screen) -> (&'static str, Vec<Line<'static>>) {
    let text = Style::default().fg(HEADER_TEXT);
    let button = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    match screen {
        Screen::Welcome => (
            "Number Guessing Game",
            vec![
                Line::from(""),
                Line::styled("Try to guess the number between 1 and 10!", text),
                Line::from(""),
                Line::styled("[ Start Game ]", button),
            ],
        ),
        Screen::Round {
            input,
            attempts,
            remaining_seconds,
            paused,
        } => {
            let clock_style = if *remaining_seconds <= CLOCK_CRITICAL_SECONDS {
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
            } else {
                text
            };
            let mut lines = vec![
                Line::styled("Game Started! Guess the number between 1 and 10.", text),
                Line::from(""),
                guess_field(input, *paused),
                Line::from(""),
                Line::styled(format!("Attempts: {attempts}"), text),
                Line::styled(format!("Time left: {remaining_seconds} seconds"), clock_style),
                Line::from(""),
            ];
            if *paused {
                lines.push(Line::styled(
                    "Paused",
                    Style::default().fg(STATUS_WARN).add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::styled("[ Resume ]", button));
            } else {
                lines.push(Line::styled("[ Pause ]", button));
            }
            ("Number Guessing Game", lines)
        }
        Screen::Won { target, attempts } => (
            "Congratulations!",
            vec![
                Line::from(""),
                Line::styled(
                    format!("You guessed the correct number {target} in {attempts} attempts!"),
                    Style::default().fg(STATUS_OK),
                ),
                Line::from(""),
                Line::styled("[ Try Again ]", button),
            ],
        ),
        Screen::TimedOut { target } => (
            "Time Up!",
            vec![
                Line::from(""),
                Line::styled(
                    format!("You ran out of time. The correct number was {target}."),
                    Style::default().fg(STATUS_ERROR),
                ),
                Line::from(""),
                Line::styled("[ Try Again ]", button),
            ],
        ),
    }
}

fn guess_field(input: &str, paused: bool) -> Line<'static> {
    let mut field = Style::default().bg(INPUT_BG).fg(HEADER_TEXT);
    if paused {
        field = field.add_modifier(Modifier::DIM);
    }
    let label = Style::default().fg(HEADER_TEXT);

    let content = if input.is_empty() {
        Span::styled(
            " Enter your guess ",
            field.add_modifier(Modifier::DIM | Modifier::ITALIC),
        )
    } else {
        Span::styled(format!(" {input:<width$} ", width = MAX_INPUT_LEN), field)
    };
    Line::from(vec![
        Span::styled("Your guess: ", label),
        content,
        Span::styled("  [ Guess ]", Style::default().fg(ACCENT)),
    ])
}
