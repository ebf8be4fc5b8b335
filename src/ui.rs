/// Pure rendering of a `GameState` into a ratatui frame - no game logic.
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::game::{GameState, GameStatus};

pub fn render(frame: &mut Frame, state: &GameState) {
    let [header, selector, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new("🎯 Number Guessing Game")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, header);

    frame.render_widget(difficulty_line(state), selector);
    frame.render_widget(body_text(state), body);
    frame.render_widget(
        Paragraph::new(footer_hint(state)).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn difficulty_line(state: &GameState) -> Paragraph<'_> {
    let locked = !state.is_fresh();
    let line = Line::from(vec![
        Span::raw("Difficulty: "),
        Span::styled(
            state.difficulty.label(),
            Style::default().fg(if locked { Color::DarkGray } else { Color::Cyan }),
        ),
        Span::raw(if locked {
            "  (locked until restart)"
        } else {
            "  ←/→ to change"
        }),
    ]);
    Paragraph::new(line)
}

fn body_text(state: &GameState) -> Paragraph<'_> {
    let mut lines = vec![
        Line::raw(""),
        Line::styled(state.message.as_str(), message_style(state.status)),
        Line::raw(""),
    ];

    // The input control disappears once the game is over.
    if !state.status.is_over() {
        lines.push(Line::from(vec![
            Span::raw("Your guess: "),
            Span::styled(
                state.input.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("_"),
        ]));
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw(format!("Attempts Left: {}", state.attempts_left)));
    Paragraph::new(lines)
}

fn message_style(status: GameStatus) -> Style {
    match status {
        GameStatus::Won => Style::default().fg(Color::Green),
        GameStatus::Lost => Style::default().fg(Color::Red),
        GameStatus::InProgress => Style::default(),
    }
}

fn footer_hint(state: &GameState) -> &'static str {
    if state.status.is_over() {
        "🔁 r: restart  |  Esc: quit"
    } else {
        "Enter: guess  |  Backspace: erase  |  Esc: quit"
    }
}
