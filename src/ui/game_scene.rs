//! In-round screen: the word to act out, score and countdown.

use super::screen_frame::{center_rows, draw_footer, draw_screen_frame};
use guess_the_word::{Buzz, GameState};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space]", "Got it"), ("[S]", "Skip"), ("[Q]", "Quit")];

pub fn render_game_scene<R: Rng>(frame: &mut Frame, area: Rect, game: &GameState<R>) {
    let accent = if game.in_panic() {
        Color::Red
    } else {
        Color::Cyan
    };
    let areas = draw_screen_frame(frame, area, " Guess the Word ", accent, 22);

    match areas.side {
        Some(side) => {
            render_word(frame, areas.body, game, false);
            render_info_panel(frame, side, game);
        }
        None => render_word(frame, areas.body, game, true),
    }

    let message = match game.buzz() {
        Buzz::Correct => Span::styled("Correct!", Style::default().fg(Color::Green)),
        Buzz::Panic => Span::styled(
            "Hurry up!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Buzz::GameOver => Span::styled("Time's up!", Style::default().fg(Color::Yellow)),
        Buzz::NoBuzz => Span::styled(
            "Act it out, no talking",
            Style::default().fg(Color::DarkGray),
        ),
    };
    draw_footer(frame, areas.footer, Some(message), CONTROLS);
}

fn render_word<R: Rng>(frame: &mut Frame, area: Rect, game: &GameState<R>, with_stats: bool) {
    // Nothing to show before the first word is drawn.
    let Some(word) = game.current_word() else {
        return;
    };

    let mut lines = Vec::with_capacity(5);
    if with_stats {
        lines.push(Line::from(format!(
            "{}  |  score {}",
            game.remaining_time_string(),
            game.score()
        )));
        lines.push(Line::from(""));
    }
    lines.extend([
        Line::from(Span::styled(
            "The word is...",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", word),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center_rows(area, height),
    );
}

fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, game: &GameState<R>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let time_color = if game.in_panic() {
        Color::Red
    } else {
        Color::White
    };
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Time:    ", label),
            Span::styled(
                game.remaining_time_string(),
                Style::default().fg(time_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Score:   ", label),
            Span::styled(
                game.score().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct: ", label),
            Span::styled(
                game.correct_count().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Skipped: ", label),
            Span::styled(
                game.skip_count().to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
