//! Results screen shown after the countdown ends.

use super::screen_frame::{center_rows, draw_footer, draw_screen_frame};
use guess_the_word::ScoreSummary;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Enter]", "Play again"), ("[Q]", "Quit")];

pub fn render_score_scene(frame: &mut Frame, area: Rect, summary: &ScoreSummary) {
    let score_color = match summary.final_score {
        s if s > 0 => Color::Green,
        0 => Color::Yellow,
        _ => Color::Red,
    };

    let areas = draw_screen_frame(frame, area, " Final Score ", score_color, 0);

    let lines = vec![
        Line::from(Span::styled(
            "Time's up!",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            summary.final_score.to_string(),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} correct, {} skipped, {} words seen",
            summary.correct, summary.skipped, summary.words_shown
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center_rows(areas.body, 5),
    );

    draw_footer(frame, areas.footer, None, CONTROLS);
}
