//! The bordered frame both screens draw into, and its footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Narrowest word area kept before the side panel is dropped.
const MIN_BODY_WIDTH: u16 = 24;
const FOOTER_ROWS: u16 = 2;

/// Regions inside a screen's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub body: Rect,
    /// Present only when the terminal is wide enough.
    pub side: Option<Rect>,
    /// Full width, below both body and side.
    pub footer: Rect,
}

/// Splits the inside of the border: footer rows along the bottom, then an
/// optional `side_width` column on the right.
pub fn split_screen(inner: Rect, side_width: u16) -> ScreenAreas {
    let footer_rows = FOOTER_ROWS.min(inner.height);
    let top_height = inner.height - footer_rows;
    let footer = Rect {
        y: inner.y + top_height,
        height: footer_rows,
        ..inner
    };
    let top = Rect {
        height: top_height,
        ..inner
    };

    if side_width == 0 || top.width < side_width + MIN_BODY_WIDTH {
        return ScreenAreas {
            body: top,
            side: None,
            footer,
        };
    }

    let body_width = top.width - side_width;
    ScreenAreas {
        body: Rect {
            width: body_width,
            ..top
        },
        side: Some(Rect {
            x: top.x + body_width,
            width: side_width,
            ..top
        }),
        footer,
    }
}

/// Clears `area`, draws the titled border and returns the split inside it.
pub fn draw_screen_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    side_width: u16,
) -> ScreenAreas {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = border.inner(area);
    frame.render_widget(border, area);
    split_screen(inner, side_width)
}

/// `[key] action` hints separated by a dot.
pub fn controls_line(controls: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

/// Message on the first footer row, key hints on the last.
pub fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    message: Option<Span<'static>>,
    controls: &[(&'static str, &'static str)],
) {
    if area.height == 0 {
        return;
    }
    let hints_row = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
        hints_row,
    );

    if let (Some(message), true) = (message, area.height >= 2) {
        frame.render_widget(
            Paragraph::new(Line::from(message)).alignment(Alignment::Center),
            Rect { height: 1, ..area },
        );
    }
}

/// Vertically centers `height` rows inside `area`.
pub fn center_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_screen_gets_side_panel() {
        let areas = split_screen(Rect::new(1, 1, 78, 22), 22);
        assert_eq!(areas.body, Rect::new(1, 1, 56, 20));
        assert_eq!(areas.side, Some(Rect::new(57, 1, 22, 20)));
        assert_eq!(areas.footer, Rect::new(1, 21, 78, 2));
    }

    #[test]
    fn test_narrow_screen_drops_side_panel() {
        let areas = split_screen(Rect::new(0, 0, 40, 10), 22);
        assert_eq!(areas.side, None);
        assert_eq!(areas.body, Rect::new(0, 0, 40, 8));
        assert_eq!(areas.footer.width, 40);
    }

    #[test]
    fn test_short_screen_is_all_footer() {
        let areas = split_screen(Rect::new(0, 0, 80, 1), 0);
        assert_eq!(areas.body.height, 0);
        assert_eq!(areas.footer, Rect::new(0, 0, 80, 1));
    }

    #[test]
    fn test_controls_line_text() {
        let line = controls_line(&[("[Space]", "Got it"), ("[Q]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Space] Got it · [Q] Quit");
    }

    #[test]
    fn test_center_rows() {
        assert_eq!(center_rows(Rect::new(0, 2, 10, 10), 4), Rect::new(0, 5, 10, 4));
        assert_eq!(center_rows(Rect::new(0, 0, 10, 3), 5), Rect::new(0, 0, 10, 3));
    }
}
