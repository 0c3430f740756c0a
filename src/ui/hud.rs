use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameEngine;

const HUD_SEPARATOR: &str = " │ ";

/// Renders the status line above the play area and returns the area left
/// for the board.
#[must_use]
pub fn render_hud<R>(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &GameEngine<R>,
    theme: &Theme,
) -> Rect {
    let [status_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(
            engine.score(),
            engine.speed(),
            engine.snake_body().len(),
            theme,
        ))
        .alignment(Alignment::Left),
        status_area,
    );

    play_area
}

fn status_line(score: u32, speed: u32, length: usize, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.menu_footer);
    let value = Style::default()
        .fg(theme.hud_text)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(score.to_string(), value),
        Span::styled(HUD_SEPARATOR, label),
        Span::styled("Speed ", label),
        Span::styled(speed.to_string(), value),
        Span::styled(HUD_SEPARATOR, label),
        Span::styled("Length ", label),
        Span::styled(length.to_string(), value),
    ])
}
