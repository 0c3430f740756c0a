use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_BODY, Theme};
use crate::game::{GameEngine, GameStatus};
use crate::snake::Point;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns per board cell; keeps cells roughly square.
const CELL_COLUMNS: u16 = 2;

/// Renders the full frame from immutable engine state.
pub fn render<R>(frame: &mut Frame<'_>, engine: &GameEngine<R>, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, engine, theme);
    let board_area = board_rect(play_area, engine.width(), engine.height());

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, engine.food_location(), theme);
    render_snake(frame, inner, engine, theme);

    match engine.status() {
        GameStatus::New => render_start_menu(frame, board_area, theme),
        GameStatus::Lost | GameStatus::Won => render_game_over_menu(
            frame,
            board_area,
            engine.score(),
            engine.loss_reason(),
        ),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Point, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake<R>(frame: &mut Frame<'_>, inner: Rect, engine: &GameEngine<R>, theme: &Theme) {
    let glyph = GLYPH_SNAKE_BODY.repeat(usize::from(CELL_COLUMNS));
    let head = engine.snake_body().head();

    let buffer = frame.buffer_mut();
    for segment in engine.snake_body().segments() {
        let Some((x, y)) = cell_to_terminal(inner, segment) else {
            continue;
        };

        let color = if segment == head {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, &glyph, Style::new().fg(color));
    }
}

/// Centers a bordered board of `width` x `height` cells inside `area`,
/// clipped to the area.
fn board_rect(area: Rect, width: u32, height: u32) -> Rect {
    let wanted_width = u16::try_from(width)
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2);
    let wanted_height = u16::try_from(height)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let board_width = wanted_width.min(area.width);
    let board_height = wanted_height.min(area.height);

    Rect {
        x: area.x + (area.width - board_width) / 2,
        y: area.y + (area.height - board_height) / 2,
        width: board_width,
        height: board_height,
    }
}

/// Maps a board cell to the terminal position of its left column, or `None`
/// when the cell does not fit in `inner`.
fn cell_to_terminal(inner: Rect, point: Point) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(point.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(point.y).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::snake::Point;

    use super::{board_rect, cell_to_terminal};

    #[test]
    fn board_is_centered_with_border() {
        let area = Rect::new(0, 1, 60, 30);
        let board = board_rect(area, 20, 20);

        assert_eq!(board, Rect::new(9, 5, 42, 22));
    }

    #[test]
    fn board_is_clipped_to_small_terminals() {
        let area = Rect::new(0, 0, 10, 5);
        let board = board_rect(area, 20, 20);

        assert_eq!(board, area);
    }

    #[test]
    fn cells_map_to_double_columns() {
        let inner = Rect::new(10, 5, 40, 20);

        assert_eq!(cell_to_terminal(inner, Point::new(0, 0)), Some((10, 5)));
        assert_eq!(cell_to_terminal(inner, Point::new(3, 2)), Some((16, 7)));
        assert_eq!(cell_to_terminal(inner, Point::new(19, 19)), Some((48, 24)));
        assert_eq!(cell_to_terminal(inner, Point::new(20, 0)), None);
        assert_eq!(cell_to_terminal(inner, Point::new(0, 20)), None);
    }
}
