use crate::error::EngineError;
use crate::snake::Point;

/// Smallest width that fits the starting snake.
pub const MIN_BOARD_WIDTH: u32 = 4;

/// Logical grid dimensions, fixed for an engine's lifetime.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    width: u32,
    height: u32,
}

impl Board {
    /// Validates the dimensions and returns the board.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ZeroDimension { width, height });
        }
        if width < MIN_BOARD_WIDTH {
            return Err(EngineError::BoardTooNarrow { width });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Returns true when `point` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}
