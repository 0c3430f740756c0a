use std::collections::VecDeque;

use crate::input::Direction;

/// Grid cell in logical coordinates. Both axes start at 0.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step towards `direction`, or `None`
    /// when the step would leave the non-negative quadrant.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (x, y) = match direction {
            Direction::Up => (Some(self.x), self.y.checked_sub(1)),
            Direction::Down => (Some(self.x), self.y.checked_add(1)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
            Direction::Right => (self.x.checked_add(1), Some(self.y)),
        };

        Some(Self { x: x?, y: y? })
    }
}

/// Cells occupied by the snake, head first and tail last.
///
/// Mutation is crate-private; outside the crate this is a read-only view.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeBody {
    segments: VecDeque<Point>,
}

impl SnakeBody {
    /// Creates a body from explicit segments (front is head).
    pub(crate) fn from_segments(segments: impl IntoIterator<Item = Point>) -> Self {
        let segments: VecDeque<Point> = segments.into_iter().collect();
        debug_assert!(!segments.is_empty());

        Self { segments }
    }

    /// Prepends a new head.
    pub(crate) fn push_head(&mut self, head: Point) {
        self.segments.push_front(head);
    }

    /// Drops the tail segment.
    pub(crate) fn drop_tail(&mut self) {
        let _ = self.segments.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Point {
        self.segments.front().copied().unwrap_or_default()
    }

    /// Returns true if any segment occupies `point`.
    #[must_use]
    pub fn occupies(&self, point: Point) -> bool {
        self.segments.contains(&point)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// Copies the segments out, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Point> {
        self.segments.iter().copied().collect()
    }
}
