use log::warn;
use rand::Rng;

use crate::board::Board;
use crate::snake::{Point, SnakeBody};

/// Uniform integer source used for food placement.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..upper`. `upper` is never 0.
    fn next_below(&mut self, upper: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper)
    }
}

/// Picks a new food cell.
///
/// Candidates are drawn (x first, then y) until one shares neither its column
/// nor its row with `current` and is not on `body`. After `max_attempts`
/// draws a row-major scan takes over: first with the same rule, then with any
/// free cell other than `current`. Returns `None` when the body covers every
/// cell.
pub fn place_food<R: RandomSource + ?Sized>(
    source: &mut R,
    board: Board,
    current: Point,
    body: &SnakeBody,
    max_attempts: u32,
) -> Option<Point> {
    let accepts = |candidate: Point| {
        candidate.x != current.x && candidate.y != current.y && !body.occupies(candidate)
    };

    for _ in 0..max_attempts {
        let candidate = Point::new(
            source.next_below(board.width()),
            source.next_below(board.height()),
        );
        if accepts(candidate) {
            return Some(candidate);
        }
    }

    warn!(
        "food placement gave up sampling after {max_attempts} draws on a {}x{} board with {} segments",
        board.width(),
        board.height(),
        body.len()
    );

    board.cells().find(|&cell| accepts(cell)).or_else(|| {
        board
            .cells()
            .find(|&cell| cell != current && !body.occupies(cell))
    })
}
