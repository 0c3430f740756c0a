use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::{BASE_TICK_INTERVAL, MAX_PLACEMENT_ATTEMPTS, POINTS_PER_SPEED_LEVEL};
use crate::error::EngineError;
use crate::food::{RandomSource, place_food};
use crate::input::Direction;
use crate::snake::{Point, SnakeBody};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Reset, waiting for [`GameEngine::play_new`].
    New,
    Playing,
    /// Terminal until reset.
    Lost,
    /// The body covers the board; terminal until reset.
    Won,
}

/// What ended a lost game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LossReason {
    Wall,
    SelfCollision,
}

/// Number of ticks per executed step at `speed`.
#[must_use]
pub fn base_interval(speed: u32) -> u32 {
    BASE_TICK_INTERVAL
        .saturating_sub(speed.saturating_sub(1))
        .max(1)
}

/// Complete mutable state for one game session.
///
/// The engine only advances through [`GameEngine::tick`]; it never reads the
/// clock, so a driver controls pace purely by call count.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    status: GameStatus,
    board: Board,
    score: u32,
    speed: u32,
    throttle_counter: u32,
    steps: u64,
    food: Point,
    body: SnakeBody,
    direction: Direction,
    last_moved: Direction,
    elongate: bool,
    loss_reason: Option<LossReason>,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine with an entropy-seeded food source.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Creates an engine drawing food positions from `rng`. The engine starts
    /// in [`GameStatus::New`].
    pub fn with_rng(width: u32, height: u32, rng: R) -> Result<Self, EngineError> {
        let board = Board::new(width, height)?;
        let (food, body) = starting_layout(board);

        Ok(Self {
            status: GameStatus::New,
            board,
            score: 0,
            speed: 1,
            throttle_counter: 0,
            steps: 0,
            food,
            body,
            direction: Direction::Right,
            last_moved: Direction::Right,
            elongate: false,
            loss_reason: None,
            rng,
        })
    }

    /// Resets every mutable field to the starting layout and enters
    /// [`GameStatus::New`].
    pub fn new_game(&mut self) {
        let (food, body) = starting_layout(self.board);

        self.status = GameStatus::New;
        self.score = 0;
        self.speed = 1;
        self.throttle_counter = 0;
        self.steps = 0;
        self.food = food;
        self.body = body;
        self.direction = Direction::Right;
        self.last_moved = Direction::Right;
        self.elongate = false;
        self.loss_reason = None;

        info!(
            "new game on {}x{} board",
            self.board.width(),
            self.board.height()
        );
    }

    /// Resets like [`GameEngine::new_game`] and starts playing immediately.
    pub fn play_new(&mut self) {
        self.new_game();
        self.status = GameStatus::Playing;
        info!("playing");
    }

    /// Requests a new heading for the next step.
    ///
    /// Silently ignored when `direction` matches or reverses either the
    /// pending direction or the direction of the last executed step.
    pub fn update_direction(&mut self, direction: Direction) {
        if direction == self.direction
            || direction.is_opposite(self.direction)
            || direction == self.last_moved
            || direction.is_opposite(self.last_moved)
        {
            return;
        }

        self.direction = direction;
    }

    /// Registers one driver tick and returns the resulting status.
    ///
    /// Outside [`GameStatus::Playing`] this changes nothing. While playing, a
    /// step executes once every [`base_interval`] ticks.
    pub fn tick(&mut self) -> GameStatus {
        if self.status != GameStatus::Playing {
            return self.status;
        }

        self.throttle_counter += 1;
        if self.throttle_counter < base_interval(self.speed) {
            return self.status;
        }
        self.throttle_counter = 0;

        self.step();
        self.status
    }

    fn step(&mut self) {
        let next = self
            .body
            .head()
            .step(self.direction)
            .filter(|&next| self.board.contains(next));

        let Some(next) = next else {
            self.lose(LossReason::Wall);
            return;
        };
        if self.body.occupies(next) {
            self.lose(LossReason::SelfCollision);
            return;
        }

        self.body.push_head(next);
        self.last_moved = self.direction;
        if !self.elongate {
            self.body.drop_tail();
        }
        self.elongate = false;
        self.steps += 1;
        trace!("step {} head at ({}, {})", self.steps, next.x, next.y);

        if next == self.food {
            self.eat();
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        if self.score % POINTS_PER_SPEED_LEVEL == 0 {
            self.speed += 1;
            debug!("speed increased to {}", self.speed);
        }
        self.elongate = true;
        debug!("food eaten, score {}", self.score);

        match place_food(
            &mut self.rng,
            self.board,
            self.food,
            &self.body,
            MAX_PLACEMENT_ATTEMPTS,
        ) {
            Some(food) => self.food = food,
            None => {
                self.status = GameStatus::Won;
                info!("board filled with score {}", self.score);
            }
        }
    }

    fn lose(&mut self, reason: LossReason) {
        self.status = GameStatus::Lost;
        self.loss_reason = Some(reason);
        info!("game lost ({reason:?}) with score {}", self.score);
    }
}

impl<R> GameEngine<R> {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.board.height()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Ticks per step at the current speed.
    #[must_use]
    pub fn base_interval(&self) -> u32 {
        base_interval(self.speed)
    }

    /// Ticks counted since the last executed step.
    #[must_use]
    pub fn throttle_counter(&self) -> u32 {
        self.throttle_counter
    }

    /// Steps executed since the last reset.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn food_location(&self) -> Point {
        self.food
    }

    /// Read-only view of the body, head first.
    #[must_use]
    pub fn snake_body(&self) -> &SnakeBody {
        &self.body
    }

    /// The direction the next step will take.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction taken by the most recent step.
    #[must_use]
    pub fn last_moved_direction(&self) -> Direction {
        self.last_moved
    }

    /// Set when the game is [`GameStatus::Lost`].
    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        self.loss_reason
    }
}

fn starting_layout(board: Board) -> (Point, SnakeBody) {
    let row = board.height() / 2;
    let head_x = board.width() / 4;
    let food = Point::new(board.width() - board.width().div_ceil(4), row);
    let body = SnakeBody::from_segments([Point::new(head_x, row), Point::new(head_x - 1, row)]);

    (food, body)
}
