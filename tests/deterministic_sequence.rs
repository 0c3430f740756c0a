use std::collections::{HashSet, VecDeque};

use grid_snake::food::RandomSource;
use grid_snake::game::{GameEngine, GameStatus, LossReason};
use grid_snake::input::Direction;
use grid_snake::snake::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replays fixed draws so food placement is predictable.
struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, upper: u32) -> u32 {
        let value = self.values.pop_front().expect("script ran out of draws");
        assert!(value < upper, "scripted draw {value} out of 0..{upper}");
        value
    }
}

fn tick_times<R: RandomSource>(engine: &mut GameEngine<R>, times: usize) -> GameStatus {
    let mut status = engine.status();
    for _ in 0..times {
        status = engine.tick();
    }
    status
}

#[test]
fn heading_right_reaches_the_first_food() {
    // After the first meal the script offers (15, 4), which shares the old
    // column and is rejected, then (3, 4).
    let mut engine =
        GameEngine::with_rng(20, 20, ScriptedSource::new([15, 4, 3, 4])).expect("valid board");
    engine.play_new();

    assert_eq!(engine.snake_body().head(), Point::new(5, 10));
    assert_eq!(engine.food_location(), Point::new(15, 10));

    assert_eq!(tick_times(&mut engine, 99), GameStatus::Playing);
    assert_eq!(engine.snake_body().head(), Point::new(14, 10));
    assert_eq!(engine.score(), 0);

    assert_eq!(tick_times(&mut engine, 1), GameStatus::Playing);
    assert_eq!(engine.snake_body().head(), Point::new(15, 10));
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.speed(), 1);
    assert_eq!(engine.food_location(), Point::new(3, 4));
    assert_eq!(engine.snake_body().len(), 2);

    tick_times(&mut engine, 10);
    assert_eq!(engine.snake_body().len(), 3);
    assert_eq!(
        engine.snake_body().to_vec(),
        vec![Point::new(16, 10), Point::new(15, 10), Point::new(14, 10)]
    );
}

#[test]
fn running_into_the_top_wall_halts_the_game() {
    let mut engine = GameEngine::with_seed(20, 20, 11).expect("valid board");
    engine.play_new();
    engine.update_direction(Direction::Up);

    assert_eq!(tick_times(&mut engine, 100), GameStatus::Playing);
    assert_eq!(engine.snake_body().head(), Point::new(5, 0));

    assert_eq!(tick_times(&mut engine, 10), GameStatus::Lost);
    assert_eq!(engine.loss_reason(), Some(LossReason::Wall));

    let body = engine.snake_body().to_vec();
    assert_eq!(tick_times(&mut engine, 50), GameStatus::Lost);
    assert_eq!(engine.snake_body().to_vec(), body);
    assert_eq!(engine.food_location(), Point::new(15, 10));
}

#[test]
fn new_engine_waits_for_play_new() {
    let mut engine = GameEngine::with_seed(20, 20, 5).expect("valid board");

    assert_eq!(tick_times(&mut engine, 40), GameStatus::New);
    assert_eq!(engine.snake_body().head(), Point::new(5, 10));

    engine.play_new();
    assert_eq!(tick_times(&mut engine, 10), GameStatus::Playing);
    assert_eq!(engine.snake_body().head(), Point::new(6, 10));
}

#[test]
fn random_play_keeps_board_invariants() {
    let mut driver = StdRng::seed_from_u64(2024);

    for seed in 0..20 {
        let mut engine = GameEngine::with_seed(12, 9, seed).expect("valid board");
        engine.play_new();

        let mut previous_len = engine.snake_body().len();
        let mut previous_score = engine.score();
        let mut previous_speed = engine.speed();
        let mut previous_food = engine.food_location();

        for _ in 0..5_000 {
            if driver.gen_ratio(1, 8) {
                let direction = Direction::ALL[driver.gen_range(0..Direction::ALL.len())];
                engine.update_direction(direction);
            }
            let status = engine.tick();

            let body = engine.snake_body().to_vec();
            let food = engine.food_location();
            let unique: HashSet<Point> = body.iter().copied().collect();

            assert_eq!(unique.len(), body.len(), "body has duplicate cells");
            assert!(body.iter().all(|p| p.x < 12 && p.y < 9));
            assert!(food.x < 12 && food.y < 9);
            assert!(engine.throttle_counter() <= engine.base_interval());

            assert!(body.len() >= previous_len);
            assert!(body.len() <= previous_len + 1);
            assert!(engine.score() >= previous_score);
            assert!(engine.score() <= previous_score + 1);

            if status != GameStatus::Won {
                assert!(!unique.contains(&food), "food placed on the snake");
            }

            if engine.score() > previous_score && status != GameStatus::Won {
                assert_ne!(food.x, previous_food.x);
                assert_ne!(food.y, previous_food.y);
                let levelled = engine.score() % 5 == 0;
                assert_eq!(engine.speed(), previous_speed + u32::from(levelled));
            } else if engine.score() == previous_score {
                assert_eq!(food, previous_food);
                assert_eq!(engine.speed(), previous_speed);
            }

            previous_len = body.len();
            previous_score = engine.score();
            previous_speed = engine.speed();
            previous_food = food;

            if status != GameStatus::Playing {
                break;
            }
        }
    }
}
