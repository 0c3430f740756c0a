//! Snake on a discrete grid.
//!
//! The simulation lives in [`game::GameEngine`]; everything under
//! [`renderer`], [`ui`] and [`terminal_runtime`] is a terminal adapter that
//! only reads engine state and forwards input.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
