//! Core engine for the Chameleon party game helper.
//!
//! Provides the built-in topic catalog, six- and eight-sided dice with
//! per-face roll statistics, and the session engine that picks a topic,
//! lays sixteen of its items into the grid and rolls the coordinate dice.

pub mod catalog;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod state;

pub use catalog::{Catalog, GRID_CELLS, GRID_SIDE, Topic};
pub use config::GameConfig;
pub use dice::{Die, DieStats};
pub use error::{GameError, GameResult};
pub use game::ChameleonGame;
pub use state::SessionState;
