//! Tile-based snake game consuming directional swipe gestures.
//!
//! The game is deliberately self-contained: it knows nothing about
//! cameras or classification, only about [`Gesture`](swipe_vision::Gesture)
//! values handed to it by its caller.

pub mod config;
pub mod game;
pub mod state;

pub use config::GameConfig;
pub use game::SnakeGame;
pub use state::{Direction, Position, Snake};
