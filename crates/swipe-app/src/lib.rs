//! Gesture-controlled snake: wiring between camera, classifier and game.
//!
//! Two threads share exactly two things: a watch-backed gesture slot and an
//! atomic stop token. The inference thread owns the camera and classifier
//! and publishes every classification result; the main thread runs the
//! window, reads the slot without blocking, and paces the simulation.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod inference;
pub mod preview;
pub mod render;
pub mod shutdown;
pub mod slot;

pub use config::{AppConfig, PreviewMode};
pub use error::AppError;
pub use game_loop::GameLoop;
pub use inference::{InferenceHandle, spawn_inference};
pub use preview::{NoopPreview, PreviewSink, StatsPreview};
pub use render::Renderer;
pub use shutdown::ShutdownToken;
pub use slot::{GesturePublisher, GestureReader, gesture_slot};
