use std::time::Instant;

use log::{debug, info};
use minifb::{Key, Window, WindowOptions};
use swipe_snake::SnakeGame;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::render::Renderer;
use crate::shutdown::ShutdownToken;
use crate::slot::GestureReader;

/// The main-thread loop: window, input, simulation pacing, rendering.
///
/// Runs synchronously and never blocks on the inference thread; gestures
/// arrive through the non-blocking slot reader. The window update rate is
/// capped at roughly 60 Hz while the simulation steps at the game's own
/// speed.
pub struct GameLoop {
    window: Window,
    renderer: Renderer,
    game: SnakeGame,
    gestures: GestureReader,
    stop: ShutdownToken,
    last_step: Instant,
}

impl GameLoop {
    pub fn new(
        config: &AppConfig,
        gestures: GestureReader,
        stop: ShutdownToken,
    ) -> Result<Self, AppError> {
        let renderer = Renderer::new(&config.game);
        let (width, height) = renderer.size();
        let mut window = Window::new(
            "Swipe Snake - swipe to steer, ESC to exit",
            width,
            height,
            WindowOptions::default(),
        )?;
        window.set_target_fps(60);

        Ok(Self {
            window,
            renderer,
            game: SnakeGame::new(config.game.clone()),
            gestures,
            stop,
            last_step: Instant::now(),
        })
    }

    /// Run until the window closes, Escape is pressed, or the stop token
    /// is set elsewhere. Sets the stop token on exit so the inference
    /// thread winds down too.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("game loop started");

        while self.window.is_open()
            && !self.window.is_key_down(Key::Escape)
            && !self.stop.is_stopped()
        {
            if let Some(gesture) = self.gestures.latest() {
                debug!("gesture: {gesture}");
                self.game.maybe_restart(gesture);
                self.game.apply_direction(gesture);
            }

            if self.last_step.elapsed().as_secs_f64() >= 1.0 / self.game.current_speed() {
                self.game.step();
                self.last_step = Instant::now();
            }

            self.renderer.render(&self.game);
            let (width, height) = self.renderer.size();
            self.window
                .update_with_buffer(self.renderer.buffer(), width, height)?;
        }

        self.stop.stop();
        info!("game loop stopped at score {}", self.game.score());
        Ok(())
    }
}
