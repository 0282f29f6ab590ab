use log::{debug, info};
use rand::Rng;
use swipe_vision::Gesture;

use crate::config::GameConfig;
use crate::state::{Direction, Position, Snake};

/// The gesture-driven snake game.
///
/// The caller owns the pacing: it forwards gestures as they arrive and
/// calls [`step`](Self::step) whenever `1.0 / current_speed()` seconds of
/// wall time have passed.
pub struct SnakeGame {
    config: GameConfig,
    snake: Snake,
    food: Position,
    score: u32,
    alive: bool,
    rng: rand::rngs::ThreadRng,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Self::starting_snake(&config);
        let food = Self::spawn_food(&config, &snake, &mut rng);
        Self {
            config,
            snake,
            food,
            score: 0,
            alive: true,
            rng,
        }
    }

    fn starting_snake(config: &GameConfig) -> Snake {
        let center = Position::new(config.grid_width / 2, config.grid_height / 2);
        Snake::new(center, Direction::Right, config.initial_snake_length)
    }

    fn spawn_food(config: &GameConfig, snake: &Snake, rng: &mut rand::rngs::ThreadRng) -> Position {
        loop {
            let pos = Position::new(
                rng.gen_range(0..config.grid_width),
                rng.gen_range(0..config.grid_height),
            );
            if !snake.body.contains(&pos) {
                return pos;
            }
        }
    }

    /// Steer the snake. 180-degree reversals are ignored so a single
    /// opposite swipe cannot fold the snake onto itself.
    pub fn apply_direction(&mut self, gesture: Gesture) {
        let dir = Direction::from(gesture);
        if !self.snake.direction.is_opposite(dir) {
            self.snake.direction = dir;
        }
    }

    /// Any directional gesture restarts a finished game. On a live game
    /// this is a no-op, so the caller can forward every gesture to both
    /// this and [`apply_direction`](Self::apply_direction) unconditionally.
    pub fn maybe_restart(&mut self, _gesture: Gesture) {
        if self.alive {
            return;
        }
        info!("restarting after game over (score {})", self.score);
        self.snake = Self::starting_snake(&self.config);
        self.food = Self::spawn_food(&self.config, &self.snake, &mut self.rng);
        self.score = 0;
        self.alive = true;
    }

    /// Advance the simulation one tile. Does nothing once the game is
    /// over; a restart gesture brings it back.
    pub fn step(&mut self) {
        if !self.alive {
            return;
        }

        let next = self.snake.head().moved_in(self.snake.direction);

        if !self.in_bounds(next) || self.snake.collides_with_body(next) {
            self.alive = false;
            info!("game over at score {}", self.score);
            return;
        }

        let ate = next == self.food;
        self.snake.advance(ate);

        if ate {
            self.score += 1;
            self.food = Self::spawn_food(&self.config, &self.snake, &mut self.rng);
            debug!("food eaten, score {} speed {:.1}", self.score, self.current_speed());
        }
    }

    /// Simulation steps per second, rising with the score.
    pub fn current_speed(&self) -> f64 {
        let speed = self.config.base_speed + self.config.speed_per_food * self.score as f64;
        speed.min(self.config.max_speed)
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.config.grid_width && pos.y >= 0 && pos.y < self.config.grid_height
    }

    // Accessors for rendering

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Test seam: place the food deterministically.
    #[doc(hidden)]
    pub fn set_food(&mut self, pos: Position) {
        self.food = pos;
    }
}
