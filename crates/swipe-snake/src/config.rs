/// Game tuning. Speed is in simulation steps per second; the caller paces
/// stepping against `SnakeGame::current_speed`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_snake_length: usize,
    pub base_speed: f64,
    /// Speed gained per food eaten.
    pub speed_per_food: f64,
    pub max_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 18,
            initial_snake_length: 3,
            base_speed: 6.0,
            speed_per_food: 0.5,
            max_speed: 15.0,
        }
    }
}

impl GameConfig {
    /// Small grid for tests.
    pub fn small() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            ..Self::default()
        }
    }
}
