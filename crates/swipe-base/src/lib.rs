pub mod logging;
pub mod tensor;
pub mod vec2;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};
pub use vec2::Vec2;

// Re-export log so downstream crates can use swipe_base::log::*
pub use log;
