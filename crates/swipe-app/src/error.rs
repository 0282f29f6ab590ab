use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Window creation or buffer update failed.
    Window(String),
    /// The async runtime for the inference thread could not be built.
    Runtime(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Window(msg) => write!(f, "window error: {msg}"),
            AppError::Runtime(msg) => write!(f, "runtime error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<minifb::Error> for AppError {
    fn from(err: minifb::Error) -> Self {
        AppError::Window(err.to_string())
    }
}
