use std::fmt;
use swipe_base::TensorError;

#[derive(Debug)]
pub enum CameraError {
    /// The device could not be opened or configured. Fatal: no retry.
    Device(String),
    /// A single capture-stream read failed. Transient: skip the cycle.
    Stream(String),
    /// The frame channel between capture thread and caller broke down.
    Channel(String),
    /// Raw pixel data could not be converted to an RGB frame.
    Convert(String),
    Tensor(TensorError),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
            CameraError::Convert(msg) => write!(f, "convert error: {msg}"),
            CameraError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<TensorError> for CameraError {
    fn from(err: TensorError) -> Self {
        CameraError::Tensor(err)
    }
}

#[cfg(feature = "v4l2")]
impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Stream(err.to_string())
    }
}
