/// Configuration for camera capture.
///
/// The gesture pipeline assumes the default 640x480 capture size; other
/// sizes work, but the classifier's pixel thresholds are tuned for it.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// Device path for hardware backends (e.g., "/dev/video0").
    pub device: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Capture buffers queued between the stream and the caller.
    pub buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Pixel count of one frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Shape of the RGB frame tensors this camera produces.
    pub fn frame_shape(&self) -> Vec<usize> {
        vec![self.height as usize, self.width as usize, 3]
    }
}
