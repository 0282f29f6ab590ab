use std::time::Duration;
use swipe_camera::CameraConfig;
use swipe_snake::GameConfig;
use swipe_vision::ClassifierConfig;

/// Where annotated frames go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Drop annotated frames.
    #[default]
    Disabled,
    /// Log frame statistics at debug level.
    Stats,
}

/// Top-level application settings.
#[derive(Clone)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub classifier: ClassifierConfig,
    pub game: GameConfig,
    pub preview: PreviewMode,
    /// Pause between inference cycles, independent of the game frame rate.
    pub infer_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            camera: CameraConfig::default(),
            classifier: ClassifierConfig::default(),
            game: GameConfig::default(),
            preview: PreviewMode::Disabled,
            infer_interval: Duration::from_millis(30),
        }
    }

    pub fn with_preview(mut self, preview: PreviewMode) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_infer_interval(mut self, interval: Duration) -> Self {
        self.infer_interval = interval;
        self
    }
}
