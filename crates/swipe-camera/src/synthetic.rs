use crate::{Camera, CameraConfig, CameraError};
use swipe_base::Tensor;

/// Default blob color. Sits inside the classifier's default HSV window
/// (green glove) so the full pipeline works against this backend.
const BLOB_RGB: [u8; 3] = [60, 200, 80];
const BACKGROUND_RGB: [u8; 3] = [40, 40, 40];

/// Camera backend that renders a colored disc sweeping across the frame.
///
/// Stands in for real hardware in demos and end-to-end tests: every `recv`
/// draws the disc at its current position and then advances it by the
/// configured per-frame velocity, bouncing off the frame edges.
pub struct SyntheticCamera {
    config: CameraConfig,
    cx: f64,
    cy: f64,
    vx: f64,
    vy: f64,
    radius: f64,
}

impl SyntheticCamera {
    pub fn new(config: CameraConfig) -> Self {
        let cy = config.height as f64 / 2.0;
        Self {
            config,
            cx: 80.0,
            cy,
            vx: 14.0,
            vy: 0.0,
            radius: 30.0,
        }
    }

    /// Set the per-frame velocity in pixels.
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Place the disc center directly (useful for scripted test motion).
    pub fn with_position(mut self, cx: f64, cy: f64) -> Self {
        self.cx = cx;
        self.cy = cy;
        self
    }

    fn draw(&self) -> Result<Tensor<u8>, CameraError> {
        let w = self.config.width as usize;
        let h = self.config.height as usize;
        let mut data = Vec::with_capacity(w * h * 3);
        let r2 = self.radius * self.radius;

        for y in 0..h {
            for x in 0..w {
                let dx = x as f64 - self.cx;
                let dy = y as f64 - self.cy;
                if dx * dx + dy * dy <= r2 {
                    data.extend_from_slice(&BLOB_RGB);
                } else {
                    data.extend_from_slice(&BACKGROUND_RGB);
                }
            }
        }

        Ok(Tensor::new(vec![h, w, 3], data)?)
    }

    fn advance(&mut self) {
        self.cx += self.vx;
        self.cy += self.vy;

        let (w, h) = (self.config.width as f64, self.config.height as f64);
        if self.cx < self.radius || self.cx > w - self.radius {
            self.vx = -self.vx;
            self.cx = self.cx.clamp(self.radius, w - self.radius);
        }
        if self.cy < self.radius || self.cy > h - self.radius {
            self.vy = -self.vy;
            self.cy = self.cy.clamp(self.radius, h - self.radius);
        }
    }
}

impl Camera for SyntheticCamera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        let frame = self.draw()?;
        self.advance();
        Ok(frame)
    }
}
