use std::collections::VecDeque;

use log::{debug, info};
use swipe_base::{Tensor, Vec2};

use crate::annotate;
use crate::blob;
use crate::color::{self, ColorRange, Hsv};
use crate::morphology;
use crate::types::Gesture;

/// Opening iterations applied to the segmentation mask.
const OPEN_ITERATIONS: usize = 2;

/// Minimum tracked points before a swipe decision is attempted.
const MIN_DECISION_POINTS: usize = 5;

const MARKER_COLOR: [u8; 3] = [255, 255, 0];
const LABEL_COLOR: [u8; 3] = [0, 255, 0];

/// Tuning for the gesture pipeline. All values are fixed for the lifetime
/// of a classifier; defaults track a green glove/object and were carried
/// over from field-tuned values.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub lower_hsv: Hsv,
    pub upper_hsv: Hsv,
    /// Displacement across the history window needed to count as a swipe.
    pub min_motion_px: i32,
    /// Frames blocked after a gesture fires (debounces one long swipe).
    pub cooldown_frames: u32,
    pub history_capacity: usize,
    /// Blobs with a smaller enclosing circle are noise, not the object.
    pub min_radius_px: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            lower_hsv: Hsv::new(35, 60, 60),
            upper_hsv: Hsv::new(85, 255, 255),
            min_motion_px: 40,
            cooldown_frames: 6,
            history_capacity: 10,
            min_radius_px: 10.0,
        }
    }
}

impl ClassifierConfig {
    pub fn with_color_range(mut self, lower: Hsv, upper: Hsv) -> Self {
        self.lower_hsv = lower;
        self.upper_hsv = upper;
        self
    }

    pub fn with_min_motion_px(mut self, px: i32) -> Self {
        self.min_motion_px = px;
        self
    }

    pub fn with_cooldown_frames(mut self, frames: u32) -> Self {
        self.cooldown_frames = frames;
        self
    }
}

/// Swipe decision from a stream of centroid observations.
///
/// Holds the bounded motion history (newest first) and the cooldown
/// counter. Split out from the frame pipeline so the decision logic can be
/// driven with synthetic centroid sequences.
pub struct MotionClassifier {
    min_motion_px: i32,
    cooldown_frames: u32,
    history_capacity: usize,
    history: VecDeque<Vec2<i32>>,
    cooldown: u32,
}

impl MotionClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            min_motion_px: config.min_motion_px,
            cooldown_frames: config.cooldown_frames,
            history_capacity: config.history_capacity,
            history: VecDeque::with_capacity(config.history_capacity),
            cooldown: 0,
        }
    }

    /// Feed one frame's observation (a qualifying centroid, or none) and
    /// return the gesture decided this frame.
    ///
    /// Ordering is load-bearing and must stay exactly as written: record,
    /// decide, reset cooldown on fire, then decrement. A frame that fires
    /// therefore ends with the counter at `cooldown_frames - 1`, which sets
    /// the debounce window downstream relies on.
    pub fn observe(&mut self, centroid: Option<Vec2<i32>>) -> Option<Gesture> {
        if let Some(c) = centroid {
            self.history.push_front(c);
            self.history.truncate(self.history_capacity);
        }

        let mut gesture = None;
        if self.history.len() >= MIN_DECISION_POINTS && self.cooldown == 0 {
            gesture = self.decide();
            if gesture.is_some() {
                self.cooldown = self.cooldown_frames;
            }
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }

        gesture
    }

    /// Displacement of the newest tracked point against the oldest.
    ///
    /// The horizontal branch is evaluated first; both comparisons are
    /// strict, so an exact `|dx| == |dy|` tie falls through to the
    /// vertical branch.
    fn decide(&self) -> Option<Gesture> {
        let newest = self.history.front()?;
        let oldest = self.history.back()?;
        let dx = newest.x - oldest.x;
        let dy = newest.y - oldest.y;

        if dx.abs() > dy.abs() && dx.abs() > self.min_motion_px {
            Some(if dx > 0 { Gesture::Right } else { Gesture::Left })
        } else if dy.abs() > self.min_motion_px {
            Some(if dy > 0 { Gesture::Down } else { Gesture::Up })
        } else {
            None
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown
    }
}

/// Full per-frame gesture pipeline.
///
/// `process` never fails: frames with no qualifying blob (nothing in the
/// color window, or only noise below the radius threshold, or a degenerate
/// zero-area region) simply contribute no observation.
pub struct GestureClassifier {
    range: ColorRange,
    min_radius_px: f64,
    motion: MotionClassifier,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            range: ColorRange::new(config.lower_hsv, config.upper_hsv),
            min_radius_px: config.min_radius_px,
            motion: MotionClassifier::new(&config),
        }
    }

    /// Run the pipeline on one RGB frame.
    ///
    /// Returns the gesture decided this frame (if any) and an annotated
    /// copy of the mirrored frame: enclosing circle and centroid marker
    /// when a qualifying blob was found, gesture label when one fired.
    pub fn process(&mut self, frame: &Tensor<u8>) -> (Option<Gesture>, Tensor<u8>) {
        // The mirrored frame is the basis for detection and annotation, so
        // motion reads naturally for a user facing the camera.
        let mut annotated = annotate::mirror_horizontal(frame);

        let mask = morphology::open(&color::mask_in_range(&annotated, &self.range), OPEN_ITERATIONS);

        let detection = blob::largest_blob(&mask).filter(|b| b.radius > self.min_radius_px);

        if let Some(b) = &detection {
            debug!(
                "blob at ({}, {}) r={:.1} area={}",
                b.centroid.x, b.centroid.y, b.radius, b.area
            );
            annotate::draw_circle(&mut annotated, b.circle_center, b.radius, MARKER_COLOR);
            annotate::draw_disc(&mut annotated, b.centroid, 5, MARKER_COLOR);
        }

        let gesture = self.motion.observe(detection.map(|b| b.centroid));

        if let Some(g) = gesture {
            info!("gesture detected: {g}");
            annotate::draw_label(
                &mut annotated,
                &format!("GESTURE: {}", g.label()),
                10,
                20,
                LABEL_COLOR,
            );
        }

        (gesture, annotated)
    }

    pub fn history_len(&self) -> usize {
        self.motion.history_len()
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.motion.cooldown_remaining()
    }
}
