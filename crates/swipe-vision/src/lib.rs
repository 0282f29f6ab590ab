//! Swipe-gesture inference from color frames.
//!
//! The pipeline turns one RGB frame into at most one directional gesture:
//! HSV segmentation against a configured color window, a morphological
//! opening to kill speckle, largest-blob selection with area moments and a
//! minimum enclosing circle, then a motion-history classifier with a
//! cooldown debounce. [`GestureClassifier::process`] runs the whole chain
//! and returns the gesture (if any) plus an annotated copy of the frame.

pub mod annotate;
pub mod blob;
pub mod classifier;
pub mod color;
pub mod morphology;
pub mod types;

pub use blob::{Blob, largest_blob, min_enclosing_circle};
pub use classifier::{ClassifierConfig, GestureClassifier, MotionClassifier};
pub use color::{ColorRange, Hsv, mask_in_range, rgb_to_hsv};
pub use morphology::{dilate, erode, open};
pub use types::Gesture;
