//! Camera capture abstraction for the swipe gesture pipeline.
//!
//! This crate provides a unified `Camera` trait for async frame capture,
//! a V4L2 backend for real hardware, and a synthetic backend that renders
//! a moving colored blob for demos and tests without a device.

pub mod config;
pub mod convert;
pub mod error;
pub mod synthetic;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use synthetic::SyntheticCamera;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
