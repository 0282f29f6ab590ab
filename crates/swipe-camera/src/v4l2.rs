use crate::convert::yuyv_to_rgb_frame;
use crate::{Camera, CameraConfig, CameraError};
use log::warn;
use std::thread::{self, JoinHandle};
use swipe_base::Tensor;
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// V4L2 camera implementation.
///
/// Opens the device eagerly in `new` (a device that cannot be opened is a
/// fatal condition for the caller) and lazily spawns a capture thread on the
/// first `recv`. The thread streams YUYV buffers, converts them to RGB frame
/// tensors, and forwards them over a bounded channel; a failed conversion or
/// stream read is forwarded as an `Err` frame so the caller can skip the
/// cycle without losing the stream.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("device", &"<v4l::Device>")
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("channel closed".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Dropping the receiver signals the capture thread to stop
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device` and negotiate YUYV at the
    /// requested resolution and frame rate.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, does
    /// not accept YUYV, or does not accept the requested size.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device.as_str())
            .map_err(|e| CameraError::Device(format!("open {}: {e}", config.device)))?;

        let mut format = Format::new(config.width, config.height, FourCC::new(b"YUYV"));
        format = Capture::set_format(&device, &format)
            .map_err(|e| CameraError::Device(e.to_string()))?;

        if format.fourcc != FourCC::new(b"YUYV") {
            return Err(CameraError::Device(
                "YUYV format not supported by device".to_string(),
            ));
        }
        if format.width != config.width || format.height != config.height {
            return Err(CameraError::Device(format!(
                "device refused {}x{}, offered {}x{}",
                config.width, config.height, format.width, format.height
            )));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps);
        v4l::video::Capture::set_params(&device, &params)
            .map_err(|e| CameraError::Device(e.to_string()))?;

        Ok(Self {
            config,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count as usize;
        let (width, height) = (self.config.width, self.config.height);
        let (tx, rx) = mpsc::channel(buffer_count);

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, tx, buffer_count, width, height) {
                warn!("capture thread exited: {e}");
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop.
    fn capture_loop(
        device: Device,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
        width: u32,
        height: u32,
    ) -> Result<(), CameraError> {
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            let result = match CaptureStream::next(&mut stream) {
                // The mmap buffer is only valid until the next call, so the
                // conversion happens before the stream advances
                Ok((frame_data, _metadata)) => yuyv_to_rgb_frame(frame_data, width, height),
                Err(e) => Err(CameraError::Stream(e.to_string())),
            };

            if tx.blocking_send(result).is_err() {
                // Receiver dropped: camera released, exit thread
                break;
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}
