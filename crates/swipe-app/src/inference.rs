use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use swipe_camera::Camera;
use swipe_vision::GestureClassifier;

use crate::preview::PreviewSink;
use crate::shutdown::ShutdownToken;
use crate::slot::GesturePublisher;

/// Handle to the running inference thread.
pub struct InferenceHandle {
    thread: Option<thread::JoinHandle<()>>,
}

impl InferenceHandle {
    /// Wait for the inference thread to exit. Call after setting the stop
    /// token; the thread notices within one frame acquisition.
    pub fn join(mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                error!("inference thread panicked");
            }
        }
    }
}

impl Drop for InferenceHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Start the inference loop on its own thread.
///
/// The thread owns the camera and classifier outright and hosts a
/// current-thread tokio runtime for the async camera reads. Each cycle it
/// reads a frame, classifies it, publishes the result (gesture or not) into
/// the slot, hands the annotated frame to the preview sink, and sleeps
/// `interval`. A failed read logs a warning and skips the cycle; the loop
/// survives any number of consecutive failures.
pub fn spawn_inference<C, P>(
    camera: C,
    classifier: GestureClassifier,
    publisher: GesturePublisher,
    preview: P,
    stop: ShutdownToken,
    interval: Duration,
) -> InferenceHandle
where
    C: Camera + Send + 'static,
    P: PreviewSink + Send + 'static,
{
    let thread = thread::Builder::new()
        .name("inference".into())
        .spawn(move || run(camera, classifier, publisher, preview, stop, interval));

    match thread {
        Ok(handle) => InferenceHandle {
            thread: Some(handle),
        },
        Err(err) => {
            error!("failed to spawn inference thread: {err}");
            InferenceHandle { thread: None }
        }
    }
}

fn run<C, P>(
    mut camera: C,
    mut classifier: GestureClassifier,
    publisher: GesturePublisher,
    mut preview: P,
    stop: ShutdownToken,
    interval: Duration,
) where
    C: Camera,
    P: PreviewSink,
{
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to build inference runtime: {err}");
            return;
        }
    };

    info!("inference loop started");

    runtime.block_on(async {
        while !stop.is_stopped() {
            match camera.recv().await {
                Ok(frame) => {
                    let (gesture, annotated) = classifier.process(&frame);
                    publisher.publish(gesture);
                    preview.show(&annotated);
                }
                Err(err) => {
                    warn!("frame read failed, skipping cycle: {err}");
                }
            }
            tokio::time::sleep(interval).await;
        }
    });

    info!("inference loop stopped");
}
