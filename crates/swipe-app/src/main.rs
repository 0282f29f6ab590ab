use log::{error, info};
use swipe_app::{
    AppConfig, GameLoop, NoopPreview, PreviewMode, PreviewSink, ShutdownToken, StatsPreview,
    gesture_slot, spawn_inference,
};
use swipe_base::{init_stdout_logger, log_fatal};
use swipe_vision::GestureClassifier;

#[cfg(feature = "v4l2")]
fn open_camera(config: &AppConfig) -> swipe_camera::V4l2Camera {
    match swipe_camera::V4l2Camera::new(config.camera.clone()) {
        Ok(camera) => {
            info!("camera ready on {}", config.camera.device);
            camera
        }
        Err(err) => log_fatal!("cannot open camera {}: {err}", config.camera.device),
    }
}

#[cfg(not(feature = "v4l2"))]
fn open_camera(config: &AppConfig) -> swipe_camera::SyntheticCamera {
    info!("no capture backend enabled, using the synthetic camera");
    swipe_camera::SyntheticCamera::new(config.camera.clone()).with_velocity(9.0, 0.0)
}

fn main() {
    init_stdout_logger();

    let config = AppConfig::default();
    info!(
        "starting swipe snake: {}x{} grid, {}x{} frames",
        config.game.grid_width, config.game.grid_height, config.camera.width, config.camera.height,
    );

    let camera = open_camera(&config);
    let classifier = GestureClassifier::new(config.classifier.clone());
    let (publisher, reader) = gesture_slot();
    let stop = ShutdownToken::new();

    let mut game_loop = match GameLoop::new(&config, reader, stop.clone()) {
        Ok(game_loop) => game_loop,
        Err(err) => log_fatal!("cannot create game window: {err}"),
    };

    let preview: Box<dyn PreviewSink + Send> = match config.preview {
        PreviewMode::Disabled => Box::new(NoopPreview),
        PreviewMode::Stats => Box::new(StatsPreview::new(30)),
    };
    let inference = spawn_inference(
        camera,
        classifier,
        publisher,
        preview,
        stop.clone(),
        config.infer_interval,
    );

    if let Err(err) = game_loop.run() {
        error!("game loop failed: {err}");
    }

    stop.stop();
    inference.join();
    info!("shutdown complete");
}
