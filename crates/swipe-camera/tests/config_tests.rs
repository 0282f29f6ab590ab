use swipe_camera::CameraConfig;

#[test]
fn default_is_vga_at_30fps() {
    let cfg = CameraConfig::default();
    assert_eq!(cfg.width, 640);
    assert_eq!(cfg.height, 480);
    assert_eq!(cfg.fps, 30);
    assert_eq!(cfg.device, "/dev/video0");
}

#[test]
fn builders_override_fields() {
    let cfg = CameraConfig::default()
        .with_device("/dev/video2")
        .with_size(1280, 720)
        .with_fps(60);
    assert_eq!(cfg.device, "/dev/video2");
    assert_eq!(cfg.width, 1280);
    assert_eq!(cfg.height, 720);
    assert_eq!(cfg.fps, 60);
}

#[test]
fn frame_shape_is_hwc() {
    let cfg = CameraConfig::default();
    assert_eq!(cfg.frame_shape(), vec![480, 640, 3]);
    assert_eq!(cfg.pixel_count(), 640 * 480);
}
