use swipe_base::Tensor;
use swipe_vision::{ClassifierConfig, Gesture, GestureClassifier};

const W: usize = 200;
const H: usize = 120;
const GREEN: [u8; 3] = [60, 200, 80];
const GREY: [u8; 3] = [40, 40, 40];

/// Frame with a single colored disc on a neutral background.
fn frame_with_disc(cx: i32, cy: i32, radius: i32) -> Tensor<u8> {
    let mut data = Vec::with_capacity(W * H * 3);
    for y in 0..H as i32 {
        for x in 0..W as i32 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                data.extend_from_slice(&GREEN);
            } else {
                data.extend_from_slice(&GREY);
            }
        }
    }
    Tensor::new(vec![H, W, 3], data).unwrap()
}

fn empty_frame() -> Tensor<u8> {
    frame_with_disc(-100, -100, 1)
}

#[test]
fn empty_frames_yield_no_gesture_and_no_history() {
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    for _ in 0..10 {
        let (gesture, annotated) = c.process(&empty_frame());
        assert_eq!(gesture, None);
        assert_eq!(annotated.shape, vec![H, W, 3]);
    }
    assert_eq!(c.history_len(), 0);
}

#[test]
fn small_blobs_are_filtered_by_radius() {
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    // Radius 6 survives a 2-iteration opening but sits under the 10px
    // enclosing-circle threshold
    for x in [50, 70, 90, 110, 130] {
        let (gesture, _) = c.process(&frame_with_disc(x, 60, 6));
        assert_eq!(gesture, None);
    }
    assert_eq!(c.history_len(), 0);
}

#[test]
fn leftward_scene_motion_reads_as_right_swipe() {
    // The classifier mirrors frames, so a disc moving toward -x in camera
    // coordinates moves toward +x from the user's point of view
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    let mut result = None;
    for (i, x) in [160, 130, 100, 70, 40].into_iter().enumerate() {
        let (gesture, _) = c.process(&frame_with_disc(x, 60, 14));
        if gesture.is_some() {
            result = Some((i, gesture.unwrap()));
        }
    }
    assert_eq!(result, Some((4, Gesture::Right)));
    assert_eq!(c.cooldown_remaining(), 5);
}

#[test]
fn downward_motion_reads_as_down() {
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    let mut last = None;
    for y in [20, 35, 50, 65, 80] {
        let (gesture, _) = c.process(&frame_with_disc(100, y, 14));
        if gesture.is_some() {
            last = gesture;
        }
    }
    assert_eq!(last, Some(Gesture::Down));
}

#[test]
fn annotated_frame_marks_centroid() {
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    let (_, annotated) = c.process(&frame_with_disc(60, 60, 14));
    // Disc center in mirrored coordinates; centroid marker is yellow
    let mx = (W - 1 - 60, 60);
    assert_eq!(annotated.at(mx.0, mx.1, 0), 255);
    assert_eq!(annotated.at(mx.0, mx.1, 1), 255);
    assert_eq!(annotated.at(mx.0, mx.1, 2), 0);
}

#[test]
fn noise_speckles_do_not_move_the_centroid() {
    // A large blob plus scattered single green pixels: opening removes the
    // speckles, largest-blob selection keeps the real object
    let mut base = frame_with_disc(100, 60, 14);
    for (x, y) in [(5, 5), (190, 10), (10, 110), (180, 100)] {
        for (ch, v) in GREEN.iter().enumerate() {
            base.set(x, y, ch, *v);
        }
    }
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    let (_, annotated) = c.process(&base);
    assert_eq!(c.history_len(), 1);
    // Marker sits at the disc, not dragged toward any speckle
    assert_eq!(annotated.at(W - 1 - 100, 60, 0), 255);
}

#[test]
fn gesture_frame_carries_text_overlay() {
    let mut c = GestureClassifier::new(ClassifierConfig::default());
    let mut overlay_frame = None;
    for x in [160, 130, 100, 70, 40] {
        let (gesture, annotated) = c.process(&frame_with_disc(x, 60, 14));
        if gesture.is_some() {
            overlay_frame = Some(annotated);
        }
    }
    let annotated = overlay_frame.expect("swipe should have fired");
    // Label color (pure green) appears in the top-left text region
    let mut found = false;
    for y in 20..40 {
        for x in 10..190 {
            if annotated.at(x, y, 0) == 0
                && annotated.at(x, y, 1) == 255
                && annotated.at(x, y, 2) == 0
            {
                found = true;
            }
        }
    }
    assert!(found, "gesture label pixels missing");
}
