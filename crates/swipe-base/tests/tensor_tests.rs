use swipe_base::{Tensor, TensorError};

#[test]
fn new_accepts_matching_shape() {
    let t = Tensor::new(vec![2, 3, 3], vec![0u8; 18]).unwrap();
    assert_eq!(t.height(), 2);
    assert_eq!(t.width(), 3);
    assert_eq!(t.channels(), 3);
    assert_eq!(t.len(), 18);
}

#[test]
fn new_rejects_mismatched_shape() {
    let err = Tensor::new(vec![2, 2], vec![0u8; 5]).unwrap_err();
    assert_eq!(
        err,
        TensorError::ShapeMismatch {
            expected: 4,
            got: 5
        }
    );
}

#[test]
fn new_detects_shape_overflow() {
    let err = Tensor::<u8>::zeros(vec![usize::MAX, 2]).unwrap_err();
    assert_eq!(err, TensorError::ShapeOverflow);
}

#[test]
fn zeros_fills_with_default() {
    let t = Tensor::<u8>::zeros(vec![4, 4]).unwrap();
    assert!(t.data.iter().all(|&v| v == 0));
    assert_eq!(t.channels(), 1);
}

#[test]
fn pixel_accessors_roundtrip() {
    let mut t = Tensor::<u8>::zeros(vec![4, 6, 3]).unwrap();
    t.set(5, 3, 2, 17);
    assert_eq!(t.at(5, 3, 2), 17);
    assert_eq!(t.at(5, 3, 0), 0);
    // Last pixel index stays in bounds
    assert_eq!(t.pixel_index(5, 3) + 2, t.len() - 1);
}

#[test]
fn mask_pixel_accessors_use_single_channel() {
    let mut m = Tensor::<u8>::zeros(vec![3, 5]).unwrap();
    m.set(4, 2, 0, 255);
    assert_eq!(m.at(4, 2, 0), 255);
    assert_eq!(m.pixel_index(4, 2), 14);
}
