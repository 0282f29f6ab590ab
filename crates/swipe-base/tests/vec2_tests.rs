use swipe_base::Vec2;

#[test]
fn new_and_fields() {
    let v = Vec2::new(3, 4);
    assert_eq!(v.x, 3);
    assert_eq!(v.y, 4);
}

#[test]
fn zero() {
    let v = Vec2::<i32>::zero();
    assert_eq!(v, Vec2::new(0, 0));
}

#[test]
fn add_sub() {
    let a = Vec2::new(1, 2);
    let b = Vec2::new(3, 4);
    assert_eq!(a + b, Vec2::new(4, 6));
    assert_eq!(b - a, Vec2::new(2, 2));
}

#[test]
fn scalar_mul_div() {
    let v = Vec2::new(2.0, 3.0);
    assert_eq!(v * 4.0, Vec2::new(8.0, 12.0));
    assert_eq!(v / 2.0, Vec2::new(1.0, 1.5));
}

#[test]
fn length_and_distance() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.distance(&Vec2::zero()), 5.0);
}

#[test]
fn i32_to_f64_conversion() {
    let v = Vec2::new(-7, 2).as_f64();
    assert_eq!(v, Vec2::new(-7.0, 2.0));
}
