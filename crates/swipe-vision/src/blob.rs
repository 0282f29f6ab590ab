use swipe_base::{Tensor, Vec2};

/// One connected region of a binary mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Zeroth area moment (pixel count).
    pub area: f64,
    /// Centroid from first-order moments, truncated to pixel coordinates.
    pub centroid: Vec2<i32>,
    /// Center of the minimum enclosing circle of the blob boundary.
    pub circle_center: Vec2<f64>,
    /// Radius of the minimum enclosing circle.
    pub radius: f64,
}

/// Find the largest connected component of a binary mask and compute its
/// area moments and minimum enclosing circle.
///
/// Components use 8-connectivity, so diagonal bridges keep a blob whole.
/// Returns `None` when the mask is empty or the selected component has a
/// zero area moment (guards the centroid division).
pub fn largest_blob(mask: &Tensor<u8>) -> Option<Blob> {
    let (w, h) = (mask.width(), mask.height());
    let mut visited = vec![false; w * h];

    let mut best: Option<Component> = None;

    for start in 0..w * h {
        if mask.data[start] == 0 || visited[start] {
            continue;
        }
        let component = flood_fill(mask, &mut visited, start);
        if best.as_ref().is_none_or(|b| component.count > b.count) {
            best = Some(component);
        }
    }

    let component = best?;

    // m00 == 0 would divide by zero below; treat as no detection
    if component.count == 0 {
        return None;
    }
    let m00 = component.count as f64;
    let cx = component.sum_x as f64 / m00;
    let cy = component.sum_y as f64 / m00;

    let (circle_center, radius) = min_enclosing_circle(&component.boundary);

    Some(Blob {
        area: m00,
        centroid: Vec2::new(cx as i32, cy as i32),
        circle_center,
        radius,
    })
}

struct Component {
    count: u64,
    sum_x: u64,
    sum_y: u64,
    /// Pixels with at least one off-component 4-neighbor (or on the frame
    /// edge): the external contour.
    boundary: Vec<Vec2<f64>>,
}

fn flood_fill(mask: &Tensor<u8>, visited: &mut [bool], start: usize) -> Component {
    let (w, h) = (mask.width(), mask.height());
    let mut component = Component {
        count: 0,
        sum_x: 0,
        sum_y: 0,
        boundary: Vec::new(),
    };

    let mut stack = vec![start];
    visited[start] = true;

    while let Some(idx) = stack.pop() {
        let (x, y) = (idx % w, idx / w);
        component.count += 1;
        component.sum_x += x as u64;
        component.sum_y += y as u64;

        let mut on_boundary = false;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    if dx == 0 || dy == 0 {
                        on_boundary = true;
                    }
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if mask.data[nidx] == 0 {
                    if dx == 0 || dy == 0 {
                        on_boundary = true;
                    }
                } else if !visited[nidx] {
                    visited[nidx] = true;
                    stack.push(nidx);
                }
            }
        }
        if on_boundary {
            component.boundary.push(Vec2::new(x as f64, y as f64));
        }
    }

    component
}

/// Exact minimum enclosing circle (Welzl's incremental algorithm with a
/// deterministic shuffle). Returns `(center, radius)`; the zero circle for
/// an empty input.
pub fn min_enclosing_circle(points: &[Vec2<f64>]) -> (Vec2<f64>, f64) {
    if points.is_empty() {
        return (Vec2::zero(), 0.0);
    }

    let mut pts = points.to_vec();
    shuffle(&mut pts);

    let mut center = pts[0];
    let mut radius = 0.0f64;

    for i in 1..pts.len() {
        if contains(center, radius, pts[i]) {
            continue;
        }
        center = pts[i];
        radius = 0.0;
        for j in 0..i {
            if contains(center, radius, pts[j]) {
                continue;
            }
            center = (pts[i] + pts[j]) / 2.0;
            radius = center.distance(&pts[i]);
            for k in 0..j {
                if contains(center, radius, pts[k]) {
                    continue;
                }
                (center, radius) = circumcircle(pts[i], pts[j], pts[k]);
            }
        }
    }

    (center, radius)
}

const EPS: f64 = 1e-7;

fn contains(center: Vec2<f64>, radius: f64, p: Vec2<f64>) -> bool {
    center.distance(&p) <= radius + EPS
}

/// Circle through three points; falls back to the widest diametral pair
/// when the points are (near-)collinear.
fn circumcircle(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>) -> (Vec2<f64>, f64) {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < EPS {
        let pairs = [(a, b), (a, c), (b, c)];
        let (p, q) = pairs
            .into_iter()
            .max_by(|(p1, q1), (p2, q2)| p1.distance(q1).total_cmp(&p2.distance(q2)))
            .unwrap_or((a, b));
        let center = (p + q) / 2.0;
        return (center, center.distance(&p));
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Vec2::new(ux, uy);
    (center, center.distance(&a))
}

/// Fisher-Yates with a fixed-seed xorshift; keeps Welzl's expected linear
/// time without pulling a RNG dependency into the core.
fn shuffle(pts: &mut [Vec2<f64>]) {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    for i in (1..pts.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        pts.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_of_two_points_is_diametral() {
        let (c, r) = min_enclosing_circle(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)]);
        assert!((c.x - 2.0).abs() < 1e-9 && c.y.abs() < 1e-9);
        assert!((r - 2.0).abs() < 1e-9);
    }

    #[test]
    fn circle_of_square_corners() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
        ];
        let (c, r) = min_enclosing_circle(&pts);
        assert!((c.x - 1.0).abs() < 1e-6 && (c.y - 1.0).abs() < 1e-6);
        assert!((r - 2.0f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn interior_points_do_not_grow_circle() {
        let pts = [
            Vec2::new(-3.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(1.0, -0.2),
        ];
        let (_, r) = min_enclosing_circle(&pts);
        assert!((r - 3.0).abs() < 1e-6);
    }

    #[test]
    fn collinear_points_fall_back_to_diametral() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(5.0, 0.0),
        ];
        let (c, r) = min_enclosing_circle(&pts);
        assert!((c.x - 2.5).abs() < 1e-6);
        assert!((r - 2.5).abs() < 1e-6);
    }
}
