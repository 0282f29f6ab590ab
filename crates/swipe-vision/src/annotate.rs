//! Drawing onto RGB frame tensors: mirror, circle/marker overlays, and a
//! small scaled bitmap font for the gesture label.

use swipe_base::{Tensor, Vec2};

/// Flip a `[H, W, C]` frame left-to-right.
pub fn mirror_horizontal(frame: &Tensor<u8>) -> Tensor<u8> {
    let (w, h, c) = (frame.width(), frame.height(), frame.channels());
    let mut data = Vec::with_capacity(frame.len());

    for y in 0..h {
        let row = &frame.data[y * w * c..(y + 1) * w * c];
        for x in (0..w).rev() {
            data.extend_from_slice(&row[x * c..(x + 1) * c]);
        }
    }

    Tensor {
        shape: frame.shape.clone(),
        data,
    }
}

/// Draw a circle outline, two pixels thick.
pub fn draw_circle(frame: &mut Tensor<u8>, center: Vec2<f64>, radius: f64, color: [u8; 3]) {
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    let x0 = ((center.x - radius).floor() as i32 - 1).max(0);
    let x1 = ((center.x + radius).ceil() as i32 + 1).min(w - 1);
    let y0 = ((center.y - radius).floor() as i32 - 1).max(0);
    let y1 = ((center.y + radius).ceil() as i32 + 1).min(h - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = Vec2::new(x as f64, y as f64).distance(&center);
            if (d - radius).abs() <= 1.0 {
                put(frame, x, y, color);
            }
        }
    }
}

/// Draw a filled disc (centroid marker).
pub fn draw_disc(frame: &mut Tensor<u8>, center: Vec2<i32>, radius: i32, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(frame, center.x + dx, center.y + dy, color);
            }
        }
    }
}

const GLYPH_SCALE: usize = 3;

/// Draw uppercase text with the 3x5 bitmap font, scaled up 3x.
pub fn draw_label(frame: &mut Tensor<u8>, text: &str, x: usize, y: usize, color: [u8; 3]) {
    let mut cx = x;
    for ch in text.chars() {
        let glyph = char_glyph(ch);
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..3usize {
                if bits & (1 << (2 - col)) != 0 {
                    fill_cell(frame, cx + col * GLYPH_SCALE, y + row * GLYPH_SCALE, color);
                }
            }
        }
        cx += 4 * GLYPH_SCALE; // 3 wide + 1 gap
        if cx + 4 * GLYPH_SCALE > frame.width() {
            break;
        }
    }
}

fn fill_cell(frame: &mut Tensor<u8>, x: usize, y: usize, color: [u8; 3]) {
    for dy in 0..GLYPH_SCALE {
        for dx in 0..GLYPH_SCALE {
            put(frame, (x + dx) as i32, (y + dy) as i32, color);
        }
    }
}

#[inline]
fn put(frame: &mut Tensor<u8>, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= frame.width() as i32 || y >= frame.height() as i32 {
        return;
    }
    for (c, &v) in color.iter().enumerate() {
        frame.set(x as usize, y as usize, c, v);
    }
}

/// Minimal 3x5 bitmap font, 5 rows of 3 bits per character.
pub fn char_glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_swaps_columns() {
        let mut frame = Tensor::<u8>::zeros(vec![2, 4, 3]).unwrap();
        frame.set(0, 0, 0, 200);
        let mirrored = mirror_horizontal(&frame);
        assert_eq!(mirrored.at(3, 0, 0), 200);
        assert_eq!(mirrored.at(0, 0, 0), 0);
        assert_eq!(mirrored.shape, frame.shape);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let frame = Tensor::new(vec![1, 3, 3], (0u8..9).collect()).unwrap();
        assert_eq!(mirror_horizontal(&mirror_horizontal(&frame)), frame);
    }

    #[test]
    fn disc_fills_center() {
        let mut frame = Tensor::<u8>::zeros(vec![20, 20, 3]).unwrap();
        draw_disc(&mut frame, Vec2::new(10, 10), 3, [255, 0, 0]);
        assert_eq!(frame.at(10, 10, 0), 255);
        assert_eq!(frame.at(10, 13, 0), 255);
        assert_eq!(frame.at(10, 14, 0), 0);
    }

    #[test]
    fn circle_outline_leaves_center_untouched() {
        let mut frame = Tensor::<u8>::zeros(vec![40, 40, 3]).unwrap();
        draw_circle(&mut frame, Vec2::new(20.0, 20.0), 10.0, [0, 255, 0]);
        assert_eq!(frame.at(20, 20, 1), 0);
        assert_eq!(frame.at(30, 20, 1), 255);
    }

    #[test]
    fn drawing_clips_at_frame_edges() {
        let mut frame = Tensor::<u8>::zeros(vec![10, 10, 3]).unwrap();
        draw_disc(&mut frame, Vec2::new(0, 0), 4, [9, 9, 9]);
        draw_circle(&mut frame, Vec2::new(9.0, 9.0), 6.0, [9, 9, 9]);
        // No panic and corner pixels written
        assert_eq!(frame.at(0, 0, 0), 9);
    }

    #[test]
    fn label_writes_pixels() {
        let mut frame = Tensor::<u8>::zeros(vec![40, 120, 3]).unwrap();
        draw_label(&mut frame, "UP", 2, 2, [0, 255, 0]);
        assert!(frame.data.iter().any(|&v| v == 255));
    }
}
