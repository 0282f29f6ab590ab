use swipe_base::Tensor;

/// A color in hue-saturation-value space, OpenCV byte scaling:
/// hue in `0..=179` (degrees halved), saturation and value in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Inclusive lower/upper HSV bounds for segmentation.
///
/// Comparison is per-channel, no hue wraparound: a window that would cross
/// the 179/0 boundary (reds) must be split by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ColorRange {
    pub const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, c: Hsv) -> bool {
        self.lower.h <= c.h
            && c.h <= self.upper.h
            && self.lower.s <= c.s
            && c.s <= self.upper.s
            && self.lower.v <= c.v
            && c.v <= self.upper.v
    }
}

/// Convert one RGB pixel to HSV in OpenCV byte scaling.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    Hsv {
        h: (h_deg / 2.0).round().min(179.0) as u8,
        s: s.round().min(255.0) as u8,
        v: v.round().min(255.0) as u8,
    }
}

/// Threshold an RGB frame `[H, W, 3]` against a color range.
///
/// Returns a binary mask `[H, W]` with 255 where the pixel falls inside the
/// range and 0 elsewhere.
pub fn mask_in_range(frame: &Tensor<u8>, range: &ColorRange) -> Tensor<u8> {
    let (w, h) = (frame.width(), frame.height());
    let mut data = Vec::with_capacity(w * h);

    for pixel in frame.data.chunks_exact(3) {
        let hsv = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
        data.push(if range.contains(hsv) { 255 } else { 0 });
    }

    Tensor {
        shape: vec![h, w],
        data,
    }
}
