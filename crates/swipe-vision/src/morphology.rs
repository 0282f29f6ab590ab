use swipe_base::Tensor;

/// 3x3 rectangular structuring element, applied `iterations` times.
///
/// Out-of-image neighbors never affect the result, so blobs touching the
/// frame border are not eaten by erosion.
pub fn erode(mask: &Tensor<u8>, iterations: usize) -> Tensor<u8> {
    apply(mask, iterations, |all, _any| all)
}

/// 3x3 rectangular structuring element, applied `iterations` times.
pub fn dilate(mask: &Tensor<u8>, iterations: usize) -> Tensor<u8> {
    apply(mask, iterations, |_all, any| any)
}

/// Morphological opening: erosion then dilation, `iterations` each.
///
/// The order matters: erosion removes small false-positive speckles first,
/// dilation then restores the surviving blob to roughly its original extent.
pub fn open(mask: &Tensor<u8>, iterations: usize) -> Tensor<u8> {
    dilate(&erode(mask, iterations), iterations)
}

fn apply(mask: &Tensor<u8>, iterations: usize, keep: fn(bool, bool) -> bool) -> Tensor<u8> {
    let (w, h) = (mask.width(), mask.height());
    let mut current = mask.data.clone();
    let mut next = vec![0u8; current.len()];

    for _ in 0..iterations {
        for y in 0..h {
            for x in 0..w {
                let mut all = true;
                let mut any = false;
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                        if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                            continue;
                        }
                        let set = current[ny as usize * w + nx as usize] != 0;
                        all &= set;
                        any |= set;
                    }
                }
                next[y * w + x] = if keep(all, any) { 255 } else { 0 };
            }
        }
        std::mem::swap(&mut current, &mut next);
    }

    Tensor {
        shape: mask.shape.clone(),
        data: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(rows: &[&[u8]]) -> Tensor<u8> {
        let h = rows.len();
        let w = rows[0].len();
        let data = rows.iter().flat_map(|r| r.iter().map(|&v| v * 255)).collect();
        Tensor::new(vec![h, w], data).unwrap()
    }

    #[test]
    fn erode_removes_isolated_pixel() {
        let mask = mask_from(&[
            &[0, 0, 0, 0],
            &[0, 1, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert!(erode(&mask, 1).data.iter().all(|&v| v == 0));
    }

    #[test]
    fn dilate_grows_single_pixel_to_block() {
        let mask = mask_from(&[
            &[0, 0, 0],
            &[0, 1, 0],
            &[0, 0, 0],
        ]);
        assert!(dilate(&mask, 1).data.iter().all(|&v| v == 255));
    }

    #[test]
    fn opening_keeps_large_blob_kills_speckle() {
        // 10x10 solid block plus a lone pixel far away
        let mut mask = Tensor::<u8>::zeros(vec![20, 30]).unwrap();
        for y in 2..12 {
            for x in 2..12 {
                mask.set(x, y, 0, 255);
            }
        }
        mask.set(25, 15, 0, 255);

        let opened = open(&mask, 2);
        assert_eq!(opened.at(25, 15, 0), 0, "speckle must vanish");
        assert_eq!(opened.at(6, 6, 0), 255, "blob interior must survive");
    }

    #[test]
    fn erosion_ignores_out_of_image_neighbors() {
        // Solid mask: border pixels keep their value because off-image
        // neighbors do not count against "all set"
        let mask = mask_from(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        assert!(erode(&mask, 1).data.iter().all(|&v| v == 255));
    }
}
