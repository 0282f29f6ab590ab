use crate::CameraError;
use swipe_base::Tensor;

/// Converts a packed YUYV (YUV 4:2:2) capture buffer into an RGB frame
/// tensor with shape `[height, width, 3]`.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`; each pair of pixels shares U and V.
/// Conversion uses BT.601 coefficients:
/// - R = Y + 1.402 * (V - 128)
/// - G = Y - 0.344 * (U - 128) - 0.714 * (V - 128)
/// - B = Y + 1.772 * (U - 128)
///
/// # Errors
///
/// Returns `CameraError::Convert` if the buffer is shorter than
/// `width * height * 2` bytes, and `CameraError::Tensor` if the frame
/// dimensions are inconsistent.
pub fn yuyv_to_rgb_frame(data: &[u8], width: u32, height: u32) -> Result<Tensor<u8>, CameraError> {
    let pixel_count = (width as usize) * (height as usize);
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return Err(CameraError::Convert(format!(
            "YUYV buffer too short: expected {} bytes for {}x{}, got {}",
            expected_len,
            width,
            height,
            data.len()
        )));
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);

    // 4 bytes describe 2 pixels: Y0 U Y1 V
    for chunk in data[..expected_len].chunks_exact(4) {
        let u = chunk[1] as f32 - 128.0;
        let v = chunk[3] as f32 - 128.0;
        for &y in &[chunk[0], chunk[2]] {
            let y = y as f32;
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(Tensor::new(
        vec![height as usize, width as usize, 3],
        rgb,
    )?)
}
