use crate::analyze::{AnalyzeError, EmbeddedImage};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;

/// Uniform downscale so the larger dimension fits `max_dim`. Never
/// upscales: the scale factor is clamped to 1, so already-small images
/// keep their dimensions.
pub fn scaled_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width <= max_dim && height <= max_dim {
        return (width, height);
    }

    if width >= height {
        let scaled = ((height as u64 * max_dim as u64) / width as u64).max(1) as u32;
        (max_dim, scaled)
    } else {
        let scaled = ((width as u64 * max_dim as u64) / height as u64).max(1) as u32;
        (scaled, max_dim)
    }
}

/// Decode, downscale to the bounded resolution, and re-encode as JPEG at
/// the fixed quality. Keeps the upstream payload bounded regardless of
/// what the client sent.
pub fn normalize(
    image: &EmbeddedImage,
    max_dim: u32,
    quality: u8,
) -> Result<EmbeddedImage, AnalyzeError> {
    let decoded =
        image::load_from_memory(&image.bytes).map_err(|e| AnalyzeError::ImageDecode(e.to_string()))?;

    let (width, height) = decoded.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, max_dim);

    let resized = if (new_width, new_height) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(new_width, new_height, FilterType::Lanczos3)
    };

    let rgb = resized.to_rgb8();
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| AnalyzeError::ImageDecode(format!("JPEG encode failed: {e}")))?;

    Ok(EmbeddedImage {
        mime: "image/jpeg".to_string(),
        bytes,
    })
}
