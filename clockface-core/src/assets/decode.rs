use std::io::Cursor;

use anyhow::Context;
use image::AnimationDecoder as _;

use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// Decode encoded still-image bytes into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> ClockfaceResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Decode every frame of an animated GIF into full-canvas RGBA8 images.
///
/// Frame disposal and partial-frame offsets are resolved by the decoder, so each returned image
/// is a complete composited frame.
pub fn decode_gif_frames(bytes: &[u8]) -> ClockfaceResult<Vec<image::RgbaImage>> {
    let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| ClockfaceError::decode(format!("open gif: {e}")))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| ClockfaceError::decode(format!("decode gif frames: {e}")))?;
    if frames.is_empty() {
        return Err(ClockfaceError::decode("gif contains no frames"));
    }
    Ok(frames.into_iter().map(|f| f.into_buffer()).collect())
}

/// Resize every frame to `size x size` with a Lanczos filter.
pub fn resize_frames(frames: &[image::RgbaImage], size: u32) -> Vec<image::RgbaImage> {
    frames
        .iter()
        .map(|f| {
            if f.dimensions() == (size, size) {
                f.clone()
            } else {
                image::imageops::resize(f, size, size, image::imageops::FilterType::Lanczos3)
            }
        })
        .collect()
}

/// Return `true` when `bytes` start with a GIF signature.
pub fn is_gif(bytes: &[u8]) -> bool {
    bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
