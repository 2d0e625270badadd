use std::path::Path;

use anyhow::Context as _;

use crate::{
    assets::{
        decode::{decode_gif_frames, decode_image, is_gif, resize_frames},
        media::{decode_video_frames, probe_video},
        sequence::AnimatedSequence,
    },
    foundation::error::{ClockfaceError, ClockfaceResult},
};

/// Source of the raster inputs consumed by the overlay and compositor pipelines.
pub trait ImageLoader {
    /// Load a still background image as straight-alpha RGBA8.
    fn load_background(&self, path: &Path) -> ClockfaceResult<image::RgbaImage>;

    /// Load every frame of an animation as straight-alpha RGBA8, in playback order.
    fn load_animation(&self, path: &Path) -> ClockfaceResult<Vec<image::RgbaImage>>;

    /// Load an animation and resize every frame to `size x size`.
    fn load_sequence(&self, path: &Path, size: u32) -> ClockfaceResult<AnimatedSequence> {
        if size == 0 {
            return Err(ClockfaceError::validation("overlay size must be non-zero"));
        }
        let frames = self.load_animation(path)?;
        AnimatedSequence::new(resize_frames(&frames, size))
    }
}

/// [`ImageLoader`] backed by the filesystem.
///
/// GIF animations are decoded in-process; any other animation container is decoded through the
/// system `ffmpeg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load_background(&self, path: &Path) -> ClockfaceResult<image::RgbaImage> {
        let bytes = read_input(path)?;
        decode_image(&bytes)
            .map_err(|e| ClockfaceError::decode(format!("background '{}': {e}", path.display())))
    }

    fn load_animation(&self, path: &Path) -> ClockfaceResult<Vec<image::RgbaImage>> {
        let bytes = read_input(path)?;
        if is_gif(&bytes) {
            return decode_gif_frames(&bytes).map_err(|e| {
                ClockfaceError::decode(format!("animation '{}': {e}", path.display()))
            });
        }
        tracing::debug!(path = %path.display(), "non-gif animation, decoding through ffmpeg");
        let info = probe_video(path)?;
        decode_video_frames(&info)
    }
}

/// Read an input file, failing with a diagnostic that names the missing path.
pub fn read_input(path: &Path) -> ClockfaceResult<Vec<u8>> {
    ensure_input_exists(path)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("read input file '{}'", path.display()))?;
    Ok(bytes)
}

/// Fail early when a required input file does not exist.
pub fn ensure_input_exists(path: &Path) -> ClockfaceResult<()> {
    if !path.is_file() {
        return Err(ClockfaceError::validation(format!(
            "input file '{}' does not exist",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
