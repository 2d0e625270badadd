use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// An opaque output frame as RGB8 pixels.
///
/// Rows are stored top row first, matching the image-coordinate convention used by decoders and
/// encoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Wrap an RGB8 buffer, checking its length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ClockfaceResult<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ClockfaceError::validation(format!(
                "frame data length {} does not match {width}x{height}x3",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Drop the alpha channel of an RGBA image.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for px in img.as_raw().chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a frame from a surface read-back whose rows run bottom to top.
    ///
    /// The rows are flipped so the frame is upright in image coordinates.
    pub fn from_bottom_up(width: u32, height: u32, mut data: Vec<u8>) -> ClockfaceResult<Self> {
        flip_rows_in_place(&mut data, width as usize * 3);
        Self::new(width, height, data)
    }

    /// Expand to an opaque RGBA image (alpha 255).
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for px in self.data.chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        image::RgbaImage::from_raw(self.width, self.height, rgba)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// RGB value at `(x, y)` with `y = 0` being the top row.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let off = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> ClockfaceResult<()> {
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Reverse the row order of a tightly packed buffer with `stride` bytes per row.
pub fn flip_rows_in_place(data: &mut [u8], stride: usize) {
    if stride == 0 {
        return;
    }
    let rows = data.len() / stride;
    for top in 0..rows / 2 {
        let bottom = rows - 1 - top;
        let (head, tail) = data.split_at_mut(bottom * stride);
        head[top * stride..(top + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
