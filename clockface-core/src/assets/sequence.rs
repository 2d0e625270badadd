use crate::foundation::{
    error::{ClockfaceError, ClockfaceResult},
    math::cyclic_index,
};

/// Read-only cyclic sequence of equally sized RGBA frames.
#[derive(Clone, Debug)]
pub struct AnimatedSequence {
    frames: Vec<image::RgbaImage>,
    width: u32,
    height: u32,
}

impl AnimatedSequence {
    /// Wrap decoded frames. All frames must share the first frame's dimensions.
    pub fn new(frames: Vec<image::RgbaImage>) -> ClockfaceResult<Self> {
        let first = frames
            .first()
            .ok_or_else(|| ClockfaceError::validation("animated sequence must have frames"))?;
        let (width, height) = first.dimensions();
        if width == 0 || height == 0 {
            return Err(ClockfaceError::validation(
                "animated sequence frames must be non-empty",
            ));
        }
        if let Some((idx, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.dimensions() != (width, height))
        {
            return Err(ClockfaceError::validation(format!(
                "animated frame {idx} is {}x{}, expected {width}x{height}",
                f.width(),
                f.height()
            )));
        }
        Ok(Self {
            frames,
            width,
            height,
        })
    }

    /// Number of distinct frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frame at position `i`, wrapping around the end of the sequence.
    pub fn cyclic(&self, i: u64) -> &image::RgbaImage {
        &self.frames[cyclic_index(i, self.frames.len())]
    }

    /// All frames in order.
    pub fn frames(&self) -> &[image::RgbaImage] {
        &self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sequence.rs"]
mod tests;
