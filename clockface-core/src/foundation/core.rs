use crate::foundation::error::{ClockfaceError, ClockfaceResult};

pub use kurbo::{Point, Vec2};

/// Absolute 0-based index of an output frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ClockfaceResult<Self> {
        if den == 0 {
            return Err(ClockfaceError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ClockfaceError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Whole-number frame rate, e.g. `Fps::whole(30)`.
    pub fn whole(num: u32) -> ClockfaceResult<Self> {
        Self::new(num, 1)
    }

    /// Re-check the invariants of a value that bypassed [`Fps::new`] (e.g. deserialized).
    pub fn validate(self) -> ClockfaceResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of one frame.
    pub fn frame_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.frame_duration_secs())
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject zero-sized canvases.
    pub fn validate(self) -> ClockfaceResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ClockfaceError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
