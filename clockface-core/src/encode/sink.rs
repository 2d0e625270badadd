use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ClockfaceError, ClockfaceResult};
use crate::render::frame::FrameRGB;

/// Configuration provided to a [`FrameSink`] before any frame is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Frame encoder contract.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, between
/// one `begin` and one `end`.
pub trait FrameSink {
    /// Short human-readable label used in logs (usually the output path).
    fn label(&self) -> String;
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ClockfaceResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> ClockfaceResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ClockfaceResult<()>;
}

/// Encode a complete frame buffer into every sink, one sink after the other.
///
/// Each sink sees the identical sequence; a failure in any sink aborts the whole call.
pub fn encode_frames(
    frames: &[FrameRGB],
    fps: Fps,
    sinks: &mut [Box<dyn FrameSink>],
) -> ClockfaceResult<()> {
    let first = frames
        .first()
        .ok_or_else(|| ClockfaceError::encode("no frames to encode"))?;
    let cfg = SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    };

    for sink in sinks.iter_mut() {
        let label = sink.label();
        tracing::info!(output = %label, frames = frames.len(), "encoding");
        sink.begin(cfg)?;
        for (i, frame) in frames.iter().enumerate() {
            sink.push_frame(FrameIndex(i as u64), frame)?;
        }
        sink.end()?;
        tracing::info!(output = %label, "wrote");
    }
    Ok(())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGB)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGB)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn label(&self) -> String {
        "memory".to_owned()
    }

    fn begin(&mut self, cfg: SinkConfig) -> ClockfaceResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> ClockfaceResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ClockfaceResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
