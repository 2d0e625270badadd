use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::ffmpeg::{
    check_frame_order, check_frame_size, ensure_parent_dir, validate_sink_config,
};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClockfaceError, ClockfaceResult};
use crate::render::frame::FrameRGB;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// NeuQuant sampling speed, 1 (best) to 30 (fastest).
    pub quantize_speed: i32,
}

impl GifSinkOpts {
    /// Create options for outputting a looping GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            quantize_speed: 10,
        }
    }
}

/// Sink that encodes frames into an infinitely looping animated GIF.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Create a new GIF sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    fn label(&self) -> String {
        self.opts.out_path.display().to_string()
    }

    fn begin(&mut self, cfg: SinkConfig) -> ClockfaceResult<()> {
        validate_sink_config(&cfg)?;
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(ClockfaceError::validation(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(ClockfaceError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder =
            GifEncoder::new_with_speed(BufWriter::new(file), self.opts.quantize_speed.clamp(1, 30));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| ClockfaceError::encode(format!("gif repeat: {e}")))?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> ClockfaceResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| ClockfaceError::encode("gif sink not started"))?;
        check_frame_order(&mut self.last_idx, idx)?;
        check_frame_size(&cfg, frame)?;

        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| ClockfaceError::encode("gif sink is already finalized"))?;

        let delay = image::Delay::from_numer_denom_ms(1000 * cfg.fps.den, cfg.fps.num);
        let gif_frame = image::Frame::from_parts(frame.to_rgba_image(), 0, 0, delay);
        encoder
            .encode_frame(gif_frame)
            .map_err(|e| ClockfaceError::encode(format!("gif frame {}: {e}", idx.0)))?;
        Ok(())
    }

    fn end(&mut self) -> ClockfaceResult<()> {
        // Dropping the encoder writes the GIF trailer.
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| ClockfaceError::encode("gif sink not started"))?;
        drop(encoder);
        self.cfg = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
