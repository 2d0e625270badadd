//! Analog clock-face animator.
//!
//! A static 12-hour face is laid out once as SVG; every frame adds the three hands at the
//! positions given by [`geometry::HandPositions::at`] and is rasterized with `resvg`.

/// SVG document builder for the face and hands.
pub mod face;
/// Dial scale, hand positions and dial-to-pixel mapping.
pub mod geometry;
/// SVG rasterization into opaque frames.
pub mod raster;

use crate::{
    config::ClockConfig,
    encode::sink::encode_frames,
    foundation::error::{ClockfaceError, ClockfaceResult},
    render::frame::FrameRGB,
};

use self::{face::ClockFace, geometry::HandPositions, raster::SvgRasterizer};

/// Render every frame of the clock animation.
#[tracing::instrument(skip(cfg), fields(direction = ?cfg.direction, frames = cfg.frames))]
pub fn render_clock_frames(cfg: &ClockConfig) -> ClockfaceResult<Vec<FrameRGB>> {
    let rasterizer = SvgRasterizer::new(cfg.canvas)?;
    render_clock_frames_with(cfg, &rasterizer)
}

/// Render every frame of the clock animation with a caller-provided rasterizer.
pub fn render_clock_frames_with(
    cfg: &ClockConfig,
    rasterizer: &SvgRasterizer,
) -> ClockfaceResult<Vec<FrameRGB>> {
    cfg.validate()?;
    let face = ClockFace::new(cfg);
    (0..cfg.frames)
        .map(|f| rasterizer.render(&face.frame_svg(&HandPositions::at(f, cfg.speed))))
        .collect()
}

/// Render the clock, write the optional preview and encode every requested output.
///
/// Returns the number of frames encoded.
pub fn run_clock(cfg: &ClockConfig) -> ClockfaceResult<usize> {
    if cfg.outputs.is_empty() && cfg.preview.is_none() {
        return Err(ClockfaceError::validation(
            "no outputs requested (video, gif and preview are all disabled)",
        ));
    }
    let frames = render_clock_frames(cfg)?;
    if let (Some(path), Some(first)) = (&cfg.preview, frames.first()) {
        first.save_png(path)?;
        tracing::info!(path = %path.display(), "wrote preview");
    }
    if !cfg.outputs.is_empty() {
        encode_frames(&frames, cfg.fps, &mut cfg.outputs.build_sinks())?;
    }
    Ok(frames.len())
}
