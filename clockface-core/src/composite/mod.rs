//! Static compositor.
//!
//! Alpha-blends each frame of an animation onto the centre of a still background. The source
//! animation is played `loops` times back to back.

use crate::{
    assets::{loader::ImageLoader, sequence::AnimatedSequence},
    config::CompositeConfig,
    encode::sink::encode_frames,
    foundation::error::{ClockfaceError, ClockfaceResult},
    render::frame::FrameRGB,
};

/// Top-left corner that centres an `overlay` sized region inside `background`.
///
/// Uses integer division, so odd leftovers put the extra pixel on the right and bottom.
pub fn centered_origin(
    background: (u32, u32),
    overlay: (u32, u32),
) -> ClockfaceResult<(u32, u32)> {
    let (bw, bh) = background;
    let (ow, oh) = overlay;
    if ow > bw || oh > bh {
        return Err(ClockfaceError::validation(format!(
            "overlay {ow}x{oh} does not fit inside background {bw}x{bh}"
        )));
    }
    Ok(((bw - ow) / 2, (bh - oh) / 2))
}

/// Blend `overlay` into `background` with its top-left corner at `origin`.
///
/// Per colour channel `out = trunc(bg * (1 - a) + ov * a)` with `a = alpha / 255`. The result is
/// opaque RGB; the background's own alpha is ignored.
pub fn blend_region(
    background: &image::RgbaImage,
    overlay: &image::RgbaImage,
    origin: (u32, u32),
) -> ClockfaceResult<FrameRGB> {
    let (ox, oy) = origin;
    let (ow, oh) = overlay.dimensions();
    let (bw, bh) = background.dimensions();
    let fits_x = u64::from(ox) + u64::from(ow) <= u64::from(bw);
    let fits_y = u64::from(oy) + u64::from(oh) <= u64::from(bh);
    if !(fits_x && fits_y) {
        return Err(ClockfaceError::validation(format!(
            "overlay {ow}x{oh} at ({ox}, {oy}) exceeds background {bw}x{bh}"
        )));
    }

    let mut out = FrameRGB::from_rgba_image(background);
    let stride = bw as usize * 3;
    for (x, y, px) in overlay.enumerate_pixels() {
        let [r, g, b, alpha] = px.0;
        let a = f64::from(alpha) / 255.0;
        let off = (oy + y) as usize * stride + (ox + x) as usize * 3;
        for (dst, src) in out.data[off..off + 3].iter_mut().zip([r, g, b]) {
            *dst = (f64::from(*dst) * (1.0 - a) + f64::from(src) * a) as u8;
        }
    }
    Ok(out)
}

/// Blend every frame of `sequence`, `loops` times over, onto the centre of `background`.
#[tracing::instrument(skip_all, fields(source_frames = sequence.len(), loops = loops))]
pub fn composite_frames(
    background: &image::RgbaImage,
    sequence: &AnimatedSequence,
    loops: u32,
) -> ClockfaceResult<Vec<FrameRGB>> {
    if loops == 0 {
        return Err(ClockfaceError::validation("loops must be > 0"));
    }
    let origin = centered_origin(
        background.dimensions(),
        (sequence.width(), sequence.height()),
    )?;
    tracing::debug!(x = origin.0, y = origin.1, "overlay origin");

    let total = sequence.len() as u64 * u64::from(loops);
    (0..total)
        .map(|i| blend_region(background, sequence.cyclic(i), origin))
        .collect()
}

/// Load the inputs, composite, write the optional preview and encode every requested output.
///
/// Returns the number of frames encoded.
pub fn run_composite(cfg: &CompositeConfig, loader: &dyn ImageLoader) -> ClockfaceResult<usize> {
    cfg.validate()?;
    if cfg.outputs.is_empty() && cfg.preview.is_none() {
        return Err(ClockfaceError::validation(
            "no outputs requested (video, gif and preview are all disabled)",
        ));
    }
    let background = loader.load_background(&cfg.background)?;
    let sequence = loader.load_sequence(&cfg.clock, cfg.overlay_size)?;
    tracing::info!(
        background = %cfg.background.display(),
        clock_frames = sequence.len(),
        loops = cfg.loops,
        "loaded composite inputs"
    );

    let frames = composite_frames(&background, &sequence, cfg.loops)?;
    if let (Some(path), Some(first)) = (&cfg.preview, frames.first()) {
        first.save_png(path)?;
        tracing::info!(path = %path.display(), "wrote preview");
    }
    if !cfg.outputs.is_empty() {
        encode_frames(&frames, cfg.fps, &mut cfg.outputs.build_sinks())?;
    }
    Ok(frames.len())
}

#[cfg(test)]
#[path = "../../tests/unit/composite/composite.rs"]
mod tests;
