//! 3D overlay renderer.
//!
//! A background image is drawn as a flat quad filling the view; an animated texture on a smaller
//! quad spins about the Y axis in front of it. Every iteration is read back from the
//! [`DrawSurface`] as one output frame.

/// Early-stop signals polled by the frame loop.
pub mod signal;
/// Fixed-rate loop pacing.
pub mod throttle;

use glam::Mat4;

use crate::{
    assets::{loader::ImageLoader, sequence::AnimatedSequence},
    config::OverlayConfig,
    encode::sink::encode_frames,
    foundation::{
        error::{ClockfaceError, ClockfaceResult},
        math::cyclic_index,
    },
    render::{
        frame::FrameRGB,
        surface::{Blend, Camera, DrawSurface, SoftwareSurface, Texture, TexturedQuad},
    },
    transform::rotation::{RotationSequence, model_matrix},
};

use self::{signal::QuitSignal, throttle::FrameThrottle};

/// Run the frame loop on `surface` and return the captured frames.
///
/// The surface must match the background size. The loop stops after `max_frames` iterations
/// or after the iteration in which `quit` is first observed; that iteration still captures its
/// frame.
#[tracing::instrument(skip_all, fields(max_frames = cfg.max_frames))]
pub fn render_overlay_frames<S: DrawSurface>(
    cfg: &OverlayConfig,
    background: &image::RgbaImage,
    sequence: &AnimatedSequence,
    surface: &mut S,
    quit: &dyn QuitSignal,
) -> ClockfaceResult<Vec<FrameRGB>> {
    cfg.validate()?;
    let (width, height) = surface.size();
    if (width, height) != background.dimensions() {
        return Err(ClockfaceError::validation(format!(
            "surface is {width}x{height} but background is {}x{}",
            background.width(),
            background.height()
        )));
    }

    let bg_texture = Texture::upload_flipped_rgb(background)?;
    let textures = sequence
        .frames()
        .iter()
        .map(Texture::upload_flipped_rgba)
        .collect::<ClockfaceResult<Vec<_>>>()?;
    let rotations = RotationSequence::new(cfg.rotation_steps)?;
    let bg_quad = TexturedQuad::centered_xy(cfg.background_half_extent);
    let overlay_quad = TexturedQuad::centered_xy(cfg.overlay_half_extent);

    surface.set_camera(Camera {
        fov_y_deg: cfg.fov_y_deg,
        aspect: width as f32 / height as f32,
        near: cfg.near,
        far: cfg.far,
        distance: cfg.camera_distance,
    });

    let mut throttle = if cfg.throttle {
        FrameThrottle::new(cfg.fps)
    } else {
        FrameThrottle::disabled()
    };

    let cap = usize::try_from(cfg.max_frames).unwrap_or(usize::MAX);
    let mut frames = Vec::with_capacity(cap.min(4096));
    let mut rot_idx = 0usize;
    let mut frame_idx = 0usize;
    let mut running = true;

    while running && frames.len() < cap {
        if quit.quit_requested() {
            tracing::info!(captured = frames.len(), "quit requested, finishing current frame");
            running = false;
        }

        surface.clear(cfg.clear_color.to_array());
        surface.draw_quad(&bg_quad, &bg_texture, Mat4::IDENTITY, Blend::Replace)?;
        surface.draw_quad(
            &overlay_quad,
            &textures[frame_idx],
            model_matrix(rotations.cyclic(rot_idx as u64)),
            Blend::SrcAlphaOver,
        )?;
        frames.push(FrameRGB::from_bottom_up(width, height, surface.read_pixels())?);

        rot_idx = cyclic_index(rot_idx as u64 + 1, rotations.len());
        frame_idx = cyclic_index(frame_idx as u64 + 1, textures.len());
        throttle.tick();
    }

    tracing::debug!(captured = frames.len(), "overlay loop finished");
    Ok(frames)
}

/// Load the inputs, render on a [`SoftwareSurface`] and encode every requested output.
///
/// Returns the number of frames encoded.
pub fn run_overlay(
    cfg: &OverlayConfig,
    loader: &dyn ImageLoader,
    quit: &dyn QuitSignal,
) -> ClockfaceResult<usize> {
    cfg.validate()?;
    if cfg.outputs.is_empty() {
        return Err(ClockfaceError::validation(
            "no outputs requested (video and gif are both disabled)",
        ));
    }
    let background = loader.load_background(&cfg.background)?;
    let sequence = loader.load_sequence(&cfg.clock, cfg.overlay_size)?;
    tracing::info!(
        background = %cfg.background.display(),
        width = background.width(),
        height = background.height(),
        clock_frames = sequence.len(),
        "loaded overlay inputs"
    );

    let mut surface = SoftwareSurface::new(background.width(), background.height())?;
    let frames = render_overlay_frames(cfg, &background, &sequence, &mut surface, quit)?;
    encode_frames(&frames, cfg.fps, &mut cfg.outputs.build_sinks())?;
    Ok(frames.len())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/overlay.rs"]
mod tests;
