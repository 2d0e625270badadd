//! clockface renders animated clock faces and composites them onto still images.
//!
//! Three independent batch pipelines, each a function of an explicit config that produces a
//! buffer of opaque RGB frames followed by an explicit encode step:
//!
//! 1. **Clock**: [`render_clock_frames`] draws a 12-hour analog face with hour, minute and second
//!    hands (SVG rasterized with `resvg`). [`run_clock`] also encodes MP4/GIF.
//! 2. **Overlay**: [`render_overlay_frames`] spins a textured quad about the Y axis in front of a
//!    background on a [`DrawSurface`] and reads every iteration back as a frame. [`run_overlay`]
//!    loads the inputs, renders on a [`SoftwareSurface`] and encodes.
//! 3. **Composite**: [`composite_frames`] alpha-blends each animation frame onto the centre of a
//!    background. [`run_composite`] loads, blends and encodes.
//!
//! The clock's GIF output is the usual animation input of the other two pipelines; the path is
//! always passed explicitly through the config.
//!
//! Backends sit behind three traits: [`ImageLoader`] (decoding), [`DrawSurface`] (3D drawing)
//! and [`FrameSink`] (encoding). MP4 output requires the system `ffmpeg` binary on `PATH`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod clock;
mod composite;
mod config;
mod encode;
mod foundation;
mod overlay;
mod render;
/// Precomputed transforms used by the overlay renderer.
pub mod transform;

pub use assets::decode::{decode_gif_frames, decode_image, resize_frames};
pub use assets::loader::{FsImageLoader, ImageLoader, ensure_input_exists};
pub use assets::media::{VideoSourceInfo, decode_video_frames, probe_video};
pub use assets::sequence::AnimatedSequence;
pub use clock::face::ClockFace;
pub use clock::geometry::{DIAL_UNITS, DialLayout, HandPositions, dial_angle};
pub use clock::raster::SvgRasterizer;
pub use clock::{render_clock_frames, render_clock_frames_with, run_clock};
pub use composite::{blend_region, centered_origin, composite_frames, run_composite};
pub use config::{ClockConfig, CompositeConfig, Direction, HandStyle, OverlayConfig};
pub use encode::OutputTargets;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::gif::{GifSink, GifSinkOpts};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig, encode_frames};
pub use foundation::color::Rgb8;
pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{ClockfaceError, ClockfaceResult};
pub use overlay::signal::{NeverQuit, QuitFlag, QuitSignal};
pub use overlay::throttle::FrameThrottle;
pub use overlay::{render_overlay_frames, run_overlay};
pub use render::frame::FrameRGB;
pub use render::surface::{Blend, Camera, DrawSurface, SoftwareSurface, Texture, TexturedQuad};
