//! Input decoding.
//!
//! Pipelines read their rasters through [`loader::ImageLoader`]; the filesystem implementation
//! decodes GIFs in-process and hands other animation containers to the system `ffmpeg`.

/// In-memory image and GIF decoding.
pub mod decode;
/// Loader trait and filesystem implementation.
pub mod loader;
/// `ffprobe`/`ffmpeg` video decoding.
pub mod media;
/// Cyclic frame sequence.
pub mod sequence;
