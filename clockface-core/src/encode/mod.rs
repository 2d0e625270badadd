//! Frame encoders.
//!
//! Every pipeline ends by handing its frame buffer to [`sink::encode_frames`] with the sinks built
//! from its [`OutputTargets`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// Animated GIF sink.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

use self::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use self::gif::{GifSink, GifSinkOpts};
use self::sink::FrameSink;

/// Output artifacts of a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputTargets {
    /// MP4 output (encoded through the system `ffmpeg`).
    pub video: Option<PathBuf>,
    /// Animated GIF output.
    pub gif: Option<PathBuf>,
    /// Overwrite existing files.
    pub overwrite: bool,
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self {
            video: None,
            gif: None,
            overwrite: true,
        }
    }
}

impl OutputTargets {
    /// `<stem>.mp4` and `<stem>.gif` in the working directory.
    pub fn with_stem(stem: &str) -> Self {
        Self {
            video: Some(PathBuf::from(format!("{stem}.mp4"))),
            gif: Some(PathBuf::from(format!("{stem}.gif"))),
            overwrite: true,
        }
    }

    /// Return `true` when no artifact is requested.
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.gif.is_none()
    }

    /// Build one sink per requested artifact, video first.
    pub fn build_sinks(&self) -> Vec<Box<dyn FrameSink>> {
        let mut sinks: Vec<Box<dyn FrameSink>> = Vec::new();
        if let Some(path) = &self.video {
            let mut opts = FfmpegSinkOpts::new(path);
            opts.overwrite = self.overwrite;
            sinks.push(Box::new(FfmpegSink::new(opts)));
        }
        if let Some(path) = &self.gif {
            let mut opts = GifSinkOpts::new(path);
            opts.overwrite = self.overwrite;
            sinks.push(Box::new(GifSink::new(opts)));
        }
        sinks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/targets.rs"]
mod tests;
