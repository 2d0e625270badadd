use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ClockfaceError, ClockfaceResult};
use crate::render::frame::FrameRGB;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl FfmpegSinkOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams raw RGB frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn label(&self) -> String {
        self.opts.out_path.display().to_string()
    }

    fn begin(&mut self, cfg: SinkConfig) -> ClockfaceResult<()> {
        validate_sink_config(&cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(ClockfaceError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(ClockfaceError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = build_command(&self.opts, &cfg);
        let mut child = cmd.spawn().map_err(|e| {
            ClockfaceError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ClockfaceError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| ClockfaceError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> ClockfaceResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| ClockfaceError::encode("ffmpeg sink not started"))?;
        check_frame_order(&mut self.last_idx, idx)?;
        check_frame_size(cfg, frame)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ClockfaceError::encode("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&frame.data).map_err(|e| {
            ClockfaceError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> ClockfaceResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| ClockfaceError::encode("ffmpeg sink not started"))?;

        let status = child.wait().map_err(|e| {
            ClockfaceError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| ClockfaceError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| ClockfaceError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(ClockfaceError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        self.cfg = None;
        Ok(())
    }
}

pub(crate) fn validate_sink_config(cfg: &SinkConfig) -> ClockfaceResult<()> {
    cfg.fps.validate()?;
    if cfg.width == 0 || cfg.height == 0 {
        return Err(ClockfaceError::validation(
            "sink width/height must be non-zero",
        ));
    }
    Ok(())
}

pub(crate) fn check_frame_order(
    last: &mut Option<FrameIndex>,
    idx: FrameIndex,
) -> ClockfaceResult<()> {
    if let Some(prev) = *last
        && idx.0 <= prev.0
    {
        return Err(ClockfaceError::encode(
            "sink received out-of-order frame index",
        ));
    }
    *last = Some(idx);
    Ok(())
}

pub(crate) fn check_frame_size(cfg: &SinkConfig, frame: &FrameRGB) -> ClockfaceResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(ClockfaceError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    if frame.data.len() != cfg.width as usize * cfg.height as usize * 3 {
        return Err(ClockfaceError::validation(
            "frame.data size mismatch with width*height*3",
        ));
    }
    Ok(())
}

fn build_command(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    if opts.overwrite {
        cmd.arg("-y");
    } else {
        cmd.arg("-n");
    }

    cmd.args([
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
        "-s",
        &format!("{}x{}", cfg.width, cfg.height),
    ]);
    push_input_fps(&mut cmd, cfg.fps);
    cmd.args(["-i", "pipe:0", "-an"]);

    // yuv420p needs even dimensions; pad odd inputs by one pixel instead of failing.
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        cmd.args(["-vf", "pad=ceil(iw/2)*2:ceil(ih/2)*2"]);
    }

    cmd.args([
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ]);
    cmd.arg(&opts.out_path);
    cmd
}

fn push_input_fps(cmd: &mut Command, fps: Fps) {
    // For rawvideo input, `-r` before `-i` sets the input framerate.
    cmd.args(["-r", &format!("{}/{}", fps.num, fps.den)]);
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ClockfaceResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
