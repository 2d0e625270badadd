use std::path::{Path, PathBuf};

use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// Basic metadata about a source video file.
#[derive(Clone, Debug)]
pub struct VideoSourceInfo {
    /// Source path used for probing/decoding.
    pub source_path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Probe source video dimensions through `ffprobe`.
pub fn probe_video(source_path: &Path) -> ClockfaceResult<VideoSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
    }

    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(source_path)
        .output()
        .map_err(|e| ClockfaceError::decode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ClockfaceError::decode(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| ClockfaceError::decode(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| ClockfaceError::decode("no video stream found"))?;
    let width = video_stream
        .width
        .ok_or_else(|| ClockfaceError::decode("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .ok_or_else(|| ClockfaceError::decode("missing video height from ffprobe"))?;

    Ok(VideoSourceInfo {
        source_path: source_path.to_path_buf(),
        width,
        height,
    })
}

/// Decode every frame of a video file into RGBA8 images using the system `ffmpeg`.
pub fn decode_video_frames(source: &VideoSourceInfo) -> ClockfaceResult<Vec<image::RgbaImage>> {
    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(&source.source_path)
        .args(["-f", "rawvideo", "-pix_fmt", "rgba", "pipe:1"])
        .output()
        .map_err(|e| {
            ClockfaceError::decode(format!("failed to run ffmpeg for video decode: {e}"))
        })?;

    if !out.status.success() {
        return Err(ClockfaceError::decode(format!(
            "ffmpeg video decode failed for '{}': {}",
            source.source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let frame_len = source.width as usize * source.height as usize * 4;
    if frame_len == 0 {
        return Err(ClockfaceError::decode(
            "decoded video frame size is zero (invalid source dimensions)",
        ));
    }
    if out.stdout.is_empty() || !out.stdout.len().is_multiple_of(frame_len) {
        return Err(ClockfaceError::decode(format!(
            "decoded video has invalid size: got {} bytes, expected multiples of {frame_len}",
            out.stdout.len()
        )));
    }

    out.stdout
        .chunks_exact(frame_len)
        .map(|chunk| {
            image::RgbaImage::from_raw(source.width, source.height, chunk.to_vec())
                .ok_or_else(|| ClockfaceError::decode("video frame buffer size mismatch"))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
