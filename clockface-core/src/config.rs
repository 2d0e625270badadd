//! Run configuration for the three pipelines.
//!
//! Every struct deserializes from JSON with `#[serde(default)]`, so a config file only needs the
//! fields it changes. Call `validate()` before running.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    encode::OutputTargets,
    foundation::{
        color::Rgb8,
        core::{Canvas, Fps},
        error::{ClockfaceError, ClockfaceResult},
    },
};

/// Direction the dial is numbered and the hands sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 12 → 1 → 2 going right from the top.
    #[default]
    Clockwise,
    /// 12 → 1 → 2 going left from the top.
    CounterClockwise,
}

impl Direction {
    /// File stem used for default outputs.
    pub fn output_stem(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter_clockwise",
        }
    }

    /// Default hand speed multiplier for this variant.
    pub fn default_speed(self) -> f64 {
        match self {
            Self::Clockwise => 2.0,
            Self::CounterClockwise => 1.0,
        }
    }
}

/// Length (dial units), stroke width (points) and colour of one clock hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandStyle {
    /// Distance from the centre to the tip, in dial units.
    pub length: f64,
    /// Stroke width in points.
    pub width_pt: f64,
    /// Stroke colour.
    pub color: Rgb8,
}

/// Clock-face animator settings.
///
/// Radii and lengths are in dial units: `dial_radius` units span the radius of the drawn dial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Output frame size in pixels.
    pub canvas: Canvas,
    /// Dots per inch; converts point sizes to pixels.
    pub dpi: f64,
    /// Data radius at the dial edge.
    pub dial_radius: f64,
    /// Dial diameter as a fraction of the shorter canvas side.
    pub dial_fill: f64,
    /// Colour outside the dial.
    pub figure_background: Rgb8,
    /// Colour inside the dial.
    pub face_background: Rgb8,
    /// Colour of the ring and ticks.
    pub line_color: Rgb8,
    /// Stroke width of the ring and ticks, in points.
    pub line_width_pt: f64,
    /// Radius of the outer ring; ticks point inward from it.
    pub ring_radius: f64,
    /// Length of the hour ticks.
    pub major_tick_length: f64,
    /// Spacing of minor ticks on the 12-unit dial scale.
    pub minor_tick_step: f64,
    /// Length of the minor ticks.
    pub minor_tick_length: f64,
    /// Radius the hour numerals are centred on.
    pub numeral_radius: f64,
    /// Numeral font size in points.
    pub numeral_size_pt: f64,
    /// Numeral colour.
    pub numeral_color: Rgb8,
    /// Numeral font family (any CSS generic or installed family name).
    pub font_family: String,
    /// Hour hand style.
    pub hour_hand: HandStyle,
    /// Minute hand style.
    pub minute_hand: HandStyle,
    /// Second hand style.
    pub second_hand: HandStyle,
    /// Number of frames rendered.
    pub frames: u64,
    /// Output frame rate.
    pub fps: Fps,
    /// Dial units the second hand advances per frame.
    pub speed: f64,
    /// Numbering and sweep direction.
    pub direction: Direction,
    /// Encoded artifacts.
    pub outputs: OutputTargets,
    /// Optional PNG of the first frame.
    pub preview: Option<PathBuf>,
}

impl ClockConfig {
    /// Defaults for one direction variant, including its speed and output names.
    pub fn for_direction(direction: Direction) -> Self {
        Self {
            canvas: Canvas {
                width: 600,
                height: 600,
            },
            dpi: 100.0,
            dial_radius: 110.0,
            dial_fill: 0.77,
            figure_background: Rgb8::new(0xff, 0xff, 0xff),
            face_background: Rgb8::new(0xf0, 0xf0, 0xf0),
            line_color: Rgb8::new(0x00, 0x00, 0x00),
            line_width_pt: 0.5,
            ring_radius: 100.0,
            major_tick_length: 2.0,
            minor_tick_step: 0.2,
            minor_tick_length: 1.0,
            numeral_radius: 93.0,
            numeral_size_pt: 15.0,
            numeral_color: Rgb8::new(0x00, 0x00, 0x8b),
            font_family: "sans-serif".to_string(),
            hour_hand: HandStyle {
                length: 40.0,
                width_pt: 4.0,
                color: Rgb8::new(0x00, 0x64, 0x00),
            },
            minute_hand: HandStyle {
                length: 70.0,
                width_pt: 2.0,
                color: Rgb8::new(0x80, 0x00, 0x80),
            },
            second_hand: HandStyle {
                length: 80.0,
                width_pt: 1.0,
                color: Rgb8::new(0xff, 0xa5, 0x00),
            },
            frames: 60,
            fps: Fps { num: 10, den: 1 },
            speed: direction.default_speed(),
            direction,
            outputs: OutputTargets::with_stem(direction.output_stem()),
            preview: None,
        }
    }

    /// Reject values the renderer cannot honour.
    pub fn validate(&self) -> ClockfaceResult<()> {
        self.canvas.validate()?;
        self.fps.validate()?;
        if self.frames == 0 {
            return Err(ClockfaceError::validation("clock frames must be > 0"));
        }
        positive("dpi", self.dpi)?;
        positive("dial_radius", self.dial_radius)?;
        positive("minor_tick_step", self.minor_tick_step)?;
        if !(self.dial_fill > 0.0 && self.dial_fill <= 1.0) {
            return Err(ClockfaceError::validation("dial_fill must be in (0, 1]"));
        }
        if !self.speed.is_finite() {
            return Err(ClockfaceError::validation("speed must be finite"));
        }
        for (name, hand) in [
            ("hour_hand", &self.hour_hand),
            ("minute_hand", &self.minute_hand),
            ("second_hand", &self.second_hand),
        ] {
            positive(&format!("{name}.length"), hand.length)?;
            positive(&format!("{name}.width_pt"), hand.width_pt)?;
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> ClockfaceResult<Self> {
        read_json(path)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::for_direction(Direction::Clockwise)
    }
}

/// 3D overlay renderer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Still image drawn behind the rotating quad; also sets the viewport size.
    pub background: PathBuf,
    /// Animation mapped onto the rotating quad.
    pub clock: PathBuf,
    /// Side length every animation frame is resized to.
    pub overlay_size: u32,
    /// Steps in one full revolution.
    pub rotation_steps: usize,
    /// Hard cap on captured frames.
    pub max_frames: u64,
    /// Capture and output frame rate.
    pub fps: Fps,
    /// Sleep between iterations to hold `fps`; off for batch rendering.
    pub throttle: bool,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Distance from the eye to the `z = 0` plane.
    pub camera_distance: f32,
    /// Half side of the background quad.
    pub background_half_extent: f32,
    /// Half side of the rotating quad.
    pub overlay_half_extent: f32,
    /// Colour the surface is cleared to each iteration.
    pub clear_color: Rgb8,
    /// Encoded artifacts.
    pub outputs: OutputTargets,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            background: PathBuf::from("old_young.png"),
            clock: PathBuf::from("clockwise.gif"),
            overlay_size: 400,
            rotation_steps: 360,
            max_frames: 360,
            fps: Fps { num: 30, den: 1 },
            throttle: true,
            fov_y_deg: 45.0,
            near: 0.1,
            far: 50.0,
            camera_distance: 5.0,
            background_half_extent: 2.5,
            overlay_half_extent: 1.0,
            clear_color: Rgb8::new(0, 0, 0),
            outputs: OutputTargets::with_stem("3d_clock_overlay"),
        }
    }
}

impl OverlayConfig {
    /// Reject values the renderer cannot honour.
    pub fn validate(&self) -> ClockfaceResult<()> {
        self.fps.validate()?;
        if self.overlay_size == 0 {
            return Err(ClockfaceError::validation("overlay_size must be > 0"));
        }
        if self.rotation_steps == 0 {
            return Err(ClockfaceError::validation("rotation_steps must be > 0"));
        }
        if self.max_frames == 0 {
            return Err(ClockfaceError::validation("max_frames must be > 0"));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(ClockfaceError::validation("fov_y_deg must be in (0, 180)"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ClockfaceError::validation(
                "clip planes must satisfy 0 < near < far",
            ));
        }
        positive("camera_distance", f64::from(self.camera_distance))?;
        positive(
            "background_half_extent",
            f64::from(self.background_half_extent),
        )?;
        positive("overlay_half_extent", f64::from(self.overlay_half_extent))?;
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> ClockfaceResult<Self> {
        read_json(path)
    }
}

/// Static compositor settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Still image the animation is blended onto.
    pub background: PathBuf,
    /// Animation blended at the centre of the background.
    pub clock: PathBuf,
    /// Side length every animation frame is resized to.
    pub overlay_size: u32,
    /// Number of times the source animation is played back to back.
    pub loops: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Encoded artifacts.
    pub outputs: OutputTargets,
    /// Optional PNG of the first composited frame.
    pub preview: Option<PathBuf>,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            background: PathBuf::from("old_young.png"),
            clock: PathBuf::from("clockwise.gif"),
            overlay_size: 400,
            loops: 2,
            fps: Fps { num: 10, den: 1 },
            outputs: OutputTargets::with_stem("overlay_clock"),
            preview: None,
        }
    }
}

impl CompositeConfig {
    /// Reject values the renderer cannot honour.
    pub fn validate(&self) -> ClockfaceResult<()> {
        self.fps.validate()?;
        if self.overlay_size == 0 {
            return Err(ClockfaceError::validation("overlay_size must be > 0"));
        }
        if self.loops == 0 {
            return Err(ClockfaceError::validation("loops must be > 0"));
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> ClockfaceResult<Self> {
        read_json(path)
    }
}

fn positive(name: &str, v: f64) -> ClockfaceResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ClockfaceError::validation(format!(
            "{name} must be finite and > 0, got {v}"
        )))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ClockfaceResult<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| ClockfaceError::serde(format!("config '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
