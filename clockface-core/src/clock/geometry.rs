use std::f64::consts::TAU;

use kurbo::Line;

use crate::{
    config::Direction,
    foundation::{
        core::{Canvas, Point, Vec2},
        math::rem_euclid_f64,
    },
};

/// Units in one revolution of the dial.
pub const DIAL_UNITS: f64 = 12.0;

/// Fractional positions of the three hands on the 12-unit dial scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPositions {
    /// Hour hand position.
    pub hours: f64,
    /// Minute hand position.
    pub minutes: f64,
    /// Second hand position.
    pub seconds: f64,
}

impl HandPositions {
    /// Positions at `frame` when the second hand advances `speed` units per frame.
    ///
    /// The minute hand moves 1/60 and the hour hand 1/720 as fast as the second hand.
    pub fn at(frame: u64, speed: f64) -> Self {
        let ticks = frame as f64 * speed;
        Self {
            hours: rem_euclid_f64(ticks / 720.0, DIAL_UNITS),
            minutes: rem_euclid_f64(ticks / 60.0, DIAL_UNITS),
            seconds: rem_euclid_f64(ticks, DIAL_UNITS),
        }
    }
}

/// Screen angle of a dial position, in radians clockwise from 12 o'clock, within `[0, 2π)`.
///
/// Counter-clockwise dials mirror the sweep, so position 3 lands at 9 o'clock on screen.
pub fn dial_angle(position: f64, direction: Direction) -> f64 {
    let turn = position * TAU / DIAL_UNITS;
    let signed = match direction {
        Direction::Clockwise => turn,
        Direction::CounterClockwise => -turn,
    };
    rem_euclid_f64(signed, TAU)
}

/// Mapping from dial units to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialLayout {
    /// Dial centre in pixels.
    pub center: Point,
    /// Pixels per dial unit.
    pub px_per_unit: f64,
}

impl DialLayout {
    /// Centre the dial on the canvas so `dial_radius` units span `dial_fill / 2` of the shorter
    /// side.
    pub fn new(canvas: Canvas, dial_radius: f64, dial_fill: f64) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let radius_px = w.min(h) * dial_fill / 2.0;
        Self {
            center: Point::new(w / 2.0, h / 2.0),
            px_per_unit: radius_px / dial_radius,
        }
    }

    /// Pixel position at dial radius `r` and screen angle `angle`.
    pub fn polar(&self, r: f64, angle: f64) -> Point {
        // Screen y grows downward, so 12 o'clock is -y.
        self.center + Vec2::new(angle.sin(), -angle.cos()) * (r * self.px_per_unit)
    }

    /// Radial segment between radii `r0` and `r1` along `angle`.
    pub fn radial(&self, r0: f64, r1: f64, angle: f64) -> Line {
        Line::new(self.polar(r0, angle), self.polar(r1, angle))
    }

    /// Convert a dial-unit length to pixels.
    pub fn to_px(&self, units: f64) -> f64 {
        units * self.px_per_unit
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/geometry.rs"]
mod tests;
