use kurbo::Line;

use crate::{
    clock::geometry::{DIAL_UNITS, DialLayout, HandPositions, dial_angle},
    config::{ClockConfig, Direction, HandStyle},
    foundation::color::Rgb8,
};

/// SVG source of the clock.
///
/// The static face is serialized once; each frame appends its three hands and closes the document.
#[derive(Clone, Debug)]
pub struct ClockFace {
    head: String,
    layout: DialLayout,
    pt_to_px: f64,
    hands: [HandStyle; 3],
    direction: Direction,
}

impl ClockFace {
    /// Lay out the static face: backgrounds, ring, ticks and numerals.
    pub fn new(cfg: &ClockConfig) -> Self {
        let layout = DialLayout::new(cfg.canvas, cfg.dial_radius, cfg.dial_fill);
        let pt_to_px = cfg.dpi / 72.0;
        let (w, h) = (cfg.canvas.width, cfg.canvas.height);

        let mut head = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        head.push_str(&format!(
            r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
            cfg.figure_background.to_hex()
        ));
        head.push_str(&format!(
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}"/>"#,
            layout.center.x,
            layout.center.y,
            layout.to_px(cfg.dial_radius),
            cfg.face_background.to_hex()
        ));

        let line_w = cfg.line_width_pt * pt_to_px;
        head.push_str(&format!(
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="none" stroke="{}" stroke-width="{line_w:.3}"/>"#,
            layout.center.x,
            layout.center.y,
            layout.to_px(cfg.ring_radius),
            cfg.line_color.to_hex()
        ));

        let minor_count = (DIAL_UNITS / cfg.minor_tick_step).round() as usize;
        for i in 0..minor_count {
            let angle = dial_angle(i as f64 * cfg.minor_tick_step, cfg.direction);
            let tick = layout.radial(
                cfg.ring_radius,
                cfg.ring_radius - cfg.minor_tick_length,
                angle,
            );
            push_line(&mut head, tick, cfg.line_color, line_w, "butt");
        }
        for hour in 1..=12u32 {
            let angle = dial_angle(f64::from(hour), cfg.direction);
            let tick = layout.radial(
                cfg.ring_radius,
                cfg.ring_radius - cfg.major_tick_length,
                angle,
            );
            push_line(&mut head, tick, cfg.line_color, line_w, "butt");
        }

        let font_px = cfg.numeral_size_pt * pt_to_px;
        for hour in 1..=12u32 {
            let at = layout.polar(cfg.numeral_radius, dial_angle(f64::from(hour), cfg.direction));
            head.push_str(&format!(
                r#"<text x="{:.3}" y="{:.3}" dy="0.35em" font-family="{}" font-size="{font_px:.3}" fill="{}" text-anchor="middle">{hour}</text>"#,
                at.x,
                at.y,
                escape_attr(&cfg.font_family),
                cfg.numeral_color.to_hex()
            ));
        }

        Self {
            head,
            layout,
            pt_to_px,
            hands: [cfg.hour_hand, cfg.minute_hand, cfg.second_hand],
            direction: cfg.direction,
        }
    }

    /// Complete SVG document with the hands at `positions`.
    pub fn frame_svg(&self, positions: &HandPositions) -> String {
        let mut svg = self.head.clone();
        let [hour, minute, second] = &self.hands;
        for (style, pos) in [
            (hour, positions.hours),
            (minute, positions.minutes),
            (second, positions.seconds),
        ] {
            let seg = self.hand_segment(style, pos);
            push_line(
                &mut svg,
                seg,
                style.color,
                style.width_pt * self.pt_to_px,
                "square",
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Pixel segment of a hand drawn at dial `position`.
    pub fn hand_segment(&self, style: &HandStyle, position: f64) -> Line {
        self.layout
            .radial(0.0, style.length, dial_angle(position, self.direction))
    }

    /// Pixel layout of the dial.
    pub fn layout(&self) -> DialLayout {
        self.layout
    }
}

fn push_line(out: &mut String, line: Line, color: Rgb8, width: f64, cap: &str) {
    out.push_str(&format!(
        r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{width:.3}" stroke-linecap="{cap}"/>"#,
        line.p0.x,
        line.p0.y,
        line.p1.x,
        line.p1.y,
        color.to_hex()
    ));
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
#[path = "../../tests/unit/clock/face.rs"]
mod tests;
