use super::*;
use crate::{
    clock::{
        face::ClockFace,
        geometry::{HandPositions, dial_angle},
    },
    config::ClockConfig,
};

fn rasterizer(canvas: Canvas) -> SvgRasterizer {
    SvgRasterizer::with_fontdb(canvas, Arc::new(usvg::fontdb::Database::new()))
}

#[test]
fn renders_face_and_hands() {
    let cfg = ClockConfig::default();
    let frame = rasterizer(cfg.canvas)
        .render(&ClockFace::new(&cfg).frame_svg(&HandPositions::at(0, 2.0)))
        .unwrap();

    assert_eq!((frame.width, frame.height), (600, 600));
    // Outside the dial.
    assert_eq!(frame.pixel(0, 0), [255, 255, 255]);
    // Inside the dial, away from hands, ticks and numerals.
    assert_eq!(frame.pixel(200, 300), [0xf0, 0xf0, 0xf0]);
    // All hands start at 12, so the column above the centre is painted.
    let painted = (296..304).any(|x| frame.pixel(x, 280) != [0xf0, 0xf0, 0xf0]);
    assert!(painted);
}

#[test]
fn scales_document_to_canvas() {
    let canvas = Canvas {
        width: 20,
        height: 10,
    };
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="1"><rect width="2" height="1" fill="red"/></svg>"#;
    let frame = rasterizer(canvas).render(svg).unwrap();
    assert_eq!(frame.data.len(), 20 * 10 * 3);
    assert_eq!(frame.pixel(19, 9), [255, 0, 0]);
}

#[test]
fn invalid_svg_is_an_error() {
    let canvas = Canvas {
        width: 4,
        height: 4,
    };
    assert!(rasterizer(canvas).render("<not-svg").is_err());
}

fn numeral_ink(frame: &FrameRGB, cx: f64, cy: f64) -> usize {
    let (x0, y0) = ((cx - 16.0).max(0.0) as u32, (cy - 15.0).max(0.0) as u32);
    let mut count = 0;
    for y in y0..(y0 + 30).min(frame.height) {
        for x in x0..(x0 + 32).min(frame.width) {
            let [r, g, b] = frame.pixel(x, y);
            // Dark blue, including anti-aliased edges over the light face.
            if u16::from(b) > u16::from(r) + 40 && u16::from(b) > u16::from(g) + 40 {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn default_numerals_are_drawn_with_system_fonts() {
    let cfg = ClockConfig::default();
    let rasterizer = SvgRasterizer::new(cfg.canvas).unwrap();
    if rasterizer.options.fontdb.is_empty() {
        eprintln!("no system fonts installed; skipping numeral check");
        return;
    }
    let face = ClockFace::new(&cfg);
    let frame = rasterizer
        .render(&face.frame_svg(&HandPositions::at(0, cfg.speed)))
        .unwrap();

    for hour in [12.0, 3.0, 6.0, 9.0] {
        let at = face
            .layout()
            .polar(cfg.numeral_radius, dial_angle(hour, cfg.direction));
        let ink = numeral_ink(&frame, at.x, at.y);
        assert!(ink > 0, "numeral {hour} not drawn at ({:.0}, {:.0})", at.x, at.y);
    }
}

#[test]
fn unknown_family_falls_back_to_an_installed_face() {
    let mut cfg = ClockConfig::default();
    cfg.font_family = "No Such Family 1234".to_owned();
    let rasterizer = SvgRasterizer::new(cfg.canvas).unwrap();
    if rasterizer.options.fontdb.is_empty() {
        eprintln!("no system fonts installed; skipping fallback check");
        return;
    }
    let face = ClockFace::new(&cfg);
    let frame = rasterizer
        .render(&face.frame_svg(&HandPositions::at(0, cfg.speed)))
        .unwrap();
    let at = face
        .layout()
        .polar(cfg.numeral_radius, dial_angle(3.0, cfg.direction));
    assert!(numeral_ink(&frame, at.x, at.y) > 0);
}
