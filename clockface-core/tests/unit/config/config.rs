use super::*;

#[test]
fn clock_defaults_match_variant() {
    let cw = ClockConfig::default();
    assert_eq!(cw.direction, Direction::Clockwise);
    assert_eq!(cw.speed, 2.0);
    assert_eq!(cw.outputs.gif, Some(PathBuf::from("clockwise.gif")));

    let ccw = ClockConfig::for_direction(Direction::CounterClockwise);
    assert_eq!(ccw.speed, 1.0);
    assert_eq!(
        ccw.outputs.video,
        Some(PathBuf::from("counter_clockwise.mp4"))
    );
    assert_eq!(ccw.frames, 60);
    assert_eq!(ccw.fps, Fps { num: 10, den: 1 });
    cw.validate().unwrap();
    ccw.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: ClockConfig =
        serde_json::from_str(r##"{ "frames": 12, "numeral_color": "#ff0000" }"##).unwrap();
    assert_eq!(cfg.frames, 12);
    assert_eq!(cfg.numeral_color, Rgb8::new(255, 0, 0));
    assert_eq!(cfg.hour_hand, ClockConfig::default().hour_hand);
}

#[test]
fn direction_uses_snake_case() {
    let cfg: ClockConfig = serde_json::from_str(r#"{ "direction": "counter_clockwise" }"#).unwrap();
    assert_eq!(cfg.direction, Direction::CounterClockwise);
}

#[test]
fn config_json_roundtrips_with_defaults() {
    let cfg = OverlayConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    let de: OverlayConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(de, cfg);

    let empty: CompositeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, CompositeConfig::default());
}

#[test]
fn validate_rejects_bad_values() {
    let mut clock = ClockConfig::default();
    clock.frames = 0;
    assert!(clock.validate().is_err());

    let mut clock = ClockConfig::default();
    clock.second_hand.length = -1.0;
    assert!(clock.validate().is_err());

    let mut overlay = OverlayConfig::default();
    overlay.near = 60.0;
    assert!(overlay.validate().is_err());

    let mut overlay = OverlayConfig::default();
    overlay.rotation_steps = 0;
    assert!(overlay.validate().is_err());

    let mut composite = CompositeConfig::default();
    composite.loops = 0;
    assert!(composite.validate().is_err());

    let mut composite = CompositeConfig::default();
    composite.fps = Fps { num: 0, den: 1 };
    assert!(composite.validate().is_err());
}

#[test]
fn from_path_reports_missing_and_malformed_files() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("target/unit_config");
    std::fs::create_dir_all(&dir).unwrap();

    let missing = CompositeConfig::from_path(&dir.join("nope.json")).unwrap_err();
    assert!(missing.to_string().contains("nope.json"));

    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(
        CompositeConfig::from_path(&bad),
        Err(ClockfaceError::Serde(_))
    ));

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "loops": 3 }"#).unwrap();
    assert_eq!(CompositeConfig::from_path(&good).unwrap().loops, 3);
}
