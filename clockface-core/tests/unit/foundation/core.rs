use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps { num: 10, den: 0 }.validate().is_err());
}

#[test]
fn fps_frame_duration_matches_rate() {
    let fps = Fps::whole(10).unwrap();
    assert!((fps.frame_duration_secs() - 0.1).abs() < 1e-12);
    assert_eq!(fps.frame_duration().as_millis(), 100);
}

#[test]
fn canvas_validate_rejects_empty() {
    assert!(Canvas { width: 0, height: 4 }.validate().is_err());
    assert!(Canvas { width: 4, height: 4 }.validate().is_ok());
}
