use super::*;

#[test]
fn disabled_throttle_never_sleeps() {
    let mut t = FrameThrottle::disabled();
    assert_eq!(t.period(), None);
    let start = Instant::now();
    for _ in 0..1000 {
        t.tick();
    }
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn throttle_holds_frame_period() {
    let mut t = FrameThrottle::new(Fps { num: 100, den: 1 });
    assert_eq!(t.period().map(|p| p.as_millis()), Some(10));
    let start = Instant::now();
    // First tick is free; the next three each wait for one period.
    for _ in 0..4 {
        t.tick();
    }
    assert!(start.elapsed() >= Duration::from_millis(29));
}
