use super::*;

fn solid(w: u32, h: u32, v: u8) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba([v, v, v, 255]))
}

#[test]
fn rejects_empty_and_mismatched_frames() {
    assert!(AnimatedSequence::new(Vec::new()).is_err());
    assert!(AnimatedSequence::new(vec![solid(0, 2, 0)]).is_err());

    let err = AnimatedSequence::new(vec![solid(2, 2, 0), solid(3, 2, 0)]).unwrap_err();
    assert!(err.to_string().contains("frame 1"));
}

#[test]
fn cyclic_wraps_past_the_end() {
    let seq = AnimatedSequence::new(vec![solid(1, 1, 10), solid(1, 1, 20), solid(1, 1, 30)])
        .unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.cyclic(0).get_pixel(0, 0).0[0], 10);
    assert_eq!(seq.cyclic(4).get_pixel(0, 0).0[0], 20);
    assert_eq!(seq.cyclic(5).get_pixel(0, 0).0[0], 30);
}
