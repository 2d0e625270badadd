use std::path::Path;

use super::*;
use crate::assets::decode::decode_gif_frames;
use crate::foundation::core::Fps;

fn solid(v: u8) -> FrameRGB {
    FrameRGB::new(6, 4, vec![v; 6 * 4 * 3]).unwrap()
}

#[test]
fn writes_a_decodable_looping_gif() {
    let out = Path::new("target/unit_gif/three.gif");
    let mut sink = GifSink::new(GifSinkOpts::new(out));
    sink.begin(SinkConfig {
        width: 6,
        height: 4,
        fps: Fps::whole(10).unwrap(),
    })
    .unwrap();
    for (i, v) in [0u8, 120, 250].into_iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), &solid(v)).unwrap();
    }
    sink.end().unwrap();

    let bytes = std::fs::read(out).unwrap();
    let frames = decode_gif_frames(&bytes).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].dimensions(), (6, 4));
}

#[test]
fn rejects_mismatched_frames() {
    let mut sink = GifSink::new(GifSinkOpts::new("target/unit_gif/mismatch.gif"));
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::whole(30).unwrap(),
    })
    .unwrap();
    assert!(sink.push_frame(FrameIndex(0), &solid(1)).is_err());
}

#[test]
fn end_without_begin_is_an_error() {
    let mut sink = GifSink::new(GifSinkOpts::new("target/unit_gif/none.gif"));
    assert!(sink.end().is_err());
}
