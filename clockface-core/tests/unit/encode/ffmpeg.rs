use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::whole(30).unwrap(),
    }
}

fn args_of(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn begin_rejects_bad_config_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/out.mp4"));
    assert!(sink.begin(cfg(0, 10)).is_err());

    let bad_fps = SinkConfig {
        fps: Fps { num: 30, den: 0 },
        ..cfg(10, 10)
    };
    assert!(sink.begin(bad_fps).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/out.mp4"));
    let frame = FrameRGB::new(2, 2, vec![0; 12]).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}

#[test]
fn command_streams_rgb24_at_rational_rate() {
    let opts = FfmpegSinkOpts::new("out/clock.mp4");
    let args = args_of(&build_command(&opts, &cfg(600, 600)));

    let joined = args.join(" ");
    assert!(joined.starts_with("-y "));
    assert!(joined.contains("-pix_fmt rgb24 -s 600x600 -r 30/1 -i pipe:0"));
    assert!(!joined.contains("pad="));
    assert_eq!(args.last().map(String::as_str), Some("out/clock.mp4"));
}

#[test]
fn command_pads_odd_dimensions() {
    let mut opts = FfmpegSinkOpts::new("o.mp4");
    opts.overwrite = false;
    let args = args_of(&build_command(&opts, &cfg(601, 400)));
    assert_eq!(args[0], "-n");
    assert!(args.iter().any(|a| a.starts_with("pad=")));
}

#[test]
fn frame_checks_catch_order_and_size() {
    let mut last = None;
    check_frame_order(&mut last, FrameIndex(0)).unwrap();
    check_frame_order(&mut last, FrameIndex(1)).unwrap();
    assert!(check_frame_order(&mut last, FrameIndex(1)).is_err());

    let frame = FrameRGB::new(2, 2, vec![0; 12]).unwrap();
    assert!(check_frame_size(&cfg(2, 2), &frame).is_ok());
    assert!(check_frame_size(&cfg(4, 2), &frame).is_err());
}
