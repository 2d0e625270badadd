use std::path::PathBuf;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_loader").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_input_names_the_path() {
    let err = FsImageLoader
        .load_background(Path::new("does/not/exist.png"))
        .unwrap_err();
    assert!(matches!(err, ClockfaceError::Validation(_)));
    assert!(err.to_string().contains("does/not/exist.png"));
}

#[test]
fn loads_png_background_and_gif_sequence() {
    let dir = scratch_dir("png_gif");

    let bg_path = dir.join("bg.png");
    image::RgbaImage::from_pixel(8, 6, image::Rgba([1, 2, 3, 255]))
        .save(&bg_path)
        .unwrap();

    let gif_path = dir.join("clock.gif");
    {
        let file = std::fs::File::create(&gif_path).unwrap();
        let mut enc = image::codecs::gif::GifEncoder::new(file);
        for v in [0u8, 128] {
            let f = image::RgbaImage::from_pixel(5, 3, image::Rgba([v, v, v, 255]));
            enc.encode_frame(image::Frame::new(f)).unwrap();
        }
    }

    let bg = FsImageLoader.load_background(&bg_path).unwrap();
    assert_eq!(bg.dimensions(), (8, 6));

    let seq = FsImageLoader.load_sequence(&gif_path, 4).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!((seq.width(), seq.height()), (4, 4));
}

#[test]
fn load_sequence_rejects_zero_size() {
    let err = FsImageLoader
        .load_sequence(Path::new("whatever.gif"), 0)
        .unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}
