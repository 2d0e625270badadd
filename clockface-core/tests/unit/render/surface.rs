use super::*;
use crate::render::frame::FrameRGB;

fn camera(width: u32, height: u32) -> Camera {
    Camera {
        fov_y_deg: 45.0,
        aspect: width as f32 / height as f32,
        near: 0.1,
        far: 50.0,
        distance: 5.0,
    }
}

fn two_row_image(top: [u8; 4], bottom: [u8; 4]) -> image::RgbaImage {
    let mut data = Vec::new();
    data.extend_from_slice(&top);
    data.extend_from_slice(&bottom);
    image::RgbaImage::from_raw(1, 2, data).unwrap()
}

fn surface_with_camera(size: u32) -> SoftwareSurface {
    let mut surface = SoftwareSurface::new(size, size).unwrap();
    surface.set_camera(camera(size, size));
    surface
}

#[test]
fn new_rejects_empty_surface() {
    assert!(SoftwareSurface::new(0, 4).is_err());
    assert!(SoftwareSurface::new(4, 0).is_err());
}

#[test]
fn upload_reverses_rows_and_can_drop_alpha() {
    let img = two_row_image([255, 0, 0, 10], [0, 0, 255, 20]);

    let rgb = Texture::upload_flipped_rgb(&img).unwrap();
    let bottom = rgb.sample_bilinear(0.5, 0.0);
    assert!((bottom.z - 1.0).abs() < 1e-6);
    assert!((bottom.w - 1.0).abs() < 1e-6);

    let rgba = Texture::upload_flipped_rgba(&img).unwrap();
    let top = rgba.sample_bilinear(0.5, 1.0);
    assert!((top.x - 1.0).abs() < 1e-6);
    assert!((top.w - 10.0 / 255.0).abs() < 1e-6);
}

#[test]
fn bilinear_blends_neighbouring_texels() {
    let img = image::RgbaImage::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
    let tex = Texture::upload_flipped_rgba(&img).unwrap();
    let mid = tex.sample_bilinear(0.5, 0.5);
    assert!((mid.x - 0.5).abs() < 1e-6);
    // Clamped at the edges.
    assert!(tex.sample_bilinear(0.0, 0.5).x.abs() < 1e-6);
    assert!((tex.sample_bilinear(1.0, 0.5).x - 1.0).abs() < 1e-6);
}

#[test]
fn background_fills_viewport_and_reads_back_upright() {
    let mut surface = surface_with_camera(64);
    surface.clear([0, 0, 0]);
    let img = two_row_image([255, 0, 0, 255], [0, 0, 255, 255]);
    let bg = Texture::upload_flipped_rgb(&img).unwrap();
    surface
        .draw_quad(
            &TexturedQuad::centered_xy(2.5),
            &bg,
            Mat4::IDENTITY,
            Blend::Replace,
        )
        .unwrap();

    let (w, h) = surface.size();
    let frame = FrameRGB::from_bottom_up(w, h, surface.read_pixels()).unwrap();
    assert_eq!(frame.pixel(0, 0), [255, 0, 0]);
    assert_eq!(frame.pixel(63, 0), [255, 0, 0]);
    assert_eq!(frame.pixel(0, 63), [0, 0, 255]);
    assert_eq!(frame.pixel(63, 63), [0, 0, 255]);
}

#[test]
fn transparent_texels_leave_destination_untouched() {
    let mut surface = surface_with_camera(32);
    surface.clear([10, 20, 30]);
    let clear_tex = Texture::upload_flipped_rgba(&image::RgbaImage::new(4, 4)).unwrap();
    surface
        .draw_quad(
            &TexturedQuad::centered_xy(1.0),
            &clear_tex,
            Mat4::IDENTITY,
            Blend::SrcAlphaOver,
        )
        .unwrap();
    assert!(surface.read_pixels().chunks_exact(3).all(|px| px == [10, 20, 30]));
}

#[test]
fn opaque_texels_cover_centre_only() {
    let mut surface = surface_with_camera(32);
    surface.clear([0, 0, 0]);
    let white = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]));
    let tex = Texture::upload_flipped_rgba(&white).unwrap();
    surface
        .draw_quad(
            &TexturedQuad::centered_xy(1.0),
            &tex,
            Mat4::IDENTITY,
            Blend::SrcAlphaOver,
        )
        .unwrap();

    let frame = FrameRGB::from_bottom_up(32, 32, surface.read_pixels()).unwrap();
    assert_eq!(frame.pixel(16, 16), [255, 255, 255]);
    assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
    assert_eq!(frame.pixel(31, 31), [0, 0, 0]);
}

#[test]
fn edge_on_quad_draws_nothing() {
    let mut surface = surface_with_camera(32);
    surface.clear([1, 2, 3]);
    let white = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
    let tex = Texture::upload_flipped_rgba(&white).unwrap();
    // Quarter turn about Y with exact zeros.
    let model = Mat4::from_mat3(Mat3::from_cols(
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        Vec3::new(1.0, 0.0, 0.0),
    ));
    surface
        .draw_quad(&TexturedQuad::centered_xy(1.0), &tex, model, Blend::Replace)
        .unwrap();
    assert!(surface.read_pixels().chunks_exact(3).all(|px| px == [1, 2, 3]));
}

#[test]
fn quad_beyond_far_plane_is_clipped() {
    let mut surface = surface_with_camera(16);
    surface.clear([0, 0, 0]);
    let white = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
    let tex = Texture::upload_flipped_rgba(&white).unwrap();
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -100.0));
    surface
        .draw_quad(&TexturedQuad::centered_xy(50.0), &tex, model, Blend::Replace)
        .unwrap();
    assert!(surface.read_pixels().iter().all(|&v| v == 0));
}

#[test]
fn quad_point_spans_edges() {
    let quad = TexturedQuad::centered_xy(1.0);
    assert_eq!(quad.point(0.0, 0.0), Vec3::new(-1.0, -1.0, 0.0));
    assert_eq!(quad.point(1.0, 1.0), Vec3::new(1.0, 1.0, 0.0));
}
