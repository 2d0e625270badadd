use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::foundation::{
    error::{ClockfaceError, ClockfaceResult},
    math::unorm_to_u8,
};

/// Texture as uploaded to a [`DrawSurface`].
///
/// Row 0 of `rgba` is sampled at texture coordinate `t = 0`, i.e. the bottom edge of a quad.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Upload an image with its rows reversed, keeping the alpha channel.
    ///
    /// The reversal puts the image's bottom row at `t = 0` so the image appears upright on a quad
    /// whose `t` axis points up.
    pub fn upload_flipped_rgba(img: &image::RgbaImage) -> ClockfaceResult<Self> {
        Self::upload_flipped(img, true)
    }

    /// Upload an image with its rows reversed, discarding alpha (every texel is opaque).
    pub fn upload_flipped_rgb(img: &image::RgbaImage) -> ClockfaceResult<Self> {
        Self::upload_flipped(img, false)
    }

    fn upload_flipped(img: &image::RgbaImage, keep_alpha: bool) -> ClockfaceResult<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ClockfaceError::render("cannot upload an empty texture"));
        }
        let stride = width as usize * 4;
        let mut rgba = Vec::with_capacity(stride * height as usize);
        for row in img.as_raw().chunks_exact(stride).rev() {
            rgba.extend_from_slice(row);
        }
        if !keep_alpha {
            for px in rgba.chunks_exact_mut(4) {
                px[3] = 255;
            }
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Texture width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = x.clamp(0, i64::from(self.width) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height) - 1) as usize;
        let off = (y * self.width as usize + x) * 4;
        let px = &self.rgba[off..off + 4];
        Vec4::new(
            f32::from(px[0]),
            f32::from(px[1]),
            f32::from(px[2]),
            f32::from(px[3]),
        ) / 255.0
    }

    /// Bilinear sample at normalized coordinates, clamped to the edge texels.
    pub fn sample_bilinear(&self, s: f32, t: f32) -> Vec4 {
        let x = s * self.width as f32 - 0.5;
        let y = t * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let row0 = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), fx);
        let row1 = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), fx);
        row0.lerp(row1, fy)
    }
}

/// Planar quad with texture coordinates spanning `[0, 1]²`.
///
/// `origin` carries texture coordinate `(0, 0)`; `origin + edge_s` carries `(1, 0)` and
/// `origin + edge_t` carries `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexturedQuad {
    /// Object-space corner at texture coordinate `(0, 0)`.
    pub origin: Vec3,
    /// Object-space edge along increasing `s`.
    pub edge_s: Vec3,
    /// Object-space edge along increasing `t`.
    pub edge_t: Vec3,
}

impl TexturedQuad {
    /// Axis-aligned quad in the `z = 0` plane spanning `[-half, half]` on x and y.
    pub fn centered_xy(half: f32) -> Self {
        Self {
            origin: Vec3::new(-half, -half, 0.0),
            edge_s: Vec3::new(2.0 * half, 0.0, 0.0),
            edge_t: Vec3::new(0.0, 2.0 * half, 0.0),
        }
    }

    /// Object-space position at texture coordinate `(s, t)`.
    pub fn point(&self, s: f32, t: f32) -> Vec3 {
        self.origin + self.edge_s * s + self.edge_t * t
    }
}

/// Colour-buffer write mode for a draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Overwrite the destination with the texel colour.
    Replace,
    /// `src * src_alpha + dst * (1 - src_alpha)`.
    SrcAlphaOver,
}

/// Perspective camera looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Distance the scene is pushed away from the eye along -Z.
    pub distance: f32,
}

impl Camera {
    /// Combined projection * view matrix (OpenGL clip-space conventions).
    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance));
        projection * view
    }
}

/// Minimal 3D drawing surface used by the overlay renderer.
///
/// Rows of the colour buffer run bottom to top, as in a hardware framebuffer; callers that need
/// image-coordinate output flip the read-back buffer themselves.
pub trait DrawSurface {
    /// Surface `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);
    /// Install the camera used by subsequent draws.
    fn set_camera(&mut self, camera: Camera);
    /// Fill the colour buffer.
    fn clear(&mut self, rgb: [u8; 3]);
    /// Rasterize a textured quad transformed by `model`.
    fn draw_quad(
        &mut self,
        quad: &TexturedQuad,
        texture: &Texture,
        model: Mat4,
        blend: Blend,
    ) -> ClockfaceResult<()>;
    /// Copy out the RGB8 colour buffer, bottom row first.
    fn read_pixels(&self) -> Vec<u8>;
}

/// CPU implementation of [`DrawSurface`].
///
/// Each covered pixel centre is mapped back onto the quad through the inverse of the quad's
/// projective map, which gives perspective-correct texture coordinates.
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    color: Vec<f32>,
    view_projection: Mat4,
}

impl SoftwareSurface {
    /// Allocate a black surface with an identity camera.
    pub fn new(width: u32, height: u32) -> ClockfaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClockfaceError::render(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            color: vec![0.0; width as usize * height as usize * 3],
            view_projection: Mat4::IDENTITY,
        })
    }

    fn ndc_to_window(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (ndc.y + 1.0) * 0.5 * self.height as f32,
        )
    }
}

impl DrawSurface for SoftwareSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_camera(&mut self, camera: Camera) {
        self.view_projection = camera.view_projection();
    }

    fn clear(&mut self, rgb: [u8; 3]) {
        let c = [
            f32::from(rgb[0]) / 255.0,
            f32::from(rgb[1]) / 255.0,
            f32::from(rgb[2]) / 255.0,
        ];
        for px in self.color.chunks_exact_mut(3) {
            px.copy_from_slice(&c);
        }
    }

    fn draw_quad(
        &mut self,
        quad: &TexturedQuad,
        texture: &Texture,
        model: Mat4,
        blend: Blend,
    ) -> ClockfaceResult<()> {
        let mvp = self.view_projection * model;

        // clip(s, t) = a * s + b * t + c
        let a = mvp * quad.edge_s.extend(0.0);
        let b = mvp * quad.edge_t.extend(0.0);
        let c = mvp * quad.origin.extend(1.0);

        let corners = [c, c + a, c + a + b, c + b];
        if corners.iter().any(|p| p.w <= f32::EPSILON) {
            // Part of the quad is behind the eye; the scenes drawn here never need clipping.
            return Err(ClockfaceError::render(
                "quad crosses the eye plane (unsupported)",
            ));
        }

        // Projective map from (s, t, 1) to homogeneous NDC (x, y, w).
        let h = Mat3::from_cols(
            Vec3::new(a.x, a.y, a.w),
            Vec3::new(b.x, b.y, b.w),
            Vec3::new(c.x, c.y, c.w),
        );
        if h.determinant().abs() < 1e-9 {
            // Edge-on: covers no pixel area.
            return Ok(());
        }
        let h_inv = h.inverse();

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in corners {
            let w = self.ndc_to_window(Vec2::new(p.x / p.w, p.y / p.w));
            min = min.min(w);
            max = max.max(w);
        }
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        let (w, hgt) = (self.width as f32, self.height as f32);
        for py in y0..y1 {
            let ndc_y = (py as f32 + 0.5) / hgt * 2.0 - 1.0;
            for px in x0..x1 {
                let ndc_x = (px as f32 + 0.5) / w * 2.0 - 1.0;
                let q = h_inv * Vec3::new(ndc_x, ndc_y, 1.0);
                if q.z.abs() < f32::EPSILON {
                    continue;
                }
                let s = q.x / q.z;
                let t = q.y / q.z;
                if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&t) {
                    continue;
                }

                let clip = a * s + b * t + c;
                let depth = clip.z / clip.w;
                if clip.w <= 0.0 || !(-1.0..=1.0).contains(&depth) {
                    continue;
                }

                let texel = texture.sample_bilinear(s, t);
                let off = (py as usize * self.width as usize + px as usize) * 3;
                let dst = &mut self.color[off..off + 3];
                match blend {
                    Blend::Replace => {
                        dst[0] = texel.x;
                        dst[1] = texel.y;
                        dst[2] = texel.z;
                    }
                    Blend::SrcAlphaOver => {
                        let alpha = texel.w;
                        dst[0] = texel.x * alpha + dst[0] * (1.0 - alpha);
                        dst[1] = texel.y * alpha + dst[1] * (1.0 - alpha);
                        dst[2] = texel.z * alpha + dst[2] * (1.0 - alpha);
                    }
                }
            }
        }
        Ok(())
    }

    fn read_pixels(&self) -> Vec<u8> {
        self.color.iter().map(|&v| unorm_to_u8(v)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
