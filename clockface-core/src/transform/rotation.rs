use glam::{Mat3, Mat4};

use crate::foundation::{
    error::{ClockfaceError, ClockfaceResult},
    math::{cyclic_index, linspace},
};

/// Table of rotations about the Y axis sampled over one revolution.
///
/// Angles are `linspace(0, 2π, steps)` with both ends included, so the first and last entries are
/// both the identity.
#[derive(Clone, Debug)]
pub struct RotationSequence {
    matrices: Vec<Mat3>,
}

impl RotationSequence {
    /// Precompute `steps` rotation matrices.
    pub fn new(steps: usize) -> ClockfaceResult<Self> {
        if steps == 0 {
            return Err(ClockfaceError::validation(
                "rotation step count must be non-zero",
            ));
        }
        let matrices = linspace(0.0, std::f64::consts::TAU, steps)
            .into_iter()
            .map(|theta| rotation_y(theta as f32))
            .collect();
        Ok(Self { matrices })
    }

    /// Number of steps in one revolution.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Rotation at step `i`, wrapping around the table.
    pub fn cyclic(&self, i: u64) -> Mat3 {
        self.matrices[cyclic_index(i, self.matrices.len())]
    }

    /// All matrices in order.
    pub fn matrices(&self) -> &[Mat3] {
        &self.matrices
    }
}

/// Rotation about +Y, row form `[[c, 0, s], [0, 1, 0], [-s, 0, c]]`.
pub fn rotation_y(theta: f32) -> Mat3 {
    let (s, c) = theta.sin_cos();
    // glam is column-major: each Vec3 below is a column.
    Mat3::from_cols(
        glam::Vec3::new(c, 0.0, -s),
        glam::Vec3::new(0.0, 1.0, 0.0),
        glam::Vec3::new(s, 0.0, c),
    )
}

/// Model matrix multiplied into the pipeline for rotation `r`.
///
/// The matrix is the transpose of `r` embedded in a 4x4 affine transform, matching the way the
/// table is fed to the renderer.
pub fn model_matrix(r: Mat3) -> Mat4 {
    Mat4::from_mat3(r.transpose())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotation.rs"]
mod tests;
