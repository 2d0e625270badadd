use super::*;

#[test]
fn every_matrix_is_orthonormal() {
    let seq = RotationSequence::new(360).unwrap();
    assert_eq!(seq.len(), 360);
    for m in seq.matrices() {
        assert!((m.determinant() - 1.0).abs() < 1e-5);
        for col in [m.x_axis, m.y_axis, m.z_axis] {
            assert!((col.length() - 1.0).abs() < 1e-5);
        }
        let should_be_identity = *m * m.transpose();
        assert!(should_be_identity.abs_diff_eq(Mat3::IDENTITY, 1e-5));
    }
}

#[test]
fn sweep_includes_both_ends() {
    let seq = RotationSequence::new(360).unwrap();
    assert!(seq.cyclic(0).abs_diff_eq(Mat3::IDENTITY, 1e-6));
    assert!(seq.cyclic(359).abs_diff_eq(Mat3::IDENTITY, 1e-5));
    // Index wraps back to the start.
    assert_eq!(seq.cyclic(360), seq.cyclic(0));
    assert_eq!(seq.cyclic(361), seq.cyclic(1));
}

#[test]
fn rotation_y_matches_row_form() {
    let r = rotation_y(std::f32::consts::FRAC_PI_2);
    // Row 0 is [c, 0, s] = [0, 0, 1].
    assert!((r.row(0) - glam::Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    // Row 2 is [-s, 0, c] = [-1, 0, 0].
    assert!((r.row(2) - glam::Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn model_matrix_applies_the_transpose() {
    let r = rotation_y(0.3);
    let m = model_matrix(r);
    let p = glam::Vec3::new(1.0, 0.0, 0.0);
    let expected = r.transpose() * p;
    assert!((m.transform_point3(p) - expected).length() < 1e-6);
}

#[test]
fn zero_steps_is_rejected() {
    assert!(RotationSequence::new(0).is_err());
}
