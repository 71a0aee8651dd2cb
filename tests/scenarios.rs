//! End-to-end usage of the public API through `?`-propagating tests.

use approx::assert_abs_diff_eq;
use fixed_linalg::*;

#[test]
fn determinants() {
    assert_eq!(Mat2i::from_rows([[1, 2], [3, 4]]).determinant(), -2);
    assert_eq!(
        Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).determinant(),
        0
    );
    assert_eq!(
        Mat3i::from_rows([[2, -3, 1], [2, 0, -1], [1, 4, 5]]).determinant(),
        49
    );
}

#[test]
fn matmul_from_flat_data() -> anyhow::Result<()> {
    let a = Mat2x3::from_row_major(&[1, 2, 3, 4, 5, 6])?;
    let b = Mat3x2::from_row_major(&[7, 8, 9, 10, 11, 12])?;
    assert_eq!(a.matmul(b), Matrix::from_rows([[58, 64], [139, 154]]));
    Ok(())
}

#[test]
fn submatrix() {
    let m = Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let sub: Mat2i = m.submatrix(1, 1);
    assert_eq!(sub, Matrix::from_rows([[1, 3], [7, 9]]));
}

#[test]
fn invert_and_apply() -> anyhow::Result<()> {
    let m = Mat2d::from_rows([[2.0, 1.0], [1.0, 3.0]]);
    let inv = m.inverse()?;
    assert_abs_diff_eq!(m.matmul(inv), Mat2d::identity(), epsilon = 1e-6);

    let target = vec2(5.0, 10.0);
    let solution = inv * target;
    assert_abs_diff_eq!(m * solution, target, epsilon = 1e-9);
    assert_abs_diff_eq!(solution, vec2(1.0, 3.0), epsilon = 1e-9);
    Ok(())
}

#[test]
fn singular_matrix_is_reported() {
    let err = Mat2f::from_rows([[2.0, 4.0], [1.0, 2.0]]).inverse().unwrap_err();
    assert_eq!(err, Error::Singular);

    let err = anyhow::Error::from(err);
    assert_eq!(err.to_string(), "attempt to invert a singular matrix");
}

#[test]
fn length_mismatch_is_reported() {
    let res: anyhow::Result<Mat3f> = Mat3f::from_row_major(&[1.0; 8]).map_err(Into::into);
    let err = res.unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::LengthMismatch {
            expected: 9,
            actual: 8
        })
    );
}

#[test]
fn geometry() -> anyhow::Result<()> {
    let normal = vec3(0.0, 0.0, 1.0);
    let incoming = vec3(1.0, 1.0, -1.0);
    let outgoing = incoming.reflect(normal);
    assert_eq!(outgoing, vec3(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(outgoing.angle(normal), incoming.angle(-normal), epsilon = 1e-12);

    let along = incoming.project(normal);
    assert_eq!(along, vec3(0.0, 0.0, -1.0));
    assert_eq!(incoming - along, vec3(1.0, 1.0, 0.0));

    let halfway = Vec2d::X.lerp(Vec2d::Y, 0.5);
    assert_eq!(halfway, vec2(0.5, 0.5));

    let rotation = Mat2d::rotation_counterclockwise(std::f64::consts::FRAC_PI_2);
    let back = rotation.inverse()?;
    assert_abs_diff_eq!(back * (rotation * halfway), halfway, epsilon = 1e-12);
    Ok(())
}

#[test]
fn diagnostics() {
    let m = Mat3i::IDENTITY.scale(2).bias(-1);
    assert_eq!(m.to_string(), "1 -1 -1\n-1 1 -1\n-1 -1 1");
    assert_eq!(format!("{:?}", m.row(0)), "(1, -1, -1)");
    assert_eq!(vec3(1, -1, -1).to_string(), "(1, -1, -1)");
}
