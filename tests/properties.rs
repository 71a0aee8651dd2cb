//! Randomized checks of algebraic properties, driven by a seeded `fastrand` generator.

use approx::assert_abs_diff_eq;
use fastrand::Rng;
use fixed_linalg::*;

const ITERATIONS: usize = 500;

fn int_matrix<const R: usize, const C: usize>(rng: &mut Rng) -> Matrix<i32, R, C> {
    Matrix::from_fn(|_, _| rng.i32(-10..=10))
}

fn float_matrix<const R: usize, const C: usize>(rng: &mut Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

fn float_vector<const N: usize>(rng: &mut Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 200.0 - 100.0)
}

#[test]
fn transpose_involution() {
    let mut rng = Rng::with_seed(0x5eed);
    for _ in 0..ITERATIONS {
        let m = int_matrix::<3, 4>(&mut rng);
        assert_eq!(m.transpose().transpose(), m);

        let m = float_matrix::<2, 5>(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
        for i in 0..2 {
            for j in 0..5 {
                assert_eq!(m.transpose()[(j, i)], m[(i, j)]);
            }
        }
    }
}

#[test]
fn vector_matrix_roundtrip() {
    let mut rng = Rng::with_seed(1);
    for _ in 0..ITERATIONS {
        let v = float_vector::<4>(&mut rng);
        assert_eq!(v.into_row_matrix().into_row_vector(), v);
        assert_eq!(v.into_column_matrix().into_column_vector(), v);
        assert_eq!(v.into_row_matrix().transpose(), v.into_column_matrix());
    }
}

#[test]
fn row_major_roundtrip() {
    let mut rng = Rng::with_seed(2);
    for _ in 0..ITERATIONS {
        let m = int_matrix::<3, 2>(&mut rng);
        let flat: Vec<i32> = m.iter().copied().collect();
        assert_eq!(Matrix::from_row_major(&flat), Ok(m));
        for (offset, elem) in flat.iter().enumerate() {
            assert_eq!(m[(offset / 2, offset % 2)], *elem);
        }
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = Rng::with_seed(3);
    for _ in 0..ITERATIONS {
        let m = int_matrix::<4, 4>(&mut rng);
        assert_eq!(m.matmul(Mat4i::identity()), m);
        assert_eq!(Mat4i::identity().matmul(m), m);

        let v = Vector::from_fn(|_| rng.i32(..));
        assert_eq!(Mat3i::IDENTITY * v, v);
    }
}

#[test]
fn matmul_associative() {
    let mut rng = Rng::with_seed(4);
    for _ in 0..ITERATIONS {
        let a = int_matrix::<2, 3>(&mut rng);
        let b = int_matrix::<3, 4>(&mut rng);
        let c = int_matrix::<4, 2>(&mut rng);
        assert_eq!((a * b) * c, a * (b * c));

        let v = Vector::from_fn(|_| rng.i32(-10..=10));
        assert_eq!((a * b) * v, a * (b * v));
    }
}

#[test]
fn matmul_transpose() {
    let mut rng = Rng::with_seed(5);
    for _ in 0..ITERATIONS {
        let a = int_matrix::<2, 3>(&mut rng);
        let b = int_matrix::<3, 4>(&mut rng);
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }
}

#[test]
fn determinant_properties() {
    let mut rng = Rng::with_seed(6);
    for _ in 0..ITERATIONS {
        let a = int_matrix::<3, 3>(&mut rng);
        let b = int_matrix::<3, 3>(&mut rng);
        assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
        assert_eq!(a.transpose().determinant(), a.determinant());

        // Laplace expansion along the first row, using the 2x2 minors.
        let expanded = (0..3).fold(0, |acc, col| {
            let minor: Mat2i = a.submatrix(0, col);
            let sign = if col % 2 == 0 { 1 } else { -1 };
            acc + sign * a[(0, col)] * minor.determinant()
        });
        assert_eq!(expanded, a.determinant());

        let a = int_matrix::<2, 2>(&mut rng);
        let b = int_matrix::<2, 2>(&mut rng);
        assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
    }
}

#[test]
fn inverse_roundtrip() {
    let mut rng = Rng::with_seed(7);
    let mut inverted = 0;
    for _ in 0..ITERATIONS {
        let m = float_matrix::<2, 2>(&mut rng);
        if m.determinant().abs() > 1e-3 {
            let inv = m.inverse().unwrap();
            assert_abs_diff_eq!(m * inv, Mat2d::IDENTITY, epsilon = 1e-6);
            inverted += 1;
        }

        let m = float_matrix::<3, 3>(&mut rng);
        if m.determinant().abs() > 1e-3 {
            let inv = m.inverse().unwrap();
            assert_abs_diff_eq!(m * inv, Mat3d::IDENTITY, epsilon = 1e-6);
            assert_abs_diff_eq!(inv * m, Mat3d::IDENTITY, epsilon = 1e-6);
        }
    }
    assert!(inverted > ITERATIONS / 2);
}

#[test]
fn cross_is_orthogonal() {
    let mut rng = Rng::with_seed(8);
    for _ in 0..ITERATIONS {
        let a = Vec3i::from_fn(|_| rng.i32(-1000..=1000));
        let b = Vec3i::from_fn(|_| rng.i32(-1000..=1000));
        let c = a.cross(b);
        assert_eq!(a.dot(c), 0);
        assert_eq!(b.dot(c), 0);
        assert_eq!(b.cross(a), -c);
    }
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = Rng::with_seed(9);
    for _ in 0..ITERATIONS {
        let v = float_vector::<3>(&mut rng);
        if v.norm() > 1e-3 {
            assert_abs_diff_eq!(v.normalize().norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(v.normalize().angle(v), 0.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn lerp_endpoints() {
    let mut rng = Rng::with_seed(10);
    for _ in 0..ITERATIONS {
        let a = float_vector::<4>(&mut rng);
        let b = float_vector::<4>(&mut rng);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

#[test]
fn hadamard_commutes() {
    let mut rng = Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let a = int_matrix::<3, 2>(&mut rng);
        let b = int_matrix::<3, 2>(&mut rng);
        assert_eq!(a.hadamard(b), b.hadamard(a));
        assert_eq!(a.hadamard(Matrix::ONE), a);
    }
}
