//! Randomized checks of algebraic identities that must hold for arbitrary inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use eng_linalg::*;
use fastrand::Rng;

const ITERATIONS: usize = 500;

fn rng() -> Rng {
    Rng::with_seed(0x9e3779b97f4a7c15)
}

fn scalar(rng: &mut Rng) -> f64 {
    rng.f64() * 20.0 - 10.0
}

fn vector<const N: usize>(rng: &mut Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| scalar(rng))
}

fn matrix<const N: usize>(rng: &mut Rng) -> Matrix<f64, N> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

fn unit_quat(rng: &mut Rng) -> Quatd {
    let axis = vector::<3>(rng).normalize();
    Quat::from_axis_angle(scalar(rng), axis)
}

#[test]
fn vector_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = vector::<5>(&mut rng);
        assert!(v.length() >= 0.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.length2(), v * v, max_relative = 1e-12);
    }
}

#[test]
fn vector_add_sub() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = vector::<4>(&mut rng);
        let b = vector::<4>(&mut rng);
        assert_eq!(a + b, b + a);
        assert_abs_diff_eq!(a + b - b, a, epsilon = 1e-12);
        assert_eq!(a - a, Vec4d::ZERO);
    }
}

#[test]
fn dot_is_symmetric() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = vector::<3>(&mut rng);
        let b = vector::<3>(&mut rng);
        assert_eq!(a * b, b * a);
        assert_eq!(a.dot(b), a * b);
    }
}

#[test]
fn cross_product() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = vector::<3>(&mut rng);
        let b = vector::<3>(&mut rng);
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_abs_diff_eq!(c * a, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c * b, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn matrix_product_is_associative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = matrix::<4>(&mut rng);
        let b = matrix::<4>(&mut rng);
        let c = matrix::<4>(&mut rng);
        let v = vector::<4>(&mut rng);
        assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-12);
        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = 1e-12);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = matrix::<3>(&mut rng);
        let v = vector::<3>(&mut rng);
        assert_eq!(m * Mat3d::identity(), m);
        assert_eq!(Mat3d::identity() * m, m);
        assert_eq!(Mat3d::identity() * v, v);

        let q = Quat::from_vec(vector::<4>(&mut rng));
        assert_eq!(q * Quat::IDENTITY, q);
    }
}

#[test]
fn hamilton_product_preserves_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let p = Quat::from_vec(vector::<4>(&mut rng));
        let q = Quat::from_vec(vector::<4>(&mut rng));
        assert_relative_eq!((p * q).length(), p.length() * q.length(), max_relative = 1e-12);
    }
}

#[test]
fn rotations_agree() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        let v = vector::<3>(&mut rng);

        let by_matrix = (Mat4d::rotation(q) * v.extend(0.0)).truncate();
        let by_quat = q.rotate_vector(v);
        assert_abs_diff_eq!(by_matrix, by_quat, epsilon = 1e-9);
        assert_relative_eq!(by_matrix.length(), v.length(), max_relative = 1e-12);

        // The conjugate rotation undoes the original one.
        let back = Mat4d::rotation(q.conjugate()) * Mat4d::rotation(q);
        assert_abs_diff_eq!(back, Mat4d::identity(), epsilon = 1e-12);
    }
}

#[test]
fn view_moves_camera_to_origin() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = unit_quat(&mut rng);
        let pos = vector::<3>(&mut rng);
        let view = Mat4d::view(pos.x, pos.y, pos.z, q);

        assert_abs_diff_eq!(view * pos.extend(1.0), Vec4d::W, epsilon = 1e-9);

        // The camera's forward direction (-Z in its local frame) maps to -Z in view space.
        let forward = q.rotate_vector(-Vec3d::Z);
        assert_abs_diff_eq!(view * forward.extend(0.0), -Vec4d::Z, epsilon = 1e-9);
    }
}

#[test]
fn complex_division_inverts_multiplication() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Complex::from(vector::<2>(&mut rng));
        let b = Complex::from(vector::<2>(&mut rng));
        assert_relative_eq!((a * b) / b, a, epsilon = 1e-9, max_relative = 1e-9);

        let s = scalar(&mut rng);
        assert_relative_eq!((a * s) / s, a, epsilon = 1e-9, max_relative = 1e-9);
    }
}
