//! Algebraic properties checked on seeded random inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use mgmath::{
    dispatch::{self, Backend},
    error::DomainError,
    vec3, Mat3, Mat3d, Mat4d, Matrix, Quatd, Quatf, Vec3d, Vec3f, Vec4f, Vector,
};

const ITERATIONS: usize = 200;

fn init_logger() {
    env_logger::Builder::new()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .filter_module("mgmath", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6d67_6d61_7468)
}

fn random_vec3d(rng: &mut fastrand::Rng) -> Vec3d {
    Vector::from_fn(|_| rng.f64() * 20.0 - 10.0)
}

fn random_mat3i(rng: &mut fastrand::Rng) -> Mat3<i64> {
    Matrix::from_fn(|_, _| rng.i64(-9..=9))
}

#[test]
fn dot_is_commutative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vector::<i32, 4>::from_fn(|_| rng.i32(-1000..1000));
        let b = Vector::<i32, 4>::from_fn(|_| rng.i32(-1000..1000));
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        // Full-range lanes overflow regularly; wrapping arithmetic keeps both laws exact.
        let a = Vector::<i32, 3>::from_fn(|_| rng.i32(..));
        let b = Vector::<i32, 3>::from_fn(|_| rng.i32(..));
        let c = Vector::<i32, 3>::from_fn(|_| rng.i32(..));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));

        let a = Vector::<u8, 4>::from_fn(|_| rng.u8(..));
        let b = Vector::<u8, 4>::from_fn(|_| rng.u8(..));
        let c = Vector::<u8, 4>::from_fn(|_| rng.u8(..));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));

        let a = random_vec3d(&mut rng);
        let b = random_vec3d(&mut rng);
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn negation_is_the_additive_inverse() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vec3d(&mut rng);
        assert_eq!(a + (-a), Vec3d::ZERO);

        let a = Vector::<i64, 4>::from_fn(|_| rng.i64(i64::MIN + 1..));
        assert_eq!(a + (-a), Vector::<i64, 4>::ZERO);
        assert_eq!(a - a, Vector::<i64, 4>::ZERO);
    }
}

#[test]
fn length_is_non_negative() {
    let mut rng = rng();
    assert_eq!(Vec3d::ZERO.length(), 0.0);
    for _ in 0..ITERATIONS {
        let v = random_vec3d(&mut rng);
        assert!(v.length() >= 0.0);
        assert_relative_eq!(v.length() * v.length(), v.length_squared(), max_relative = 1e-12);
    }
}

#[test]
fn normalize_is_idempotent() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec3d(&mut rng);
        if v.length() < 1e-3 {
            continue;
        }
        let once = v.normalized();
        assert_abs_diff_eq!(once.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(once.normalized(), once, epsilon = 1e-12);
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = Matrix::<i64, 3, 4>::from_fn(|_, _| rng.i64(-100..100));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().column(2), *m.row(2));
    }
}

#[test]
fn determinant_of_identity() {
    assert_eq!(Mat3::<i32>::IDENTITY.determinant(), 1);
    assert_eq!(Mat4d::IDENTITY.determinant(), 1.0);
    assert_eq!(Matrix::<f32, 6, 6>::IDENTITY.determinant(), 1.0);
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_mat3i(&mut rng);
        let b = random_mat3i(&mut rng);
        assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
        assert_eq!(a.transpose().determinant(), a.determinant());
    }
}

#[test]
fn product_is_associative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_mat3i(&mut rng);
        let b = random_mat3i(&mut rng);
        let c = random_mat3i(&mut rng);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * Mat3::IDENTITY, a);
        assert_eq!(Mat3::IDENTITY * a, a);
    }
}

#[test]
fn quaternion_identity() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = Quatd::from_vec(Vector::from_fn(|_| rng.f64() * 2.0 - 1.0));
        assert_eq!(q * Quatd::IDENTITY, q);
        assert_eq!(Quatd::IDENTITY * q, q);

        let v = random_vec3d(&mut rng);
        assert_eq!(Quatd::IDENTITY.rotate(v), v);
    }
}

#[test]
fn slerp_between_identities() {
    assert_eq!(Quatf::IDENTITY.slerp(Quatf::IDENTITY, 0.5), Quatf::IDENTITY);
    assert_eq!(Quatd::IDENTITY.slerp(Quatd::IDENTITY, 0.5), Quatd::IDENTITY);
    assert_eq!(Quatd::IDENTITY.slerp(-Quatd::IDENTITY, 0.25), Quatd::IDENTITY);
}

#[test]
fn rotation_preserves_length() {
    init_logger();

    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let axis = random_vec3d(&mut rng);
        if axis.length() < 1e-3 {
            continue;
        }
        let angle = rng.f64() * 40.0 - 20.0;
        let q = Quatd::from_angle_safe(axis, angle);
        let v = random_vec3d(&mut rng);

        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.rotate(v).length(), v.length(), max_relative = 1e-12);
        assert_abs_diff_eq!(q.to_rotation_mat3() * v, q.rotate(v), epsilon = 1e-10);

        let back = q.inverse().unwrap().rotate(q.rotate(v));
        assert_abs_diff_eq!(back, v, epsilon = 1e-10);
    }
}

#[test]
fn rotation_matrices_are_orthonormal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let angle = rng.f64() * 10.0 - 5.0;
        for m in [
            Mat3d::rotation_x(angle),
            Mat3d::rotation_y(angle),
            Mat3d::rotation_z(angle),
        ] {
            assert_abs_diff_eq!(m * m.transpose(), Mat3d::IDENTITY, epsilon = 1e-12);
            assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn zero_quaternion_is_rejected() {
    init_logger();

    let zero = Quatd::from_components(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.inverse(), Err(DomainError::ZeroQuaternion));
    assert_eq!(
        zero.rotate_safe(Vec3d::X),
        Err(DomainError::ZeroQuaternion)
    );
}

#[test]
fn backend_report() {
    init_logger();

    assert_eq!(dispatch::backend::<f64>(), Backend::Portable);
    assert_eq!(dispatch::backend::<i16>(), Backend::Portable);
    if cfg!(all(feature = "simd", target_arch = "x86_64")) {
        assert_eq!(dispatch::backend::<f32>(), Backend::Sse);
    } else {
        assert_eq!(dispatch::backend::<f32>(), Backend::Portable);
    }
}

#[test]
fn f32_kernels_match_scalar_arithmetic() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec4f::from_fn(|_| rng.f32() * 200.0 - 100.0);
        let b = Vec4f::from_fn(|_| rng.f32() * 200.0 + 1.0);

        assert_eq!((a + b).into_array(), [0, 1, 2, 3].map(|i| a[i] + b[i]));
        assert_eq!((a - b).into_array(), [0, 1, 2, 3].map(|i| a[i] - b[i]));
        assert_eq!((a * b).into_array(), [0, 1, 2, 3].map(|i| a[i] * b[i]));
        assert_eq!((a / b).into_array(), [0, 1, 2, 3].map(|i| a[i] / b[i]));
        assert_eq!(a.min(b).into_array(), [0, 1, 2, 3].map(|i| a[i].min(b[i])));
        assert_eq!(a.max(b).into_array(), [0, 1, 2, 3].map(|i| a[i].max(b[i])));
    }
}

#[test]
fn display_parses_back() {
    init_logger();

    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = Vec3f::from_fn(|_| rng.f32() * 2000.0 - 1000.0);
        let text = v.to_string();
        assert_eq!(text.parse::<Vec3f>().unwrap(), v, "{text}");
    }

    assert_eq!("(1, -2, 3)".parse::<Vector<i8, 3>>().unwrap(), vec3(1, -2, 3));
    assert!("(1, 2".parse::<Vec3f>().is_err());
}
