//! Fixed-size vectors, matrices and quaternions.
//!
//! This crate provides [`Vector<T, N>`], [`Matrix<T, R, C>`] and [`Quat<T>`], generic over their
//! dimensions (via const generics) and over their element type (any primitive integer or float).
//! They are plain `Copy` values without heap allocations, suitable as the math foundation of
//! graphics and geometry code.
//!
//! # Element-wise operations
//!
//! Every element-wise operation (`+`, `-`, `*`, `/`, `min`, `max`, equality, dot products) is
//! implemented once, for all dimensions and element types, by the kernels of the [`dispatch`]
//! module. These operate on whole fixed-size arrays and are unrolled by the compiler, so a
//! `Vec3f` addition compiles to 3 scalar additions.
//!
//! With the `simd` cargo feature enabled, `f32` vectors with 2 to 4 elements use SSE instructions
//! on `x86_64` instead. Results are bit-identical to the portable kernels.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Reject operations that make no sense for a type at compile time where possible: accessing
//!   `z()` on a 2D vector, taking the determinant of a non-square matrix, or building a rotation
//!   matrix with integer elements do not compile.
//! - No matrix factorizations. Determinants are computed by cofactor expansion, which is meant
//!   for small matrices.
//!
//! # Approximate comparisons
//!
//! [`Vector`], [`Matrix`] and [`Quat`] implement the [`approx`] crate's `AbsDiffEq`, `RelativeEq`
//! and `UlpsEq` traits by comparing element by element, so the `assert_abs_diff_eq!` family of
//! macros works on them. The crate is re-exported to keep versions in sync.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: the reported [`dispatch::backend`] at debug level,
//! rejected quaternion inversions at debug level, and reduced rotation angles and vector parse
//! failures at trace level.

pub mod dispatch;
pub mod error;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use approx;
pub use dispatch::Scalar;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
