//! Element-wise operation kernels shared by every vector and matrix type.
//!
//! All element-wise arithmetic in this crate funnels through the [`Scalar`] trait, whose methods
//! operate on whole `[T; N]` arrays at once. The default implementations (in [`portable`]) are
//! written in terms of [`array::from_fn`] and folds over fixed-size arrays, which the optimizer
//! fully unrolls for the small lane counts (2 to 4) that make up the vast majority of uses, while
//! still being correct for any `N`.
//!
//! With the `simd` cargo feature enabled on `x86_64`, [`f32`] overrides some of these kernels for
//! 2 to 4 lanes with single SSE instructions (see [`sse`]). The SSE and portable kernels produce
//! bit-identical results for all finite inputs.

use std::{array, fmt};

use crate::{Integer, Number};

/// The implementation used for a scalar type's element-wise kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Compile-time unrolled loops over the vector elements. Works for every scalar type and lane
    /// count.
    Portable,
    /// One SSE instruction per operation for vectors with 2 to 4 [`f32`] lanes. Other lane counts
    /// use the [`Backend::Portable`] kernels.
    Sse,
}

/// Returns the [`Backend`] used by vectors with element type `T`.
///
/// The backend is fixed at compile time; this only reports it.
pub fn backend<T: Scalar>() -> Backend {
    log::debug!(
        "using {:?} element-wise backend for `{}`",
        T::BACKEND,
        std::any::type_name::<T>()
    );
    T::BACKEND
}

/// Primitive numeric types that can be stored in a [`Vector`][crate::Vector].
///
/// Every method takes or returns whole arrays of `N` lanes. The default method bodies are the
/// [`portable`] kernels; scalar types may override them with faster, bit-identical versions.
pub trait Scalar: Number + fmt::Debug {
    /// The backend implementing this type's kernels.
    const BACKEND: Backend = Backend::Portable;

    /// Broadcasts `value` into every lane.
    #[inline]
    fn splat_lanes<const N: usize>(value: Self) -> [Self; N] {
        portable::splat(value)
    }

    #[inline]
    fn add_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::add(a, b)
    }

    #[inline]
    fn sub_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::sub(a, b)
    }

    #[inline]
    fn mul_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::mul(a, b)
    }

    #[inline]
    fn div_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::div(a, b)
    }

    /// Lane-wise minimum, `if a < b { a } else { b }`.
    #[inline]
    fn min_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::min(a, b)
    }

    /// Lane-wise maximum, `if a > b { a } else { b }`.
    #[inline]
    fn max_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        portable::max(a, b)
    }

    /// Returns `true` if all lanes compare equal.
    #[inline]
    fn eq_lanes<const N: usize>(a: &[Self; N], b: &[Self; N]) -> bool {
        portable::eq(a, b)
    }

    /// Sum of the lane-wise products, accumulated from the first lane to the last.
    #[inline]
    fn dot_lanes<const N: usize>(a: &[Self; N], b: &[Self; N]) -> Self {
        portable::dot(a, b)
    }
}

impl Scalar for f64 {}

// Integer lanes wrap on overflow instead of panicking in debug builds.
macro_rules! integer_scalars {
    ($($types:ty),+) => {
        $(
            impl Scalar for $types {
                #[inline]
                fn add_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
                    portable::wrapping_add(a, b)
                }

                #[inline]
                fn sub_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
                    portable::wrapping_sub(a, b)
                }

                #[inline]
                fn mul_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
                    portable::wrapping_mul(a, b)
                }

                #[inline]
                fn div_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
                    portable::wrapping_div(a, b)
                }

                #[inline]
                fn dot_lanes<const N: usize>(a: &[Self; N], b: &[Self; N]) -> Self {
                    portable::wrapping_dot(a, b)
                }
            }
        )+
    };
}
integer_scalars!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
impl Scalar for f32 {}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
macro_rules! sse_kernels {
    ($($method:ident => $kernel:ident),+) => {
        $(
            #[inline]
            fn $method<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
                if sse::supports(N) {
                    sse::$kernel(a, b)
                } else {
                    portable::$kernel(a, b)
                }
            }
        )+
    };
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
impl Scalar for f32 {
    const BACKEND: Backend = Backend::Sse;

    #[inline]
    fn splat_lanes<const N: usize>(value: Self) -> [Self; N] {
        if sse::supports(N) {
            sse::splat(value)
        } else {
            portable::splat(value)
        }
    }

    sse_kernels! {
        add_lanes => add,
        sub_lanes => sub,
        mul_lanes => mul,
        div_lanes => div,
        min_lanes => min,
        max_lanes => max
    }
}

/// Kernels that work for every scalar type and lane count.
pub mod portable {
    use super::*;

    #[inline]
    pub fn splat<T: Copy, const N: usize>(value: T) -> [T; N] {
        [value; N]
    }

    #[inline]
    pub fn add<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] + b[i])
    }

    #[inline]
    pub fn sub<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] - b[i])
    }

    #[inline]
    pub fn mul<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] * b[i])
    }

    #[inline]
    pub fn div<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] / b[i])
    }

    #[inline]
    pub fn wrapping_add<T: Integer, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].wrapping_add(b[i]))
    }

    #[inline]
    pub fn wrapping_sub<T: Integer, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].wrapping_sub(b[i]))
    }

    #[inline]
    pub fn wrapping_mul<T: Integer, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].wrapping_mul(b[i]))
    }

    /// Only `MIN / -1` wraps; division by zero still panics.
    #[inline]
    pub fn wrapping_div<T: Integer, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].wrapping_div(b[i]))
    }

    /// Lane-wise remainder of `a` divided by the scalar `divisor`.
    #[inline]
    pub fn rem<T: Integer, const N: usize>(a: [T; N], divisor: T) -> [T; N] {
        a.map(|elem| elem.wrapping_rem(divisor))
    }

    #[inline]
    pub fn min<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| if a[i] < b[i] { a[i] } else { b[i] })
    }

    #[inline]
    pub fn max<T: Number, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| if a[i] > b[i] { a[i] } else { b[i] })
    }

    /// Compares every lane (no short-circuiting) and returns whether all of them are equal.
    #[inline]
    pub fn eq<T: PartialEq, const N: usize>(a: &[T; N], b: &[T; N]) -> bool {
        a.iter().zip(b).fold(true, |all, (a, b)| all & (a == b))
    }

    #[inline]
    pub fn dot<T: Number, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
        a.iter()
            .zip(b)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// [`dot`] with every product and partial sum wrapping around.
    #[inline]
    pub fn wrapping_dot<T: Integer, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
        a.iter()
            .zip(b)
            .fold(T::ZERO, |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b)))
    }
}

/// SSE kernels for [`f32`] vectors with up to 4 lanes.
///
/// Inputs are zero-padded into a single 128-bit register, so every operation is exactly one
/// arithmetic instruction. Callers must check [`sse::supports`] first; the kernels panic for lane
/// counts above 4.
#[cfg(target_arch = "x86_64")]
pub mod sse {
    use std::arch::x86_64::{
        __m128, _mm_add_ps, _mm_div_ps, _mm_loadu_ps, _mm_max_ps, _mm_min_ps, _mm_mul_ps,
        _mm_set1_ps, _mm_storeu_ps, _mm_sub_ps,
    };

    use super::*;

    const LANES: usize = 4;

    /// Returns whether vectors with `n` lanes are handled by these kernels.
    #[inline]
    pub const fn supports(n: usize) -> bool {
        n >= 2 && n <= LANES
    }

    #[inline(always)]
    fn load<const N: usize>(v: &[f32; N]) -> __m128 {
        let mut padded = [0.0; LANES];
        padded[..N].copy_from_slice(v);
        // Safety: `padded` holds 4 initialized `f32`s, `loadu` has no alignment requirement, and
        // SSE is part of the x86_64 baseline.
        unsafe { _mm_loadu_ps(padded.as_ptr()) }
    }

    #[inline(always)]
    fn store<const N: usize>(v: __m128) -> [f32; N] {
        let mut out = [0.0; LANES];
        // Safety: `out` has room for 4 `f32`s and `storeu` has no alignment requirement.
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
        array::from_fn(|i| out[i])
    }

    #[inline]
    pub fn splat<const N: usize>(value: f32) -> [f32; N] {
        // Safety: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_set1_ps(value) })
    }

    macro_rules! binary {
        ($($name:ident => $intrinsic:ident),+) => {
            $(
                #[inline]
                pub fn $name<const N: usize>(a: [f32; N], b: [f32; N]) -> [f32; N] {
                    // Safety: SSE is part of the x86_64 baseline.
                    store(unsafe { $intrinsic(load(&a), load(&b)) })
                }
            )+
        };
    }

    binary! {
        add => _mm_add_ps,
        sub => _mm_sub_ps,
        mul => _mm_mul_ps,
        div => _mm_div_ps,
        min => _mm_min_ps,
        max => _mm_max_ps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portable_arithmetic() {
        assert_eq!(portable::add([1, 2, 3], [10, 20, 30]), [11, 22, 33]);
        assert_eq!(portable::sub([1, 2, 3], [10, 20, 30]), [-9, -18, -27]);
        assert_eq!(portable::mul([1, 2, 3], [10, 20, 30]), [10, 40, 90]);
        assert_eq!(portable::div([10, 21, 30], [10, 20, 7]), [1, 1, 4]);
        assert_eq!(portable::rem([10u8, 21, 30], 7), [3, 0, 2]);
        assert_eq!(portable::splat::<_, 5>(7u16), [7; 5]);
    }

    #[test]
    fn portable_min_max() {
        assert_eq!(portable::min([1, 5, -3], [2, 4, -3]), [1, 4, -3]);
        assert_eq!(portable::max([1, 5, -3], [2, 4, -3]), [2, 5, -3]);

        // Unordered comparisons pick the second operand.
        let min = portable::min([f32::NAN, 1.0], [0.0, f32::NAN]);
        assert_eq!(min[0], 0.0);
        assert!(min[1].is_nan());
        let max = portable::max([-0.0f32], [0.0]);
        assert!(max[0].is_sign_positive());
    }

    #[test]
    fn portable_eq_checks_all_lanes() {
        assert!(portable::eq(&[1, 2, 3], &[1, 2, 3]));
        assert!(!portable::eq(&[1, 2, 3], &[1, 2, 4]));
        assert!(!portable::eq(&[0, 2, 3], &[1, 2, 3]));
        assert!(portable::eq::<u8, 0>(&[], &[]));
        assert!(!portable::eq(&[f64::NAN], &[f64::NAN]));
    }

    #[test]
    fn dot_accumulates_left_to_right() {
        assert_eq!(portable::dot(&[1, 3, -5], &[4, -2, -1]), 3);
        // `(1e20 + -1e20) + 1` is 1, while `1e20 + (-1e20 + 1)` would be 0.
        assert_eq!(portable::dot(&[1e20f64, -1e20, 1.0], &[1.0, 1.0, 1.0]), 1.0);
        assert_eq!(portable::dot::<u32, 0>(&[], &[]), 0);
    }

    #[test]
    fn integer_lanes_wrap() {
        assert_eq!(u8::add_lanes([250, 1], [10, 1]), [4, 2]);
        assert_eq!(u8::sub_lanes([0, 5], [1, 5]), [255, 0]);
        assert_eq!(i8::mul_lanes([64, -128], [2, -1]), [-128, -128]);
        assert_eq!(i32::div_lanes([i32::MIN, 9], [-1, 3]), [i32::MIN, 3]);
        assert_eq!(u8::dot_lanes(&[200, 200], &[2, 2]), 32);
        assert_eq!(portable::rem([i64::MIN, 7], -1), [0, 0]);
    }

    #[test]
    fn reported_backend() {
        assert_eq!(backend::<f64>(), Backend::Portable);
        assert_eq!(backend::<i32>(), Backend::Portable);
        assert_eq!(backend::<u8>(), Backend::Portable);
        if cfg!(all(feature = "simd", target_arch = "x86_64")) {
            assert_eq!(backend::<f32>(), Backend::Sse);
        } else {
            assert_eq!(backend::<f32>(), Backend::Portable);
        }
    }

    #[cfg(target_arch = "x86_64")]
    mod sse_parity {
        use super::*;

        fn random_lanes<const N: usize>(rng: &mut fastrand::Rng) -> [f32; N] {
            array::from_fn(|_| match rng.u8(0..16) {
                0 => 0.0,
                1 => -0.0,
                2 => f32::MIN_POSITIVE * rng.f32(),
                3 => f32::MAX * (rng.f32() - 0.5),
                _ => (rng.f32() - 0.5) * 2000.0,
            })
        }

        fn bits<const N: usize>(lanes: [f32; N]) -> [u32; N] {
            lanes.map(f32::to_bits)
        }

        fn check<const N: usize>(rng: &mut fastrand::Rng) {
            assert!(sse::supports(N));
            for _ in 0..2000 {
                let a = random_lanes::<N>(rng);
                let b = random_lanes::<N>(rng);
                let msg = format!("a={a:?} b={b:?}");
                assert_eq!(bits(sse::add(a, b)), bits(portable::add(a, b)), "add {msg}");
                assert_eq!(bits(sse::sub(a, b)), bits(portable::sub(a, b)), "sub {msg}");
                assert_eq!(bits(sse::mul(a, b)), bits(portable::mul(a, b)), "mul {msg}");
                assert_eq!(bits(sse::min(a, b)), bits(portable::min(a, b)), "min {msg}");
                assert_eq!(bits(sse::max(a, b)), bits(portable::max(a, b)), "max {msg}");
                assert_eq!(
                    bits(sse::splat::<N>(a[0])),
                    bits(portable::splat::<_, N>(a[0]))
                );
                if b.iter().all(|&b| b != 0.0) {
                    assert_eq!(bits(sse::div(a, b)), bits(portable::div(a, b)), "div {msg}");
                }
            }
        }

        #[test]
        fn bit_identical() {
            let mut rng = fastrand::Rng::with_seed(0x6d67_6d61_7468);
            check::<2>(&mut rng);
            check::<3>(&mut rng);
            check::<4>(&mut rng);
        }

        #[test]
        fn signed_zero_min_max() {
            let a = [-0.0f32, 0.0, -0.0];
            let b = [0.0f32, -0.0, -0.0];
            assert_eq!(bits(sse::min(a, b)), bits(portable::min(a, b)));
            assert_eq!(bits(sse::max(a, b)), bits(portable::max(a, b)));
        }

        #[test]
        fn supported_lane_counts() {
            assert!(!sse::supports(0));
            assert!(!sse::supports(1));
            assert!(sse::supports(2));
            assert!(sse::supports(4));
            assert!(!sse::supports(5));
        }
    }
}
