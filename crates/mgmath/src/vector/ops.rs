//! Implementations of `std::ops`.
//!
//! All element-wise arithmetic goes through the [`Scalar`] kernels, so enabling the SIMD backend
//! speeds up every operator here without changing its results.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{dispatch::portable, dispatch::Scalar, Integer};

use super::{check_index, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        check_index(index, N);
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check_index(index, N);
        &mut self.0[index]
    }
}

/// Exact element-wise comparison. Two vectors are equal if all of their elements are.
impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::eq_lanes(&self.0, &other.0)
    }
}

impl<T: Scalar + Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: Scalar, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        T::eq_lanes(&self.0, other)
    }
}

impl<T: Scalar, const N: usize> PartialEq<Vector<T, N>> for [T; N] {
    #[inline]
    fn eq(&self, other: &Vector<T, N>) -> bool {
        T::eq_lanes(self, &other.0)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $kernel:ident;)+) => {
        $(
            /// Element-wise operation between two vectors.
            impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self(T::$kernel(self.0, rhs.0))
                }
            }

            /// Element-wise operation between two vectors.
            impl<T: Scalar, const N: usize> $assign_trait for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.0 = T::$kernel(self.0, rhs.0);
                }
            }

            /// Applies the operation between each element and a scalar.
            impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    Self(T::$kernel(self.0, T::splat_lanes(rhs)))
                }
            }

            /// Applies the operation between each element and a scalar.
            impl<T: Scalar, const N: usize> $assign_trait<T> for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    self.0 = T::$kernel(self.0, T::splat_lanes(rhs));
                }
            }
        )+
    };
}

elementwise_ops! {
    Add::add, AddAssign::add_assign => add_lanes;
    Sub::sub, SubAssign::sub_assign => sub_lanes;
    Mul::mul, MulAssign::mul_assign => mul_lanes;
    Div::div, DivAssign::div_assign => div_lanes;
}

// NB: vector-vector `%` is left out; only the remainder against a scalar is supported, and only for
// integers.

/// Element-wise remainder of each element divided by a scalar.
impl<T: Scalar + Integer, const N: usize> Rem<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: T) -> Self {
        Self(portable::rem(self.0, rhs))
    }
}

/// Element-wise remainder of each element divided by a scalar.
impl<T: Scalar + Integer, const N: usize> RemAssign<T> for Vector<T, N> {
    #[inline]
    fn rem_assign(&mut self, rhs: T) {
        self.0 = portable::rem(self.0, rhs);
    }
}

// Coherence rules require one impl per concrete scalar type when the scalar is on the left.
macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn add(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) + rhs
                }
            }

            impl<const N: usize> Sub<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn sub(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) - rhs
                }
            }

            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) * rhs
                }
            }

            impl<const N: usize> Div<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn div(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) / rhs
                }
            }
        )+
    };
}

scalar_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec2f, Vec3f, Vector};

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3(4.0, 2.5, 2.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));

        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
        assert_eq!(a + 1.0, vec3(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, vec3(0.0, 1.0, 2.0));
    }

    #[test]
    fn scalar_on_the_left() {
        let v = vec4(1, 2, 4, 8);
        assert_eq!(2 * v, vec4(2, 4, 8, 16));
        assert_eq!(16 / v, vec4(16, 8, 4, 2));
        assert_eq!(10 - v, vec4(9, 8, 6, 2));
        assert_eq!(1 + v, vec4(2, 3, 5, 9));
        assert_eq!(0.5f32 * Vec2f::splat(4.0), vec2(2.0, 2.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = vec2(1, 2);
        v += vec2(1, 1);
        assert_eq!(v, vec2(2, 3));
        v -= vec2(2, 0);
        assert_eq!(v, vec2(0, 3));
        v *= vec2(5, 2);
        assert_eq!(v, vec2(0, 6));
        v /= 2;
        assert_eq!(v, vec2(0, 3));
        v *= 4;
        assert_eq!(v, vec2(0, 12));
        v %= 5;
        assert_eq!(v, vec2(0, 2));
    }

    #[test]
    fn remainder() {
        assert_eq!(vec3(10u32, 11, 12) % 3, vec3(1, 2, 0));
        assert_eq!(vec3(-7i8, 7, 0) % 4, vec3(-3, 3, 0));
    }

    #[test]
    fn unsigned_vectors() {
        let a = vec3(5u8, 6, 7);
        assert_eq!(a - vec3(5, 5, 5), vec3(0, 1, 2));
        assert_eq!(a * 2, vec3(10, 12, 14));
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(vec2(250u8, 1) + vec2(10, 1), vec2(4, 2));
        assert_eq!(vec2(200u8, 200).dot(vec2(2, 2)), 32);
        assert_eq!(vec2(0u8, 1) - 1, vec2(255, 0));
        assert_eq!(3u8 * vec2(100, 1), vec2(44, 3));

        let big = vec3(i32::MAX, i32::MIN, 1);
        assert_eq!(big + 1, vec3(i32::MIN, i32::MIN + 1, 2));
        assert_eq!(big * 2, vec3(-2, 0, 2));
        assert_eq!(big.dot(vec3(1, 1, 1)), 0);
        assert_eq!(big / -1, vec3(-i32::MAX, i32::MIN, -1));
        assert_eq!(big % -1, vec3(0, 0, 0));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn integer_division_by_zero_panics() {
        let _ = vec2(1, 2) / 0;
    }

    #[test]
    fn equality() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_ne!(vec3(0, 2, 3), vec3(1, 2, 3));
        assert_eq!(vec2(0.0, -0.0), vec2(-0.0, 0.0));
        assert_ne!(Vec3f::splat(f32::NAN), Vec3f::splat(f32::NAN));
    }

    #[test]
    fn approximate_comparison() {
        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

        let a = vec3(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(a, vec3(1.0, 2.0, 3.05), epsilon = 0.1);
        assert_abs_diff_ne!(a, vec3(1.0, 2.0, 3.05), epsilon = 0.01);
        assert_relative_eq!(a * 1e6, vec3(1e6, 2e6, 3e6 + 1e-4), max_relative = 1e-9);
        assert_ulps_eq!(vec2(0.1f32 + 0.2, 1.0), vec2(0.3, 1.0), max_ulps = 1);
        assert_abs_diff_ne!(Vec3f::splat(f32::NAN), Vec3f::splat(f32::NAN));
    }

    #[test]
    fn index() {
        let mut v = vec3(7, 8, 9);
        assert_eq!(v[0], 7);
        assert_eq!(v[2], 9);
        v[1] = 80;
        assert_eq!(v, vec3(7, 80, 9));
    }

    #[test]
    #[should_panic(expected = "vector index out of range: the length is 3 but the index is 3")]
    fn index_out_of_range() {
        let v = vec3(7, 8, 9);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "vector index out of range")]
    fn index_mut_out_of_range() {
        let mut v = Vector::<u8, 0>::ZERO;
        v[0] = 1;
    }
}
