use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{dispatch::Scalar, Quat};

impl<T: Scalar> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Scalar + Eq> Eq for Quat<T> {}

/// Compares all four components; `q` and `-q` are not considered equal.
impl<T> AbsDiffEq for Quat<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

/// The Hamilton product.
///
/// When both operands are rotations, the product first applies `rhs`, then `self`.
impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [i1, j1, k1, w1] = self.vec.into_array();
        let [i2, j2, k2, w2] = rhs.vec.into_array();

        #[rustfmt::skip]
        let product = Quat::from_components(
            w1 * i2 + i1 * w2 + j1 * k2 - k1 * j2,
            w1 * j2 + j1 * w2 + k1 * i2 - i1 * k2,
            w1 * k2 + k1 * w2 + i1 * j2 - j1 * i2,
            w1 * w2 - i1 * i2 - j1 * j2 - k1 * k2,
        );
        product
    }
}

impl<T: Scalar> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Component-wise negation.
impl<T: Scalar + Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

/// Component-wise addition.
impl<T: Scalar> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Scalar> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

/// Component-wise subtraction.
impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: Scalar> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Scales every component.
impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

/// Divides every component by a scalar.
impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            vec: self.vec / rhs,
        }
    }
}
