//! Numeric traits describing what the element types of vectors, matrices and quaternions support.

use std::ops;

use crate::dispatch::Scalar;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike [`Float`], this does not require negation, so unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized + Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Primitive integer types.
///
/// Only integer vectors support the remainder operator `%`.
///
/// Vector arithmetic on integer lanes wraps around on overflow, in debug and release builds
/// alike, through the `wrapping_*` methods below.
pub trait Integer: Number + ops::Rem<Output = Self> + Eq + Ord {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Wrapping division. Panics if `rhs` is zero.
    fn wrapping_div(self, rhs: Self) -> Self;
    /// Wrapping remainder. Panics if `rhs` is zero.
    fn wrapping_rem(self, rhs: Self) -> Self;
}

/// Primitive floating-point types ([`f32`] and [`f64`]).
///
/// Rotation and projection matrix generators as well as most quaternion operations are only
/// available for these types.
pub trait Float: Scalar + ops::Neg<Output = Self> + Sqrt + Trig {
    /// The constant `2`.
    const TWO: Self;
    /// A full turn in radians (`2π`).
    const TAU: Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;

    /// Converts an [`f64`] constant to `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Integer for $types {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$types>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$types>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$types>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$types>::wrapping_div(self, rhs)
                }

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    <$types>::wrapping_rem(self, rhs)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Float for $types {
                const TWO: Self = 2.0;
                const TAU: Self = std::$types::consts::TAU;

                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);
