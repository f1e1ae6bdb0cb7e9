use std::{array, slice};

use crate::{
    dispatch::Scalar,
    error::{self, LengthMismatch},
    One, Sqrt, Zero,
};

mod ops;
mod text;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   exactly `N` elements using [`TryFrom`].
/// - Vectors can be parsed from text, see the [`FromStr`][std::str::FromStr] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - [`Vector::x`], [`Vector::y`], [`Vector::z`] and [`Vector::w`] (and their `_mut` versions)
///   access the first four elements. Using an accessor on a vector that is too short to have that
///   element is a compile-time error.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when the
///   index is out of range. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - [`Vector::swizzle`] builds a new vector from any selection of elements.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of elements in this vector type.
    pub const LEN: usize = N;

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Scalar,
    {
        Self(T::splat_lanes(elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns an iterator over the elements, in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are summed from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T
    where
        T: Scalar,
    {
        T::dot_lanes(&self.0, &other.0)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This avoids the square root in [`Vector::length`] and is enough for comparing magnitudes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    #[doc(alias = "length2")]
    #[inline]
    pub fn length_squared(&self) -> T
    where
        T: Scalar,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "magnitude")]
    #[inline]
    pub fn length(&self) -> T
    where
        T: Scalar + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(vec2(1.0, 1.0).distance_to(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance_to(self, other: Self) -> T
    where
        T: Scalar + Sqrt,
    {
        (other - self).length()
    }

    /// Returns a copy of this vector divided by its length, resulting in a unit vector.
    ///
    /// Normalizing a vector of length zero divides by zero: floating-point elements become NaN
    /// (or infinite), no error is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn normalized(self) -> Self
    where
        T: Scalar + Sqrt,
    {
        self / self.length()
    }

    /// Normalizes this vector in place and returns a reference to it, for chaining.
    ///
    /// See [`Vector::normalized`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mut v = vec2(0.0, -2.0);
    /// assert_eq!(*v.normalize(), vec2(0.0, -1.0));
    /// ```
    #[inline]
    pub fn normalize(&mut self) -> &mut Self
    where
        T: Scalar + Sqrt,
    {
        let length = self.length();
        *self /= length;
        self
    }

    /// Returns the unit vector pointing from `self` towards `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(vec2(1.0, 1.0).direction_to(vec2(1.0, 7.0)), Vec2f::Y);
    /// ```
    pub fn direction_to(self, other: Self) -> Self
    where
        T: Scalar + Sqrt,
    {
        (other - self).normalized()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// Each element is `if a < b { a } else { b }`, so unordered comparisons (involving NaN) pick
    /// the element of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let a = vec3(-1.0, 2.0, 5.0);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 5.0);
    /// assert_eq!(Vector::min(a, b), vec3(-1.0, f32::NEG_INFINITY, 5.0));
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self
    where
        T: Scalar,
    {
        Self(T::min_lanes(self.0, other.0))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// Each element is `if a > b { a } else { b }`, so unordered comparisons (involving NaN) pick
    /// the element of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let a = vec3(-1.0, 2.0, 5.0);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 5.0);
    /// assert_eq!(Vector::max(a, b), vec3(3.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub fn max(self, other: Self) -> Self
    where
        T: Scalar,
    {
        Self(T::max_lanes(self.0, other.0))
    }

    /// Returns a copy of `self` with each element clamped between the elements of `low` and
    /// `high`.
    ///
    /// This computes `max(min(self, high), low)`: if an element of `low` is larger than the
    /// corresponding element of `high`, the result for that element is the one from `low`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec3(-5, 5, 50);
    /// assert_eq!(v.clamped(Vector::splat(0), Vector::splat(10)), vec3(0, 5, 10));
    ///
    /// // Inverted bounds favor `low`.
    /// assert_eq!(vec1(5).clamped(vec1(8), vec1(2)), vec1(8));
    /// ```
    #[inline]
    pub fn clamped(self, low: Self, high: Self) -> Self
    where
        T: Scalar,
    {
        self.min(high).max(low)
    }

    /// Clamps this vector in place (see [`Vector::clamped`]) and returns a reference to it.
    #[inline]
    pub fn clamp(&mut self, low: Self, high: Self) -> &mut Self
    where
        T: Scalar,
    {
        *self = self.clamped(low, high);
        self
    }

    /// Linearly interpolates from `self` towards `other`.
    ///
    /// Computes `self + (other - self) * weight`. `weight` is not clamped, so values outside of
    /// `0..=1` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(5.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(20.0, 30.0));
    /// ```
    #[inline]
    pub fn lerp(self, other: Self, weight: T) -> Self
    where
        T: Scalar,
    {
        self + (other - self) * weight
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Scalar,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Copies exactly `N` elements out of a slice.
///
/// # Examples
///
/// ```
/// # use mgmath::*;
/// let data = [1.0, 2.0, 3.0];
/// let v = Vec3f::try_from(&data[..]).unwrap();
/// assert_eq!(v, vec3(1.0, 2.0, 3.0));
/// assert!(Vec2f::try_from(&data[..]).is_err());
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LengthMismatch;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| LengthMismatch {
                expected: N,
                found: slice.len(),
            })
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[inline]
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        error::index_out_of_range("vector", index, len);
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::error::LengthMismatch;

    use super::*;

    fn random_vec3(rng: &mut fastrand::Rng) -> Vec3d {
        Vector::from_fn(|_| (rng.f64() - 0.5) * 200.0)
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1u8, 2, 3).dot(vec3(3, 2, 1)), 10);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn dot_commutes() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let (a, b) = (random_vec3(&mut rng), random_vec3(&mut rng));
            assert_eq!(a.dot(b), b.dot(a));
        }
    }

    #[test]
    fn length() {
        assert_eq!(Vec3f::ZERO.length(), 0.0);
        assert_eq!(vec2(3.0, -4.0).length(), 5.0);
        assert_eq!(vec2(3.0, -4.0).length_squared(), 25.0);
        assert_eq!(vec3(2, 3, 6).length_squared(), 49);

        let mut rng = fastrand::Rng::with_seed(8);
        for _ in 0..100 {
            assert!(random_vec3(&mut rng).length() >= 0.0);
        }
    }

    #[test]
    fn normalize() {
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..100 {
            let mut v = random_vec3(&mut rng);
            assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-12);

            v.normalize();
            let once = v;
            v.normalize();
            assert_abs_diff_eq!(v, once, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let v = Vec3f::ZERO.normalized();
        assert!(v.iter().all(|e| e.is_nan()));
    }

    #[test]
    fn distance_and_direction() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(1.0, 2.0, -1.0);
        assert_eq!(a.distance_to(b), 4.0);
        assert_eq!(b.distance_to(a), 4.0);
        assert_eq!(a.direction_to(b), -Vec3d::Z);
    }

    #[test]
    fn min_max_clamp() {
        let a = vec4(1, 8, -3, 0);
        let b = vec4(2, 4, -3, -1);
        assert_eq!(Vector::min(a, b), vec4(1, 4, -3, -1));
        assert_eq!(Vector::max(a, b), vec4(2, 8, -3, 0));

        let mut v = vec3(-1.5, 0.5, 1.5);
        v.clamp(Vector::splat(0.0), Vector::splat(1.0));
        assert_eq!(v, vec3(0.0, 0.5, 1.0));

        // `low > high`: the result is `low`.
        let v = vec2(0, 100).clamped(vec2(10, 10), vec2(5, 5));
        assert_eq!(v, vec2(10, 10));
    }

    #[test]
    fn lerp() {
        let a = vec3(0.0f32, 1.0, -1.0);
        let b = vec3(1.0f32, 3.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), vec3(0.5, 2.0, 0.0));
        assert_eq!(a.lerp(b, -1.0), vec3(-1.0, -1.0, -3.0));
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(vec3(2, 0, 0).cross(vec3(0, 3, 0)), vec3(0, 0, 6));
    }

    #[test]
    fn slice_conversion() {
        let data = [1, 2, 3, 4];
        assert_eq!(Vec4i::try_from(&data[..]), Ok(vec4(1, 2, 3, 4)));
        assert_eq!(
            Vec3i::try_from(&data[..]),
            Err(LengthMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn large_vectors() {
        let a = Vector::<i64, 9>::from_fn(|i| i as i64);
        let b = Vector::<i64, 9>::splat(2);
        assert_eq!((a * b)[8], 16);
        assert_eq!(a.dot(b), 72);
        assert_eq!(a + b - b, a);
    }
}
