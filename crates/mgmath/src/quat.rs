mod ops;

use std::fmt;

use crate::{
    dispatch::Scalar, error::DomainError, vec4, Float, Mat3, Mat4, Matrix, One, Vector, Zero,
};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are stored like a 4-dimensional vector `(i, j, k, w)`, where `w` is the real part.
/// Quaternions multiply with the Hamilton product, and add, subtract and scale component-wise.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its imaginary parts `i`, `j`, `k` and its real part `w`.
    pub const fn from_components(i: T, j: T, k: T, w: T) -> Self {
        Self {
            vec: vec4(i, j, k, w),
        }
    }

    /// Returns the components as a [`Vector`] `(i, j, k, w)`.
    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Converts this quaternion into a [`Vector`] `(i, j, k, w)`.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    pub fn i(&self) -> T
    where
        T: Copy,
    {
        self.vec.x()
    }

    pub fn j(&self) -> T
    where
        T: Copy,
    {
        self.vec.y()
    }

    pub fn k(&self) -> T
    where
        T: Copy,
    {
        self.vec.z()
    }

    /// Returns the real part of this quaternion.
    pub fn w(&self) -> T
    where
        T: Copy,
    {
        self.vec.w()
    }

    /// Returns the imaginary parts `(i, j, k)` as a 3-dimensional [`Vector`].
    pub fn vector_part(&self) -> Vector<T, 3>
    where
        T: Copy,
    {
        self.vec.xyz()
    }
}

impl<T: Scalar> Quat<T> {
    /// Computes the 4-dimensional dot product between `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the squared norm of this quaternion.
    ///
    /// If the squared norm is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    #[doc(alias = "length2", alias = "length_squared")]
    pub fn norm_squared(&self) -> T {
        self.vec.length_squared()
    }
}

impl<T: Float> Quat<T> {
    /// Returns the norm (length) of this quaternion.
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose norm equals one).
    ///
    /// A zero quaternion normalizes to NaN components.
    pub fn normalized(self) -> Self {
        Self {
            vec: self.vec.normalized(),
        }
    }

    /// Returns the conjugate of this quaternion, which negates the imaginary parts.
    ///
    /// For unit quaternions, the conjugate is also the inverse and describes the opposite
    /// rotation.
    pub fn conjugate(self) -> Self {
        let [i, j, k, w] = self.vec.into_array();
        Self::from_components(-i, -j, -k, w)
    }

    /// Returns the multiplicative inverse of this quaternion, `conjugate / norm²`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroQuaternion`] if the squared norm is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let q = Quatf::from_components(0.0, 2.0, 0.0, 0.0);
    /// assert_eq!(q.inverse(), Ok(Quat::from_components(0.0, -0.5, 0.0, 0.0)));
    ///
    /// let zero = Quatf::from_components(0.0, 0.0, 0.0, 0.0);
    /// assert_eq!(zero.inverse(), Err(error::DomainError::ZeroQuaternion));
    /// ```
    pub fn inverse(self) -> Result<Self, DomainError> {
        let norm_squared = self.norm_squared();
        if norm_squared == T::ZERO {
            log::debug!("cannot invert zero-norm quaternion {:?}", self.vec);
            return Err(DomainError::ZeroQuaternion);
        }
        Ok(self.conjugate() / norm_squared)
    }

    /// Rotates `v` by this quaternion, computing `q * (v, 0) * q̄`.
    ///
    /// This assumes `self` is a unit quaternion. Non-unit quaternions also scale `v`; use
    /// [`Quat::rotate_safe`] to rotate with arbitrary quaternions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// # use std::f64::consts::FRAC_PI_2;
    /// let q = Quatd::from_angle(Vec3d::Z, FRAC_PI_2);
    /// assert_abs_diff_eq!(q.rotate(Vec3d::X), Vec3d::Y, epsilon = 1e-15);
    /// ```
    pub fn rotate(self, v: Vector<T, 3>) -> Vector<T, 3> {
        let p = Self::from_vec(v.extend(T::ZERO));
        (self * p * self.conjugate()).vector_part()
    }

    /// Rotates `v` by this quaternion, computing `q * (v, 0) * q⁻¹`.
    ///
    /// Unlike [`Quat::rotate`], this does not scale `v` when `self` is not a unit quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroQuaternion`] if `self` has zero norm and can not be inverted.
    pub fn rotate_safe(self, v: Vector<T, 3>) -> Result<Vector<T, 3>, DomainError> {
        let p = Self::from_vec(v.extend(T::ZERO));
        Ok((self * p * self.inverse()?).vector_part())
    }

    /// Creates a quaternion rotating by `angle` radians around `axis`.
    ///
    /// `axis` has to be normalized. An `angle` of exactly zero returns [`Quat::IDENTITY`].
    /// [`Quat::from_angle_safe`] normalizes the axis and reduces the angle first.
    pub fn from_angle(axis: Vector<T, 3>, angle: T) -> Self {
        if angle == T::ZERO {
            return Self::IDENTITY;
        }

        let (sin, cos) = (angle / T::TWO).sin_cos();
        Self::from_vec((axis * sin).extend(cos))
    }

    /// Creates a quaternion rotating by `angle` radians around `axis`, normalizing `axis` and
    /// reducing `angle` to less than a full turn first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let q = Quatf::from_angle_safe(vec3(0.0, 0.0, 5.0), 0.5);
    /// assert_eq!(q, Quatf::from_angle(Vec3f::Z, 0.5));
    /// ```
    pub fn from_angle_safe(axis: Vector<T, 3>, angle: T) -> Self {
        if angle == T::ZERO {
            return Self::IDENTITY;
        }

        let turns = angle / T::TAU;
        let reduced = if angle > T::TAU {
            angle - T::TAU * turns.floor()
        } else if angle < -T::TAU {
            angle - T::TAU * turns.ceil()
        } else {
            angle
        };
        if reduced != angle {
            log::trace!("reduced rotation angle {angle:?} to {reduced:?}");
        }

        let (sin, cos) = (reduced / T::TWO).sin_cos();
        Self::from_vec((axis.normalized() * sin).extend(cos))
    }

    /// Creates a quaternion rotating by `angle` radians around the X axis.
    pub fn from_rotation_x(angle: T) -> Self {
        Self::from_angle(Vector::<T, 3>::X, angle)
    }

    /// Creates a quaternion rotating by `angle` radians around the Y axis.
    pub fn from_rotation_y(angle: T) -> Self {
        Self::from_angle(Vector::<T, 3>::Y, angle)
    }

    /// Creates a quaternion rotating by `angle` radians around the Z axis.
    pub fn from_rotation_z(angle: T) -> Self {
        Self::from_angle(Vector::<T, 3>::Z, angle)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    ///
    /// The X rotation is applied first, so the result is `z * y * x`.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Returns a 3x3 matrix that rotates vectors the same way as [`Quat::rotate`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// let q = Quatd::from_rotation_xyz(0.1, 0.2, 0.3);
    /// let v = vec3(1.0, -2.0, 0.5);
    /// assert_abs_diff_eq!(q.to_rotation_mat3() * v, q.rotate(v), epsilon = 1e-12);
    /// ```
    pub fn to_rotation_mat3(&self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (l, two) = (T::ONE, T::TWO);
        Matrix::from_rows([
            [
                l - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ],
            [
                two * (x * y + z * w),
                l - two * (x * x + z * z),
                two * (y * z - x * w),
            ],
            [
                two * (x * z - y * w),
                two * (y * z + x * w),
                l - two * (x * x + y * y),
            ],
        ])
    }

    /// Returns a homogeneous 4x4 rotation matrix; see [`Quat::to_rotation_mat3`].
    pub fn to_rotation_mat4(&self) -> Mat4<T> {
        self.to_rotation_mat3().to_homogeneous()
    }

    /// Spherically interpolates from `self` towards `to`.
    ///
    /// Interpolation always takes the shorter arc: if the quaternions point into opposite
    /// hemispheres, `to` is negated first. When the two are nearly parallel (a dot product above
    /// `0.9995`), this falls back to a normalized linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// let a = Quatd::IDENTITY;
    /// let b = Quatd::from_rotation_z(2.0);
    /// assert_abs_diff_eq!(a.slerp(b, 0.5), Quatd::from_rotation_z(1.0), epsilon = 1e-12);
    /// ```
    pub fn slerp(self, to: Self, weight: T) -> Self {
        let mut to = to;
        let mut d = self.dot(to);
        if d < T::ZERO {
            d = -d;
            to = -to;
        }

        if d > T::from_f64(0.9995) {
            return Self::from_vec(self.vec.lerp(to.vec, weight)).normalized();
        }

        let theta = d.acos() * weight;
        let (sin, cos) = theta.sin_cos();
        self * cos + (to - self * d).normalized() * sin
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.vec, f)
    }
}

/// Formats the components as `(i, j, k, w)`.
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}
