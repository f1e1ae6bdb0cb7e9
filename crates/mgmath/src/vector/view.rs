//! Named element accessors and swizzles.
//!
//! The accessors index into the same backing array as [`Index`][std::ops::Index], so there is
//! exactly one storage location per element. Calling an accessor on a vector that does not have
//! the requested element is rejected when the call is monomorphized:
//!
//! ```compile_fail
//! # use mgmath::*;
//! let v = vec2(1, 2);
//! let _ = v.z();
//! ```

use crate::Vector;

macro_rules! accessors {
    ($($get:ident, $get_mut:ident => $index:literal;)+) => {
        $(
            #[doc = concat!("Returns the element at index ", stringify!($index), ".")]
            ///
            #[doc = concat!("Only available for vectors with more than ", stringify!($index), " elements.")]
            #[inline]
            pub fn $get(&self) -> T
            where
                T: Copy,
            {
                const { assert!(N > $index, "vector has no such element") };
                self.0[$index]
            }

            #[doc = concat!("Returns a mutable reference to the element at index ", stringify!($index), ".")]
            #[inline]
            pub fn $get_mut(&mut self) -> &mut T {
                const { assert!(N > $index, "vector has no such element") };
                &mut self.0[$index]
            }
        )+
    };
}

impl<T, const N: usize> Vector<T, N> {
    accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        z, z_mut => 2;
        w, w_mut => 3;
    }

    /// Builds a new `M`-element vector by picking elements of `self` by index.
    ///
    /// Indices may repeat and appear in any order.
    ///
    /// # Panics
    ///
    /// Panics if any of the `indices` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.swizzle([3, 2, 1, 0]), vec4(4, 3, 2, 1));
    /// assert_eq!(v.swizzle([0, 0]), vec2(1, 1));
    /// assert_eq!(v.swizzle([2, 3, 3, 0, 1]), Vector::from([3, 4, 4, 1, 2]));
    /// ```
    #[track_caller]
    pub fn swizzle<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M>
    where
        T: Copy,
    {
        Vector(indices.map(|i| self[i]))
    }

    /// Returns the first two elements as a [`Vec2`][crate::Vec2].
    #[inline]
    pub fn xy(&self) -> Vector<T, 2>
    where
        T: Copy,
    {
        Vector([self.x(), self.y()])
    }

    /// Returns the first three elements as a [`Vec3`][crate::Vec3].
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3>
    where
        T: Copy,
    {
        Vector([self.x(), self.y(), self.z()])
    }
}
