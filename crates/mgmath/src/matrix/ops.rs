use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{dispatch::Scalar, Matrix, Vector};

use super::{check_column, check_row};

/// Row access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    #[track_caller]
    fn index(&self, row: usize) -> &Self::Output {
        check_row(row, R);
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        check_row(row, R);
        &mut self.0[row]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        check_row(row, R);
        check_column(col, C);
        &self.0[row].0[col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        check_row(row, R);
        check_column(col, C);
        &mut self.0[row].0[col]
    }
}

impl<T: Scalar, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).fold(true, |all, (a, b)| all & (a == b))
    }
}

impl<T: Scalar + Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
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

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
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
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Element-wise addition.
impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs -= rhs;
        }
    }
}

/// Matrix * Column Vector.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.0[row].dot(rhs))
    }
}

/// Matrix * Matrix.
///
/// Each element of the result is the dot product of a row of `self` and a column of `rhs`,
/// accumulated from the first term to the last.
impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        let columns = rhs.transpose();
        Matrix::from_fn(|i, j| self.0[i].dot(columns.0[j]))
    }
}

/// Matrix * Matrix, for square matrices.
impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Matrix * Scalar.
impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.0 {
            *row *= rhs;
        }
    }
}

/// Matrix / Scalar.
impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

/// Matrix / Scalar.
impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, rhs: T) {
        for row in &mut self.0 {
            *row /= rhs;
        }
    }
}
