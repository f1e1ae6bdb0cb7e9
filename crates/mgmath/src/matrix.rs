use std::{array, fmt};

use crate::{
    error::{self, LengthMismatch},
    Float, Number, One, Vector, Zero,
};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Each row is stored as a [`Vector<T, C>`], so row-wise operations use the same element-wise
/// kernels as vectors do.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - A flat, row-major slice of exactly `R * C` elements can be converted with [`TryFrom`].
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::scaled_identity`] puts a value on the diagonal and zero everywhere else.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - Rotation matrices can be created with [`Matrix::rotation_2d`], [`Matrix::rotation_x`],
///   [`Matrix::rotation_y`], [`Matrix::rotation_z`] and their `_from_sin_cos` variants.
/// - [`Matrix::perspective`] creates a perspective projection matrix.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// Indexing a [`Matrix`] with a single `usize` yields a row. It also implements the [`Index`] and
/// [`IndexMut`] traits for tuples of `(usize, usize)`. The first element of the tuple is the *row*
/// (Y coordinate), the second is the *column* (X coordinate), matching common mathematical
/// notation. Indices are 0-based.
///
/// ```
/// # use mgmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[0], vec2(4, 1));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`],
/// [`Matrix::get_mut`] and [`Matrix::get_row`] return [`Option`]s instead and can be used for
/// checked indexing:
///
/// ```
/// # use mgmath::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// assert_eq!(mat.get_row(1), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, C>; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_columns([vec2(1, 2), vec2(3, 4), vec2(5, 6)]);
    /// assert_eq!(mat[0], vec3(1, 3, 5));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with `value` on the diagonal and zero everywhere else.
    ///
    /// For non-square matrices, only the first `min(R, C)` diagonal positions are set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Mat2x3::scaled_identity(5);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [5, 0, 0],
    ///     [0, 5, 0],
    /// ]));
    /// ```
    pub fn scaled_identity(value: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| if row == col { value } else { T::ZERO })
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col].0[row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a reference to the row at index `row`, or [`None`] if out of bounds.
    pub fn get_row(&self, row: usize) -> Option<&Vector<T, C>> {
        self.0.get(row)
    }

    /// Returns a reference to the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds. Use [`Matrix::get_row`] for a checked version.
    #[track_caller]
    pub fn row(&self, row: usize) -> &Vector<T, C> {
        check_row(row, R);
        &self.0[row]
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// ```
    #[track_caller]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        check_column(col, C);
        Vector::from_fn(|row| self.0[row].0[col])
    }

    /// Returns the rows of this matrix.
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    /// Converts this matrix into an array of its rows.
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0
    }

    /// Returns a copy of this matrix with the row `row` and the column `col` removed.
    ///
    /// The output dimensions `R2` and `C2` must be exactly one less than `R` and `C`, otherwise
    /// the call fails to compile.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(mat.submatrix::<2, 2>(1, 1), Matrix::from_rows([
    ///     [1, 3],
    ///     [7, 9],
    /// ]));
    /// ```
    #[track_caller]
    pub fn submatrix<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, R2, C2>
    where
        T: Copy,
    {
        const {
            assert!(
                R2 + 1 == R && C2 + 1 == C,
                "submatrix must have one row and one column less than its source"
            )
        };
        check_row(row, R);
        check_column(col, C);
        Matrix::from_fn(|i, j| self.0[i + (i >= row) as usize].0[j + (j >= col) as usize])
    }
}

#[inline]
#[track_caller]
fn check_row(row: usize, rows: usize) {
    if row >= rows {
        error::index_out_of_range("row", row, rows);
    }
}

#[inline]
#[track_caller]
fn check_column(col: usize, columns: usize) {
    if col >= columns {
        error::index_out_of_range("column", col, columns);
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a Vector<T, C>);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. For non-square matrices,
    /// the diagonal ends at the smaller of the two dimensions.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i].0[i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = LengthMismatch;

    /// Creates a matrix from a flat, row-major slice of exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Mat2x3::try_from(&[1, 2, 3, 4, 5, 6][..]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));
    /// ```
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() != R * C {
            return Err(LengthMismatch {
                expected: R * C,
                found: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[row * C + col]))
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i].0[i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To create a non-square matrix from its diagonal, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag.0[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i].0[i])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// 2x2 matrices use `a*d - b*c` directly. Larger matrices are expanded by cofactors down the
    /// first column, with signs alternating from `+`. The cost grows with `N!`, which is fine for
    /// the 3x3 and 4x4 matrices this is meant for.
    ///
    /// Only available for matrices with at least 2 rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mgmath::*;
    /// assert_eq!(Matrix::from_rows([[2, 0], [0, 3]]).determinant(), 6);
    /// assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        const { assert!(N >= 2, "determinant requires at least a 2x2 matrix") };
        let rows: [usize; N] = array::from_fn(|i| i);
        self.cofactor_expansion(&rows, 0)
    }

    /// Determinant of the minor made of `rows` and the columns `col..N`.
    ///
    /// The remaining columns are always a contiguous suffix, since every step removes the first
    /// one.
    fn cofactor_expansion(&self, rows: &[usize], col: usize) -> T
    where
        T: Number,
    {
        let m = |row: usize, col: usize| self.0[rows[row]].0[col];
        if rows.len() == 2 {
            return m(0, col) * m(1, col + 1) - m(0, col + 1) * m(1, col);
        }

        let mut minor = [0; N];
        let mut det = T::ZERO;
        for i in 0..rows.len() {
            let mut len = 0;
            for (j, &row) in rows.iter().enumerate() {
                if j != i {
                    minor[len] = row;
                    len += 1;
                }
            }

            let term = m(i, col) * self.cofactor_expansion(&minor[..len], col + 1);
            det = if i % 2 == 0 { det + term } else { det - term };
        }
        det
    }
}

impl<T: Float> Matrix<T, 2, 2> {
    /// Creates a 2x2 matrix rotating 2D vectors counterclockwise by `angle` radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// # use std::f64::consts::FRAC_PI_2;
    /// let rot = Mat2d::rotation_2d(FRAC_PI_2);
    /// assert_abs_diff_eq!(rot * Vec2d::X, Vec2d::Y, epsilon = 1e-15);
    /// ```
    pub fn rotation_2d(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s], [s, c]])
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Creates a homogeneous 3x3 matrix rotating 2D points counterclockwise by `angle` radians.
    ///
    /// The upper-left 2x2 block is [`Mat2::rotation_2d`]; translation components stay untouched.
    pub fn rotation_2d(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, T::ZERO],
            [s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a matrix rotating by `angle` radians around the X axis.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::rotation_x_from_sin_cos(s, c)
    }

    /// Creates a matrix rotating around the X axis, given the sine and cosine of the angle.
    pub fn rotation_x_from_sin_cos(sin: T, cos: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [l, o, o],
            [o, cos, -sin],
            [o, sin, cos],
        ])
    }

    /// Creates a matrix rotating by `angle` radians around the Y axis.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::rotation_y_from_sin_cos(s, c)
    }

    /// Creates a matrix rotating around the Y axis, given the sine and cosine of the angle.
    pub fn rotation_y_from_sin_cos(sin: T, cos: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [cos, o, sin],
            [o, l, o],
            [-sin, o, cos],
        ])
    }

    /// Creates a matrix rotating by `angle` radians around the Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let rot = Mat3f::rotation_z(FRAC_PI_2);
    /// assert_abs_diff_eq!(rot * Vec3f::X, Vec3f::Y, epsilon = 1e-7);
    /// ```
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::rotation_z_from_sin_cos(s, c)
    }

    /// Creates a matrix rotating around the Z axis, given the sine and cosine of the angle.
    pub fn rotation_z_from_sin_cos(sin: T, cos: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            [cos, -sin, o],
            [sin, cos, o],
            [o, o, l],
        ])
    }
}

impl<T: Zero + One + Copy> Matrix<T, 3, 3> {
    /// Embeds this matrix in the upper-left corner of a 4x4 identity matrix.
    pub(crate) fn to_homogeneous(self) -> Matrix<T, 4, 4> {
        Matrix::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => self.0[row].0[col],
        })
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a 4x4 matrix rotating by `angle` radians around the X axis.
    pub fn rotation_x(angle: T) -> Self {
        Mat3::rotation_x(angle).to_homogeneous()
    }

    /// Creates a 4x4 matrix rotating around the X axis, given the sine and cosine of the angle.
    pub fn rotation_x_from_sin_cos(sin: T, cos: T) -> Self {
        Mat3::rotation_x_from_sin_cos(sin, cos).to_homogeneous()
    }

    /// Creates a 4x4 matrix rotating by `angle` radians around the Y axis.
    pub fn rotation_y(angle: T) -> Self {
        Mat3::rotation_y(angle).to_homogeneous()
    }

    /// Creates a 4x4 matrix rotating around the Y axis, given the sine and cosine of the angle.
    pub fn rotation_y_from_sin_cos(sin: T, cos: T) -> Self {
        Mat3::rotation_y_from_sin_cos(sin, cos).to_homogeneous()
    }

    /// Creates a 4x4 matrix rotating by `angle` radians around the Z axis.
    pub fn rotation_z(angle: T) -> Self {
        Mat3::rotation_z(angle).to_homogeneous()
    }

    /// Creates a 4x4 matrix rotating around the Z axis, given the sine and cosine of the angle.
    pub fn rotation_z_from_sin_cos(sin: T, cos: T) -> Self {
        Mat3::rotation_z_from_sin_cos(sin, cos).to_homogeneous()
    }

    /// Creates a right-handed perspective projection matrix.
    ///
    /// `fov` is the vertical field of view in radians, `aspect` is width divided by height. Points
    /// on the `near` and `far` planes are mapped to a depth of -1 and 1 respectively (OpenGL
    /// clip-space conventions).
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_abs_diff_eq;
    /// # use mgmath::*;
    /// # use std::f64::consts::FRAC_PI_2;
    /// let proj = Mat4d::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
    /// let clip = proj * vec4(0.0, 0.0, -1.0, 1.0);
    /// assert_abs_diff_eq!(clip.z() / clip.w(), -1.0, epsilon = 1e-12);
    /// ```
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Self {
        let t = (fov / T::TWO).tan();
        let o = T::ZERO;
        let depth = far - near;
        Self::from_rows([
            [T::ONE / (aspect * t), o, o, o],
            [o, T::ONE / t, o, o],
            [o, o, -(far + near) / depth, -(T::TWO * far * near) / depth],
            [o, o, -T::ONE, o],
        ])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}
