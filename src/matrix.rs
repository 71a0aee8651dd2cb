use std::{array, fmt};

use itertools::Itertools;

use crate::{Error, Float, Number, One, Result, Signed, Trig, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 2x2 matrix with [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;

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
/// The elements are stored as one contiguous sequence of `R * C` values, row after row: the
/// element at `(i, j)` lives at offset `i * C + j`. Both dimensions must be at least 1, which is
/// checked when the matrix type is instantiated. Like all shape checks that depend on the concrete
/// dimensions, the error is reported by `cargo build`, not by `cargo check`:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let empty = Matrix::<f32, 0, 3>::zeros();
/// ```
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays;
///   [`Matrix::from_row_major`] takes a flat slice in row-major order.
/// - [`Matrix::from_fn`] computes each element from its `(row, col)` position.
/// - [`Matrix::full`], [`Matrix::zeros`] and [`Matrix::ones`] fill every element with the same
///   value.
/// - Square matrices additionally offer [`Matrix::identity`] and [`Matrix::from_diagonal`].
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] create 2D rotation
///   matrices from a rotation angle.
///
/// # Element Access
///
/// Elements are addressed with `(row, col)` tuples through [`Index`] and [`IndexMut`], in the
/// same order as the usual `aᵢⱼ` notation, starting at 0.
///
/// ```
/// # use fixed_linalg::*;
/// let mut m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(m[(1, 0)], 4);
/// m[(1, 0)] = -4;
/// assert_eq!(m.row(1), vec3(-4, 5, 6));
/// ```
///
/// Out-of-range indices panic. [`Matrix::get`] and [`Matrix::get_mut`] are the checked
/// alternatives and return [`None`] instead.
///
/// # Arithmetic
///
/// `+` and `-` operate element-wise. `*` between two matrices is the matrix product (see
/// [`Matrix::matmul`]); the element-wise product is [`Matrix::hadamard`]. Multiplying with a scalar
/// or a [`Vector`] is also supported.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

/// `zeroed()` checks the non-empty shape like every other constructor:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// use bytemuck::Zeroable;
///
/// let empty = Matrix::<f32, 2, 0>::zeroed();
/// ```
///
/// Byte-level casts through [`bytemuck::Pod`] do not run this check; they can only produce the
/// same shape as their input.
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
    fn zeroed() -> Self {
        Self::wrap(<[[T; C]; R] as bytemuck::Zeroable>::zeroed())
    }
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

/// Compile-time checks relating the shape of a matrix to the shape of a derived matrix.
struct Shape<const R: usize, const C: usize, const R2: usize, const C2: usize>;

impl<const R: usize, const C: usize, const R2: usize, const C2: usize> Shape<R, C, R2, C2> {
    const DROPS_ONE_ROW_AND_COLUMN: () = assert!(
        R2 + 1 == R && C2 + 1 == C,
        "a submatrix must have exactly one row and one column less than its parent"
    );
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be non-zero");

    /// Wraps row-major storage; every constructor funnels through here.
    #[inline]
    const fn wrap(rows: [[T; C]; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let by_rows = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let by_columns = Matrix::from_columns([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]);
    /// assert_eq!(by_rows, by_columns);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::wrap(rows)
    }

    /// Stacks `R` row vectors into a matrix.
    pub fn from_row_vectors(rows: [Vector<T, C>; R]) -> Self {
        Self::wrap(rows.map(Vector::into_array))
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns(columns: [[T; R]; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] from a flat slice of `R * C` elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `elems` doesn't contain exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Mat2x3::from_row_major(&[1, 2, 3, 4, 5, 6])?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]));
    ///
    /// assert!(Mat2x3::from_row_major(&[1, 2, 3]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_row_major(elems: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if elems.len() != R * C {
            return Err(Error::LengthMismatch {
                expected: R * C,
                actual: elems.len(),
            });
        }
        Ok(Self::from_fn(|row, col| elems[row * C + col]))
    }

    /// Builds a matrix by calling `cb` with every `(row, col)` position, row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
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
        Self::wrap(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    #[inline]
    pub fn full(elem: T) -> Self
    where
        T: Copy,
    {
        Self::wrap([[elem; C]; R])
    }

    /// Creates a matrix with every element set to 0.
    #[inline]
    pub fn zeros() -> Self
    where
        T: Zero + Copy,
    {
        Self::ZERO
    }

    /// Creates a matrix with every element set to 1.
    #[inline]
    pub fn ones() -> Self
    where
        T: One + Copy,
    {
        Self::ONE
    }

    /// Transforms each element with `f`, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let odd = mat.map(|i| i % 2 == 1);
    /// assert_eq!(odd, Matrix::from_rows([
    ///     [false, true, false],
    ///     [true, false, true],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix::wrap(self.0.map(|row| row.map(&mut f)))
    }

    /// Combines the elements of `self` and `other` pairwise.
    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        T: Copy,
        F: FnMut(T, T) -> T,
    {
        Self::from_fn(|row, col| f(self.0[row][col], other.0[row][col]))
    }

    /// Mirrors the matrix along its main diagonal, turning rows into columns.
    ///
    /// Transposing twice yields the original matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
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
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Checked element access.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 2), Some(&5));
    /// assert_eq!(mat.get(0, 3), None);
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Returns row `index` as a [`Vector`].
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from(self.0[index])
    }

    /// Returns column `index` as a [`Vector`].
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns an iterator over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }

    /// Returns all `R * C` elements as one slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_flat_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        // Safety: `[[T; C]; R]` is laid out as `R * C` consecutive `T`s without padding.
        unsafe { std::slice::from_raw_parts(self.0.as_ptr().cast::<T>(), R * C) }
    }

    /// Copies `self` into the top left corner of a matrix with `R2` rows and `C2` columns.
    ///
    /// Rows and columns that don't fit are cut off; new positions are filled with
    /// [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self.0[row][col]
            } else {
                T::ZERO
            }
        })
    }

    /// Returns the matrix obtained by deleting row `drop_row` and column `drop_col`.
    ///
    /// The remaining elements keep their relative order. The result must have exactly one row and
    /// one column less than `self`; anything else fails to build. The error shows up at build
    /// time, `cargo check` does not report it.
    ///
    /// # Panics
    ///
    /// Panics if `drop_row` or `drop_col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// let sub: Mat2<i32> = mat.submatrix(1, 1);
    /// assert_eq!(sub, Matrix::from_rows([
    ///     [1, 3],
    ///     [7, 9],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let sub: Mat3<i32> = Mat3::<i32>::IDENTITY.submatrix(0, 0);
    /// ```
    pub fn submatrix<const R2: usize, const C2: usize>(
        &self,
        drop_row: usize,
        drop_col: usize,
    ) -> Matrix<T, R2, C2>
    where
        T: Copy,
    {
        let () = Shape::<R, C, R2, C2>::DROPS_ONE_ROW_AND_COLUMN;
        assert!(
            drop_row < R && drop_col < C,
            "cannot drop row {} and column {} of a {}x{} matrix",
            drop_row,
            drop_col,
            R,
            C,
        );

        Matrix::from_fn(|row, col| {
            let row = if row < drop_row { row } else { row + 1 };
            let col = if col < drop_col { col } else { col + 1 };
            self.0[row][col]
        })
    }

    /// Adds `value` to every element.
    pub fn bias(self, value: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem + value)
    }

    /// Multiplies every element with `factor`.
    pub fn scale(self, factor: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem * factor)
    }

    /// Element-wise (Hadamard) product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows([[5, 6], [7, 8]]);
    /// assert_eq!(a.hadamard(b), Matrix::from_rows([[5, 12], [21, 32]]));
    /// ```
    pub fn hadamard(self, other: Self) -> Self
    where
        T: Number,
    {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise division of `self` by `other`.
    pub fn div_elementwise(self, other: Self) -> Self
    where
        T: Number,
    {
        self.zip_with(other, |a, b| a / b)
    }

    /// Computes the matrix product `self · other`.
    ///
    /// The number of columns of `self` must equal the number of rows of `other`; this is enforced
    /// by the types. The [`Mul`](std::ops::Mul) impl between matrices does the same.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [7, 8],
    ///     [9, 10],
    ///     [11, 12],
    /// ]);
    /// assert_eq!(a.matmul(b), Matrix::from_rows([
    ///     [58, 64],
    ///     [139, 154],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let _ = Mat2x3::<i32>::ZERO.matmul(Mat2x3::<i32>::ZERO);
    /// ```
    pub fn matmul<const Q: usize>(self, other: Matrix<T, C, Q>) -> Matrix<T, R, Q>
    where
        T: Number,
    {
        Matrix::from_fn(|i, j| (0..C).fold(T::ZERO, |acc, k| acc + self.0[i][k] * other.0[k][j]))
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self::wrap([[T::ZERO; C]; R]);
}

impl<T: One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 1.
    pub const ONE: Self = Self::wrap([[T::ONE; C]; R]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self::wrap(rows)
    };

    /// Returns the identity matrix.
    ///
    /// Multiplying any matrix or vector with it returns the matrix or vector unchanged.
    ///
    /// ```compile_fail
    /// # use fixed_linalg::*;
    /// let id = Mat2x3::<f32>::identity();
    /// ```
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Collects the elements `(i, i)` into a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a diagonal matrix: `diag` along the main diagonal, zero everywhere else.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sums the elements on the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [5, 9],
    ///     [9, -2],
    /// ]);
    /// assert_eq!(m.trace(), 3);
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

// Determinants and inverses only exist for 2x2 and 3x3 matrices (closed-form formulas).
impl<T: Signed> Matrix<T, 2, 2> {
    /// The [determinant] `ad − bc`.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Computes the inverse `1/(ad − bc) · [[d, −b], [−c, a]]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if `self` is not invertible (ie. if its [`determinant()`] is
    /// zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Mat2f::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = mat.inverse()?;
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-6);
    ///
    /// let singular = Mat2f::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(singular.inverse(), Err(Error::Singular));
    /// # Ok::<(), Error>(())
    /// ```
    #[doc(alias = "inverse2x2", alias = "invert")]
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("cannot invert singular matrix {:?}", self);
            return Err(Error::Singular);
        }

        let [[a, b], [c, d]] = self.0;
        Ok(Matrix::from_rows([[d, -b], [-c, a]]).scale(T::ONE / det))
    }

    /// Rotation by `radians` in the clockwise direction, for a Y axis pointing up.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Rotation by `radians` in the counterclockwise direction, for a Y axis pointing up.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_rows([
            [cos, -sin],
            [sin, cos],
        ])
    }
}

impl<T: Signed> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix, by cofactor expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverts this 3x3 matrix via its adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if the [`determinant()`] of `self` is zero.
    ///
    /// [`determinant()`]: Self::determinant
    #[doc(alias = "invert")]
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("cannot invert singular matrix {:?}", self);
            return Err(Error::Singular);
        }

        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        Ok(adjugate.scale(T::ONE / det))
    }
}

impl<T, const C: usize> Matrix<T, 1, C> {
    /// Reinterprets this single-row matrix as a [`Vector`].
    pub fn into_row_vector(self) -> Vector<T, C> {
        let [row] = self.0;
        Vector::from(row)
    }
}

impl<T, const R: usize> Matrix<T, R, 1> {
    /// Reinterprets this single-column matrix as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let col = Matrix::from_rows([[1], [2], [3]]);
    /// assert_eq!(col.into_column_vector(), vec3(1, 2, 3));
    /// ```
    pub fn into_column_vector(self) -> Vector<T, R> {
        Vector::from(self.0.map(|[elem]| elem))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self::wrap(rows)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Matrix<T, 1, N> {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.into_row_matrix()
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

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a [T; C]);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Renders the matrix as a block of text: one line per row, elements separated by spaces.
///
/// Formatting flags like precision are applied to each element. The output is meant for humans,
/// it is not a serialization format.
///
/// ```
/// # use fixed_linalg::*;
/// let mat = Matrix::from_rows([[1.0, 2.5], [-3.0, 4.0]]);
/// assert_eq!(mat.to_string(), "1 2.5\n-3 4");
/// assert_eq!(format!("{:.1}", mat), "1.0 2.5\n-3.0 4.0");
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(&row.iter().format(" "), f)?;
        }
        Ok(())
    }
}
