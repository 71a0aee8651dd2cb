use std::{array, fmt};

use crate::{
    traits::{Float, Number, Signed},
    Mat2, Matrix, MinMax, One, Zero,
};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions, [`Vector::new`] and the
///   [`From`] impl for arrays create vectors from provided values.
/// - [`Vector::full`] copies the given value into each element; [`Vector::zeros`] and
///   [`Vector::ones`] fill the vector with 0 and 1.
/// - [`Vector::from_fn`] computes every element from its index.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - [`Vector::component`] and the [`Index`] impl access elements by position, panicking when
///   out of bounds. [`Vector::get`] is the checked variant.
/// - Vectors of dimension 1 to 4 expose their elements as the fields `x`, `y`, `z` and `w`.
/// - [`Vector::x`], [`Vector::y`], [`Vector::z`] and [`Vector::w`] work for any dimension. Asking
///   for a component the vector doesn't have is a build error (from `cargo build`, not
///   `cargo check`).
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let z = vec2(1, 2).z();
/// ```
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` between two vectors operate element-wise (`*` is the Hadamard product).
/// Every operation returns a new vector.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector whose elements are all 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// The vector whose elements are all 1.
    pub const ONE: Self = Self([T::ONE; N]);
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
    const HAS_X: () = assert!(N > 0, "vector has no `x` component");
    const HAS_Y: () = assert!(N > 1, "vector has no `y` component");
    const HAS_Z: () = assert!(N > 2, "vector has no `z` component");
    const HAS_W: () = assert!(N > 3, "vector has no `w` component");

    /// Creates a vector from an array of its elements.
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        Self(elems)
    }

    /// Broadcasts `elem` into every position of a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::full(-4);
    /// assert_eq!(v, vec3(-4, -4, -4));
    /// ```
    #[inline]
    pub fn full(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector with every element set to 0.
    #[inline]
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self::ZERO
    }

    /// Creates a vector with every element set to 1.
    #[inline]
    pub fn ones() -> Self
    where
        T: One,
    {
        Self::ONE
    }

    /// Builds a vector by calling `cb` once per index, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::from_fn(|i| i * i);
    /// assert_eq!(v, vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms each element with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i as f32 / 2.0);
    /// assert_eq!(v, vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` position by position.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!(),
        })
    }

    /// Returns the element at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn component(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.0[index]
    }

    /// Returns a reference to the element at position `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns the first element.
    ///
    /// Fails to build for vectors with 0 elements. The error is raised during code generation, so
    /// `cargo check` alone does not report it.
    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        let () = Self::HAS_X;
        self.0[0]
    }

    /// Returns the second element.
    ///
    /// Fails to build for vectors with fewer than 2 elements. The error is raised during code generation, so
    /// `cargo check` alone does not report it.
    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        let () = Self::HAS_Y;
        self.0[1]
    }

    /// Returns the third element.
    ///
    /// Fails to build for vectors with fewer than 3 elements. The error is raised during code generation, so
    /// `cargo check` alone does not report it.
    #[inline]
    pub fn z(&self) -> T
    where
        T: Copy,
    {
        let () = Self::HAS_Z;
        self.0[2]
    }

    /// Returns the fourth element.
    ///
    /// Fails to build for vectors with fewer than 4 elements. The error is raised during code generation, so
    /// `cargo check` alone does not report it.
    #[inline]
    pub fn w(&self) -> T
    where
        T: Copy,
    {
        let () = Self::HAS_W;
        self.0[3]
    }

    /// Borrows the elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the vector into its element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Reinterprets this vector as a matrix with a single row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let row = vec3(1, 2, 3).into_row_matrix();
    /// assert_eq!(row, Matrix::from_rows([[1, 2, 3]]));
    /// assert_eq!(row.into_row_vector(), vec3(1, 2, 3));
    /// ```
    pub fn into_row_matrix(self) -> Matrix<T, 1, N> {
        Matrix::from_rows([self.0])
    }

    /// Reinterprets this vector as a matrix with a single column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let col = vec2(1, 2).into_column_matrix();
    /// assert_eq!(col, Matrix::from_rows([[1], [2]]));
    /// ```
    pub fn into_column_matrix(self) -> Matrix<T, N, 1> {
        Matrix::from_rows(self.0.map(|elem| [elem]))
    }

    /// Adds `value` to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).bias(-1), vec3(0, 1, 2));
    /// ```
    pub fn bias(self, value: T) -> Self
    where
        T: Number,
    {
        self + Self::full(value)
    }

    /// Multiplies every element with `factor`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).scale(2), vec3(2, 4, 6));
    /// ```
    pub fn scale(self, factor: T) -> Self
    where
        T: Number,
    {
        self * Self::full(factor)
    }

    /// Sum of the pairwise products of the elements of `self` and `other`.
    ///
    /// A positive result means the vectors point into the same half-space; zero means they are
    /// perpendicular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, -5, 6)), 12);
    /// assert_eq!(Vec2i::X.dot(Vec2i::Y), 0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Squared Euclidean length, `self · self`.
    ///
    /// Unlike [`Vector::norm`], this also works for integer vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(4, 0).norm2(), 16);
    /// ```
    pub fn norm2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
    /// ```
    #[doc(alias = "length")]
    pub fn norm(self) -> T
    where
        T: Float,
    {
        self.norm2().sqrt()
    }

    /// Scales this vector by the inverse of its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it yields NaN elements. Check
    /// `v.norm() == 0.0` first if that can happen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let n = vec2(0.0, -8.0).normalize();
    /// assert_eq!(n, vec2(0.0, -1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        self.scale(T::ONE / self.norm())
    }

    /// Unsigned angle between `self` and `other` in radians, in the range `[0, π]`.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful. Rounding errors
    /// that push the cosine of the angle outside of `[-1, 1]` are absorbed: parallel vectors always
    /// yield 0 and antiparallel vectors π.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// assert!((Vec3f::Y.angle(Vec3f::X) - PI / 2.0).abs() < 1e-6);
    /// assert_eq!(Vec3f::Y.angle(-Vec3f::Y), PI);
    ///
    /// let v = vec2(1.0f32, 1.0);
    /// assert_eq!(v.angle(v), 0.0);
    /// ```
    pub fn angle(self, other: Self) -> T
    where
        T: Float,
    {
        let cos = self.dot(other) / (self.norm() * other.norm());
        if cos > T::ONE {
            T::ZERO
        } else if cos < -T::ONE {
            T::PI
        } else {
            cos.acos()
        }
    }

    /// Projects `self` onto the direction of `onto`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let p = vec2(3.0, 4.0).project(vec2(2.0, 0.0));
    /// assert_eq!(p, vec2(3.0, 0.0));
    /// ```
    pub fn project(self, onto: Self) -> Self
    where
        T: Float,
    {
        onto.scale(self.dot(onto) / onto.dot(onto))
    }

    /// Reflects `self` off a surface with the given `normal`.
    ///
    /// `normal` does not need to be of unit length; it is normalized first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let r = vec2(1.0, -1.0).reflect(vec2(0.0, 5.0));
    /// assert_eq!(r, vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Float,
    {
        let n = normal.normalize();
        self - n.scale((T::ONE + T::ONE) * self.dot(n))
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(5.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(20.0, 30.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Float,
    {
        self.scale(T::ONE - t) + other.scale(t)
    }

    /// Per-element minimum.
    ///
    /// For floats, a NaN element loses against any number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = vec3(f32::NAN, 4.0, -2.0);
    /// let b = vec3(1.0, f32::INFINITY, -7.5);
    /// assert_eq!(a.min(b), vec3(1.0, 4.0, -7.5));
    /// assert_eq!(b.min(a), a.min(b));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Per-element maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let a = vec3(f32::NAN, 4.0, -2.0);
    /// let b = vec3(1.0, f32::INFINITY, -7.5);
    /// assert_eq!(a.max(b), vec3(1.0, f32::INFINITY, -2.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Restricts every element to the range given by the matching elements of `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = vec3(-1, 5, 2).clamp(Vector::zeros(), Vector::full(3));
    /// assert_eq!(v, vec3(0, 3, 2));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 1> {
    /// Grows the vector to 2 dimensions by appending `value`.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.0;
        Vector([x, value])
    }
}

impl<T> Vector<T, 2> {
    /// Drops the `y` element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.0;
        Vector([x])
    }

    /// Grows the vector to 3 dimensions by appending `value` as `z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let p = vec2(3, 4).extend(1);
    /// assert_eq!(p, vec3(3, 4, 1));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Rotates `self` counterclockwise around the origin by `radians`.
    ///
    /// This computes `(x·cos θ − y·sin θ, x·sin θ + y·cos θ)`, assuming that the Y axis points up
    /// and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vec2d::X.rotate(FRAC_PI_2);
    /// assert!((v - Vec2d::Y).norm() < 1e-12);
    /// ```
    pub fn rotate(self, radians: T) -> Self
    where
        T: Float,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Rotates `self` clockwise around the origin by `radians`.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Float,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane. Same as [`Vector::rotate`].
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Float,
    {
        self.rotate(radians)
    }

    /// Signed angle in radians by which `self` has to be rotated clockwise to point along `other`.
    ///
    /// Assumes a Y axis pointing up. For a Y axis pointing down, swap the arguments.
    pub fn signed_angle(self, other: Self) -> T
    where
        T: Float,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// The [perpendicular dot product] `x₁y₂ − y₁x₂`.
    ///
    /// Equal to the `z` element of the cross product of both vectors lifted into 3D.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Signed,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T> Vector<T, 3> {
    /// Drops the `z` element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(7, 8, 9).truncate(), vec2(7, 8));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Grows the vector to 4 dimensions by appending `value` as `w`.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Cross product `self × other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts the
    /// direction of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
    /// assert_eq!(Vec3i::Y.cross(Vec3i::X), -Vec3i::Z);
    /// assert_eq!(vec3(2, 3, 4).cross(vec3(5, 6, 7)), vec3(-3, 6, -3));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Signed,
    {
        let [x1, y1, z1] = self.0;
        let [x2, y2, z2] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            y1 * z2 - z1 * y2,
            z1 * x2 - x1 * z2,
            x1 * y2 - y1 * x2,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` element.
    ///
    /// Commonly used to turn homogeneous coordinates back into 3D points (after dividing by `w`).
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
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

impl<T, const N: usize> From<Matrix<T, 1, N>> for Vector<T, N> {
    #[inline]
    fn from(value: Matrix<T, 1, N>) -> Self {
        value.into_row_vector()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
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

/// Shorthand for a [`Vec1`].
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Shorthand for a [`Vec2`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.component(1), 1);
        assert_eq!(v.get(2), None);

        v.x = 777;
        assert_eq!(v[0], 777);
        assert_eq!(v.x(), 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.y(), 9);

        let big = Vector::from_fn(|i| i as i32);
        let big: Vector<i32, 6> = big;
        assert_eq!((big.x(), big.y(), big.z(), big.w()), (0, 1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn component_out_of_bounds() {
        vec3(1, 2, 3).component(3);
    }

    #[test]
    fn constructors() {
        assert_eq!(Vector::<i32, 3>::zeros(), [0, 0, 0]);
        assert_eq!(Vector::<f32, 2>::ones(), [1.0, 1.0]);
        assert_eq!(Vector::full(7u8), vec4(7, 7, 7, 7));
        assert_eq!(Vector::new([1, 2]), vec2(1, 2));
        assert_eq!(Vector::<i32, 2>::default(), Vector::ZERO);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0)), "(0.50, 1.00)");
    }

    #[test]
    fn equal() {
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_ne!(vec2(0.1 + 0.2, 0.0), vec2(0.3, 0.0));
        assert_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
    }

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(a - b, [-3, -3, -3]);
        assert_eq!(a * b, [4, 10, 18]);
        assert_eq!(b / a, [4, 2, 2]);
        assert_eq!(a.bias(10), [11, 12, 13]);
        assert_eq!(a.scale(-2), [-2, -4, -6]);
        assert_eq!(a.scale(3), a * 3i32);
    }

    #[test]
    fn unsigned() {
        let a = vec3(1u32, 2, 3);
        let b = vec3(4u32, 5, 6);
        assert_eq!(a.dot(Vector::ONE), 6);
        assert_eq!(a.dot(b), 32);
        assert_eq!(b.norm2(), 77);
        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(b - a, Vector::full(3));
        assert_eq!(a.bias(1).scale(2), vec3(4, 6, 8));
        assert_eq!(vec2(200u8, 7).bias(5), vec2(205, 12));
    }

    #[test]
    fn min_max() {
        let a = vec4(f64::NAN, 1.0, -0.5, 3.0);
        let b = vec4(2.0, f64::NAN, -1.0, 3.0);
        assert_eq!(a.min(b), vec4(2.0, 1.0, -1.0, 3.0));
        assert_eq!(a.max(b), vec4(2.0, 1.0, -0.5, 3.0));
        assert_eq!(b.max(a), a.max(b));

        assert!(vec2(f32::NAN, 0.0).min(vec2(f32::NAN, 1.0)).x.is_nan());

        assert_eq!(vec3(5u8, 0, 9).min(vec3(3, 4, 9)), vec3(3, 0, 9));
        assert_eq!(vec3(-5, 0, 9).max(Vector::ZERO), vec3(0, 0, 9));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1, 3, -5).norm2(), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn norm() {
        assert_eq!(vec3(2.0, 3.0, 6.0).norm(), 7.0);
        assert_abs_diff_eq!(vec4(1.0, -1.0, 2.0, 7.0).normalize().norm(), 1.0, epsilon = 1e-6);
        assert!(Vec3f::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn cross() {
        let a = vec3(2, 3, 4);
        let b = vec3(5, 6, 7);
        assert_eq!(a.cross(b), vec3(-3, 6, -3));
        assert_eq!(a.dot(a.cross(b)), 0);
        assert_eq!(b.dot(a.cross(b)), 0);
        assert_eq!(a.cross(a), Vec3i::ZERO);
    }

    #[test]
    fn angle() {
        assert_abs_diff_eq!(Vec3f::Y.angle(Vec3f::X), FRAC_PI_2);
        assert_abs_diff_eq!(Vec3f::Y.angle(Vec3f::Y), 0.0);
        assert_abs_diff_eq!(Vec3f::Y.angle(-Vec3f::Y), PI);
        assert_abs_diff_eq!(vec2(1.0, 1.0).angle(vec2(1.0, -1.0)), FRAC_PI_2);

        // |v|² rounds below dot(v, v), pushing the cosine to 1.0000001.
        let v = vec3(1.0f32, 1.0, 0.0);
        assert!(v.dot(v) / (v.norm() * v.norm()) > 1.0);
        assert_eq!(v.angle(v), 0.0);
        assert_eq!(v.angle(-v), PI);
    }

    #[test]
    fn project() {
        let p = vec3(1.0, 2.0, 3.0).project(vec3(0.0, 0.0, 2.0));
        assert_eq!(p, vec3(0.0, 0.0, 3.0));

        let v = vec2(3.0, 1.0);
        let onto = vec2(1.0, 1.0);
        let p = v.project(onto);
        assert_abs_diff_eq!(p, vec2(2.0, 2.0));
        assert_abs_diff_eq!((v - p).dot(onto), 0.0);
    }

    #[test]
    fn reflect() {
        assert_eq!(vec2(1.0, -1.0).reflect(Vec2f::Y), vec2(1.0, 1.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).reflect(vec3(-4.0, 0.0, 0.0)), vec3(-1.0, 2.0, 3.0));

        let v = vec3(0.3, -1.2, 2.0);
        let r = v.reflect(vec3(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(r.norm(), v.norm(), epsilon = 1e-6);
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(Vec2f::X.rotate(FRAC_PI_2), Vec2f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::Y.rotate(FRAC_PI_2), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(FRAC_PI_2), Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate_clockwise(PI), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(vec2(2.0f32, 1.0).rotate(0.3).norm(), vec2(2.0f32, 1.0).norm(), epsilon = 1e-5);
    }

    #[test]
    fn signed_angle() {
        assert_abs_diff_eq!(Vec2f::Y.signed_angle(Vec2f::X), FRAC_PI_2);
        assert_abs_diff_eq!(Vec2f::X.signed_angle(Vec2f::Y), -FRAC_PI_2);
        assert_abs_diff_eq!(Vec2f::Y.signed_angle(Vec2f::Y), 0.0);
        assert_abs_diff_eq!(
            Vec2f::Y.rotate(100.0f32.to_radians()).signed_angle(Vec2f::Y),
            100.0f32.to_radians(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn lerp() {
        let a = vec3(1.0, -2.0, 0.25);
        let b = vec3(-7.5, 3.0, 9.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(4.0, -8.0), 0.25), vec2(1.0, -2.0));
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(4.0, -8.0), -1.0), vec2(-4.0, 8.0));
    }

    #[test]
    fn resize() {
        assert_eq!(vec1(1).extend(2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate().truncate(), vec1(1));
        assert_eq!(vec2(1, 0).perp_dot(vec2(0, 1)), 1);
    }

    #[test]
    fn matrix_roundtrip() {
        let v = vec4(1, -2, 3, -4);
        let row = v.into_row_matrix();
        assert_eq!(row[(0, 3)], -4);
        assert_eq!(row.into_row_vector(), v);

        let col = v.into_column_matrix();
        assert_eq!(col[(3, 0)], -4);
        assert_eq!(col.into_column_vector(), v);
        assert_eq!(Vector::from(row), v);
    }

    #[test]
    fn layout() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }
}
