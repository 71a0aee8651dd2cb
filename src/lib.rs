//! Fixed-size vectors and matrices for small linear algebra kernels.
//!
//! This library provides two types, [`Vector`] and [`Matrix`], whose dimensions are part of their
//! type. Adding a 2-vector to a 3-vector, or multiplying a 2x3 matrix with another 2x3 matrix, is
//! rejected by the compiler instead of failing at runtime.
//!
//! ```
//! use fixed_linalg::*;
//!
//! let m = Mat2d::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! assert_eq!(m.determinant(), -2.0);
//! assert_eq!(m * vec2(1.0, 1.0), vec2(3.0, 7.0));
//!
//! let inv = m.inverse()?;
//! assert!((m * inv - Mat2d::IDENTITY).iter().all(|e| e.abs() < 1e-9));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices: element `(i, j)` of an
//!   `R`x`C` matrix is stored at offset `i * C + j`. Vectors are laid out like arrays. Both types
//!   implement [`bytemuck::Pod`] when their element type does.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). What an element type can do is expressed through the traits in this crate
//!   ([`Number`], [`Float`], ...); operations that need real numbers, like [`Vector::norm`] or
//!   [`Matrix::inverse`], only exist for [`f32`] and [`f64`].
//! - Values are immutable in spirit: every operation returns a new vector or matrix.
//! - Only provide closed-form determinants and inverses (for 2x2 and 3x3 matrices). There are no
//!   decompositions or solvers.
//!
//! # Approximate comparisons
//!
//! `==` compares elements exactly. The [`approx`] traits are implemented for both types, so the
//! `assert_abs_diff_eq!` and `assert_relative_eq!` macros work on whole vectors and matrices.

mod error;
mod matrix;
mod traits;
mod vector;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use matrix::*;
pub use traits::*;
pub use vector::*;
