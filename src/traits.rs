//! Numeric capability traits used to gate vector and matrix operations.

use std::{fmt, ops};

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

/// Types that support the trigonometric functions needed by this crate.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the arccosine of `self`, in radians.
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] ([`f64::min`]
/// and [`f64::max`] respectively). Built-in integer types implement it in terms of [`Ord::min`]
/// and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// All built-in integer and floating-point types implement it. Element-wise arithmetic, dot
/// products and matrix products only need this bound.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
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
        + Copy
{
}

/// [`Number`]s that can be negated: the signed integers and the floating-point types.
///
/// Required by negation, cross products, determinants, inverses and rotations.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Floating-point element types.
///
/// Operations that only make sense with real numbers (lengths, angles, interpolation, inversion)
/// require `T: Float`. Only [`f32`] and [`f64`] implement it, so calling such an operation on a
/// vector or matrix of integers fails to compile:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let len = vec2(3, 4).norm();
/// ```
pub trait Float: Signed + Sqrt + Trig + MinMax + PartialOrd + fmt::Debug + fmt::Display {
    /// Archimedes' constant (π).
    const PI: Self;
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

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
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

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;
            }
        )+
    };
}
float_impls!(f32, f64);
