//! Type definitions and aliases for step-size computations.
//!
//! This module provides the scalar abstraction over `f32`/`f64` and the
//! vector aliases used throughout the crate.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in step-size computations (f32 or f64).
///
/// This trait combines the numeric traits required by the line-search
/// algorithms and adds per-precision tolerance constants, so that `f32`
/// instantiations use looser guards than `f64` ones.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon for this scalar type.
    const EPSILON: Self;

    /// Minimum step length a backtracking search may reach before failing.
    const MIN_STEP_SIZE: Self;

    /// Maximum sensible step length for line search.
    const MAX_STEP_SIZE: Self;

    /// Bracket width below which Wolfe bisection is considered collapsed.
    const BRACKET_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails, which cannot happen for finite
    /// constants in the `f32`/`f64` range.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert from usize (for iteration counts).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("Failed to convert from usize")
    }

    /// Convert to f64 (for error reporting and display).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const MIN_STEP_SIZE: Self = 1e-10;
    const MAX_STEP_SIZE: Self = 1e3;
    const BRACKET_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const MIN_STEP_SIZE: Self = 1e-16;
    const MAX_STEP_SIZE: Self = 1e6;
    const BRACKET_TOLERANCE: Self = 1e-12;
}

/// Type alias for a dynamically-sized vector (iterates, directions, gradients).
pub type DVector<T> = OVector<T, Dyn>;

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_constants_f32() {
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert!(f32::MIN_STEP_SIZE > 0.0);
        assert!(f32::MIN_STEP_SIZE < f32::MAX_STEP_SIZE);
        assert!(f32::BRACKET_TOLERANCE > <f32 as Scalar>::EPSILON);
    }

    #[test]
    fn test_scalar_constants_f64() {
        assert_eq!(<f64 as Scalar>::EPSILON, f64::EPSILON);
        assert!(f64::MIN_STEP_SIZE > 0.0);
        assert!(f64::MIN_STEP_SIZE < f64::MAX_STEP_SIZE);
        assert!(f64::BRACKET_TOLERANCE > <f64 as Scalar>::EPSILON);
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f64 = 3.14159;
        let val_f32 = <f32 as Scalar>::from_f64(val_f64);
        assert_relative_eq!(f64::from(val_f32), val_f64, epsilon = 1e-6);

        assert_relative_eq!(<f64 as Scalar>::from_usize(10), 10.0);
        assert_relative_eq!(<f64 as Scalar>::from_f64(0.5).to_f64(), 0.5);
    }

    #[test]
    fn test_vector_aliases() {
        let v: DVector<f64> = DVector::zeros(4);
        assert_eq!(v.len(), 4);

        let m: DMatrix<f64> = DMatrix::identity(3, 3);
        assert_eq!(m.nrows(), 3);
    }
}
