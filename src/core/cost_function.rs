//! Objective and gradient callables for step-size strategies.
//!
//! Strategies are injected with the objective f and gradient ∇f as plain
//! function values. The aliases here name those two shapes once, and
//! [`QuadraticCost`] provides a closed-form test objective for exercising
//! strategies against a function whose optimal step is known.

use crate::core::types::{DMatrix, DVector, Scalar};

/// Objective callable: a pure function mapping an iterate to a scalar value.
///
/// Blanket-implemented for every closure of the right shape, so callers pass
/// ordinary closures without wrapping.
pub trait ObjectiveFn<T: Scalar>: Fn(&DVector<T>) -> T {}

impl<T: Scalar, F> ObjectiveFn<T> for F where F: Fn(&DVector<T>) -> T {}

/// Gradient callable: a pure function mapping an iterate to the Euclidean
/// gradient of the objective at that iterate (same dimension as the input).
pub trait GradientFn<T: Scalar>: Fn(&DVector<T>) -> DVector<T> {}

impl<T: Scalar, G> GradientFn<T> for G where G: Fn(&DVector<T>) -> DVector<T> {}

/// A simple quadratic cost function with closed-form gradient.
///
/// Computes f(x) = 0.5 x^T A x + b^T x + c with ∇f(x) = A x + b
/// (A is assumed symmetric). Useful for testing step-size strategies:
/// along a descent direction the one-dimensional restriction is an exact
/// parabola, so acceptable step lengths can be computed by hand.
#[derive(Debug, Clone)]
pub struct QuadraticCost<T: Scalar> {
    /// The quadratic form matrix (should be symmetric)
    pub a: DMatrix<T>,
    /// The linear term
    pub b: DVector<T>,
    /// The constant term
    pub c: T,
}

impl<T: Scalar> QuadraticCost<T> {
    /// Creates a new quadratic cost function.
    pub fn new(a: DMatrix<T>, b: DVector<T>, c: T) -> Self {
        Self { a, b, c }
    }

    /// Creates a simple quadratic with identity matrix: f(x) = 0.5 ||x||².
    pub fn simple(dim: usize) -> Self {
        Self {
            a: DMatrix::identity(dim, dim),
            b: DVector::zeros(dim),
            c: T::zero(),
        }
    }

    /// Evaluates f(x) = 0.5 x^T A x + b^T x + c.
    pub fn value(&self, x: &DVector<T>) -> T {
        let half = <T as Scalar>::from_f64(0.5);
        half * x.dot(&(&self.a * x)) + self.b.dot(x) + self.c
    }

    /// Evaluates ∇f(x) = A x + b.
    pub fn gradient(&self, x: &DVector<T>) -> DVector<T> {
        &self.a * x + &self.b
    }
}
