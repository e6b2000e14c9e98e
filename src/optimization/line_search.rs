//! Inexact line-search strategies: Armijo backtracking and Wolfe bracketing.
//!
//! # Mathematical Foundation
//!
//! Given an iterate x, a descent direction h, and the one-dimensional
//! restriction φ(α) = f(x + α h) with slope φ'(0) = ⟨∇f(x), h⟩ < 0, a line
//! search picks a step α > 0 that makes provable progress without solving
//! the one-dimensional minimization exactly.
//!
//! ## Armijo (sufficient decrease) condition
//!
//! f(x + α h) ≤ f(x) + β α ⟨∇f(x), h⟩,  β ∈ (0, 1)
//!
//! Backtracking starts at α₀ and multiplies by ρ ∈ (0, 1) until the
//! condition holds. Termination is guaranteed for true descent directions;
//! for pathological input the search is bounded by an iteration budget and
//! a minimum step floor, and fails with a typed error instead of looping.
//!
//! ## Wolfe conditions
//!
//! The Armijo condition above (with β₁) plus the curvature condition
//!
//! ⟨∇f(x + α h), h⟩ ≥ β₂ ⟨∇f(x), h⟩,  0 < β₁ < β₂ < 1
//!
//! which rejects steps so short that the directional derivative has not
//! flattened. The implementation brackets acceptable steps between a lower
//! bound `lb` (too-short steps) and an upper bound `ub` (too-long steps),
//! doubling while no upper bound exists and bisecting otherwise. A collapsed
//! bracket on a numerically flat region is surfaced as the distinguishable
//! [`StepSizeError::BracketCollapsed`] outcome, carrying the step the
//! bisection held, so callers decide whether to accept it.

use crate::core::{
    cost_function::{GradientFn, ObjectiveFn},
    error::{Result, StepSizeError},
    types::{DVector, Scalar},
};
use crate::optimization::step_size::{validate_inputs, StepSizeStrategy};
use num_traits::Float;

/// Evaluates f(x), ∇f(x), and the directional derivative ⟨∇f(x), h⟩ once
/// per call, failing fast on non-finite values.
fn initial_slope<T, G, F>(x: &DVector<T>, h: &DVector<T>, gradf: &G, f: &F) -> Result<(T, T)>
where
    T: Scalar,
    G: GradientFn<T>,
    F: ObjectiveFn<T>,
{
    let fx = f(x);
    if !<T as Float>::is_finite(fx) {
        return Err(StepSizeError::non_finite_value(
            "objective value f(x) at the current iterate",
        ));
    }

    let g = gradf(x);
    if g.len() != x.len() {
        return Err(StepSizeError::dimension_mismatch(x.len(), g.len()));
    }

    let directional = h.dot(&g);
    if !<T as Float>::is_finite(directional) {
        return Err(StepSizeError::non_finite_value(
            "directional derivative ⟨∇f(x), h⟩ at the current iterate",
        ));
    }

    Ok((fx, directional))
}

/// Armijo backtracking line search.
///
/// Starts from the initial guess α₀ and multiplies the trial step by
/// ρ ∈ (0, 1) until the sufficient-decrease condition
/// f(x + α h) ≤ f(x) + β α ⟨∇f(x), h⟩ holds. The objective value and
/// directional derivative at x are computed once per call, not inside the
/// loop.
///
/// The search is bounded: it fails with [`StepSizeError::LineSearchFailed`]
/// once the trial step falls below the minimum floor or the iteration
/// budget is spent, which is how a non-descent direction surfaces.
#[derive(Debug, Clone, Copy)]
pub struct ArmijoBacktracking<T: Scalar> {
    alpha0: T,
    beta: T,
    rho: T,
    max_iterations: usize,
    min_step_size: T,
}

impl<T: Scalar> ArmijoBacktracking<T> {
    /// Creates an Armijo backtracking search.
    ///
    /// # Arguments
    ///
    /// * `beta` - Sufficient-decrease slope fraction, in (0, 1)
    /// * `rho` - Backtracking ratio, in (0, 1)
    /// * `alpha0` - Initial trial step, finite and positive
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if any parameter is
    /// outside its domain.
    pub fn new(beta: T, rho: T, alpha0: T) -> Result<Self> {
        if beta <= T::zero() || beta >= T::one() {
            return Err(StepSizeError::invalid_configuration(
                "Armijo constant beta must be in (0, 1)",
            ));
        }
        if rho <= T::zero() || rho >= T::one() {
            return Err(StepSizeError::invalid_configuration(
                "Backtracking ratio rho must be in (0, 1)",
            ));
        }
        if !<T as Float>::is_finite(alpha0) || alpha0 <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Initial step size alpha0 must be finite and positive",
            ));
        }
        Ok(Self {
            alpha0,
            beta,
            rho,
            max_iterations: 100,
            min_step_size: T::MIN_STEP_SIZE,
        })
    }

    /// Sets the backtracking iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the minimum step floor below which the search fails.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if the floor is not
    /// finite and positive.
    pub fn with_min_step_size(mut self, min_step_size: T) -> Result<Self> {
        if !<T as Float>::is_finite(min_step_size) || min_step_size <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Minimum step size must be finite and positive",
            ));
        }
        self.min_step_size = min_step_size;
        Ok(self)
    }
}

impl<T: Scalar> Default for ArmijoBacktracking<T> {
    /// β = 0.3, ρ = 0.1, α₀ = 1, with default guards.
    fn default() -> Self {
        Self {
            alpha0: T::one(),
            beta: <T as Scalar>::from_f64(0.3),
            rho: <T as Scalar>::from_f64(0.1),
            max_iterations: 100,
            min_step_size: T::MIN_STEP_SIZE,
        }
    }
}

impl<T: Scalar> StepSizeStrategy<T> for ArmijoBacktracking<T> {
    fn compute_step<G, F>(
        &self,
        x: &DVector<T>,
        h: &DVector<T>,
        _k: usize,
        gradf: &G,
        f: &F,
    ) -> Result<T>
    where
        G: GradientFn<T>,
        F: ObjectiveFn<T>,
    {
        validate_inputs(x, h)?;
        let (fx, directional) = initial_slope(x, h, gradf, f)?;

        let mut alpha = self.alpha0;
        for iteration in 1..=self.max_iterations {
            let f_trial = f(&(x + h * alpha));
            // A NaN trial value fails this comparison and keeps shrinking.
            if f_trial <= fx + self.beta * alpha * directional {
                return Ok(alpha);
            }
            alpha *= self.rho;
            if alpha < self.min_step_size {
                return Err(StepSizeError::line_search_failed(
                    "trial step fell below the minimum step size",
                    iteration,
                    alpha.to_f64(),
                ));
            }
        }

        Err(StepSizeError::line_search_failed(
            "sufficient decrease condition not satisfied within the iteration budget",
            self.max_iterations,
            alpha.to_f64(),
        ))
    }

    fn name(&self) -> &str {
        "Armijo"
    }
}

/// Wolfe bracketing line search.
///
/// Finds a step satisfying both the sufficient-decrease condition (with β₁)
/// and the curvature condition (with β₂), maintaining a bracket
/// [lb, ub] of acceptable step lengths:
///
/// - Armijo violated → the step is too long: `ub ← α`, bisect.
/// - Curvature violated → the step is too short: `lb ← α`; multiply by the
///   expansion factor ρ₂ while `ub` is still infinite, else bisect.
/// - Both hold → accept α.
///
/// When the bracket width shrinks to the tolerance without either
/// acceptance, the search terminates with
/// [`StepSizeError::BracketCollapsed`] carrying the held step, so callers
/// can distinguish the guard-terminated outcome from a satisfied one. The
/// loop is additionally bounded by an iteration budget.
#[derive(Debug, Clone, Copy)]
pub struct WolfeBracketing<T: Scalar> {
    alpha0: T,
    beta1: T,
    beta2: T,
    rho2: T,
    bracket_tolerance: T,
    max_iterations: usize,
}

impl<T: Scalar> WolfeBracketing<T> {
    /// Creates a Wolfe bracketing search.
    ///
    /// # Arguments
    ///
    /// * `beta1` - Sufficient-decrease slope fraction
    /// * `beta2` - Curvature slope fraction; `0 < beta1 < beta2 < 1`
    /// * `alpha0` - Initial trial step, finite and positive
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if any parameter is
    /// outside its domain.
    pub fn new(beta1: T, beta2: T, alpha0: T) -> Result<Self> {
        if beta1 <= T::zero() || beta1 >= T::one() {
            return Err(StepSizeError::invalid_configuration(
                "Sufficient-decrease constant beta1 must be in (0, 1)",
            ));
        }
        if beta2 <= beta1 || beta2 >= T::one() {
            return Err(StepSizeError::invalid_configuration(
                "Curvature constant beta2 must satisfy beta1 < beta2 < 1",
            ));
        }
        if !<T as Float>::is_finite(alpha0) || alpha0 <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Initial step size alpha0 must be finite and positive",
            ));
        }
        Ok(Self {
            alpha0,
            beta1,
            beta2,
            rho2: <T as Scalar>::from_f64(2.0),
            bracket_tolerance: T::BRACKET_TOLERANCE,
            max_iterations: 100,
        })
    }

    /// Sets the expansion factor ρ₂ used while no upper bound exists.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] unless `rho2 > 1`.
    pub fn with_expansion(mut self, rho2: T) -> Result<Self> {
        if !<T as Float>::is_finite(rho2) || rho2 <= T::one() {
            return Err(StepSizeError::invalid_configuration(
                "Expansion factor rho2 must be finite and greater than 1",
            ));
        }
        self.rho2 = rho2;
        Ok(self)
    }

    /// Sets the bracket width below which the search is considered collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if the tolerance is
    /// not finite and positive.
    pub fn with_bracket_tolerance(mut self, tolerance: T) -> Result<Self> {
        if !<T as Float>::is_finite(tolerance) || tolerance <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Bracket tolerance must be finite and positive",
            ));
        }
        self.bracket_tolerance = tolerance;
        Ok(self)
    }

    /// Sets the bracketing iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl<T: Scalar> Default for WolfeBracketing<T> {
    /// β₁ = 0.3, β₂ = 0.9, ρ₂ = 2, α₀ = 1, with default guards.
    fn default() -> Self {
        Self {
            alpha0: T::one(),
            beta1: <T as Scalar>::from_f64(0.3),
            beta2: <T as Scalar>::from_f64(0.9),
            rho2: <T as Scalar>::from_f64(2.0),
            bracket_tolerance: T::BRACKET_TOLERANCE,
            max_iterations: 100,
        }
    }
}

impl<T: Scalar> StepSizeStrategy<T> for WolfeBracketing<T> {
    fn compute_step<G, F>(
        &self,
        x: &DVector<T>,
        h: &DVector<T>,
        _k: usize,
        gradf: &G,
        f: &F,
    ) -> Result<T>
    where
        G: GradientFn<T>,
        F: ObjectiveFn<T>,
    {
        validate_inputs(x, h)?;
        let (fx, directional) = initial_slope(x, h, gradf, f)?;

        let half = <T as Scalar>::from_f64(0.5);
        let mut lb = T::zero();
        let mut ub = <T as Float>::infinity();
        let mut alpha = self.alpha0;

        for _ in 1..=self.max_iterations {
            let x_new = x + h * alpha;
            if f(&x_new) > fx + self.beta1 * alpha * directional {
                // Step too long: sufficient decrease violated.
                ub = alpha;
                alpha = half * (lb + ub);
            } else if gradf(&x_new).dot(h) < self.beta2 * directional {
                // Step too short: slope not flattened enough.
                lb = alpha;
                alpha = if <T as Float>::is_infinite(ub) {
                    self.rho2 * lb
                } else {
                    half * (lb + ub)
                };
            } else {
                return Ok(alpha);
            }

            if ub - lb <= self.bracket_tolerance {
                return Err(StepSizeError::bracket_collapsed(
                    alpha.to_f64(),
                    (ub - lb).to_f64(),
                ));
            }
        }

        Err(StepSizeError::line_search_failed(
            "Wolfe conditions not satisfied within the iteration budget",
            self.max_iterations,
            alpha.to_f64(),
        ))
    }

    fn name(&self) -> &str {
        "Wolfe"
    }
}
