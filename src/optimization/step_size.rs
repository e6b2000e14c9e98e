//! Step-size strategies with schedule-based step lengths.
//!
//! This module defines the common [`StepSizeStrategy`] contract that every
//! strategy in this crate implements, together with the two variants that
//! never evaluate the objective: a constant step and a diminishing schedule.
//!
//! # Mathematical Foundation
//!
//! An iterative optimizer advances x_{k+1} = x_k + α_k h_k. The strategy
//! chooses α_k > 0 from the current state `(x, h, k)` and the injected
//! callables `f`/`gradf`. Schedule-based strategies use only `k`:
//!
//! - **Constant**: α_k = α for all k. Suitable when the gradient is
//!   L-Lipschitz and α ≤ 1/L, or for theoretical analysis.
//! - **Scheduled**: α_k = α₀/(k+1)^d, the classic diminishing schedule for
//!   subgradient-type methods. For d ∈ (0.5, 1] the schedule satisfies both
//!   Σ α_k = ∞ and Σ α_k² < ∞, the standard convergence conditions.
//!
//! Line-search strategies (Armijo, Wolfe) live in
//! [`line_search`](crate::optimization::line_search) and implement the same
//! trait.

use crate::core::{
    cost_function::{GradientFn, ObjectiveFn},
    error::{Result, StepSizeError},
    types::{DVector, Scalar},
};
use num_traits::Float;
use std::fmt::Debug;

/// Universal interface for step-size strategies.
///
/// Implementations must return a strictly positive step length α such that
/// the caller can advance x_{k+1} = x + α h, and must behave as pure
/// functions of `(x, h, k, gradf, f)` plus their own immutable
/// hyperparameters: no inputs are mutated and no state persists between
/// calls. Strategies that ignore `gradf`/`f` still accept them so that a
/// uniform call signature works for every variant.
pub trait StepSizeStrategy<T: Scalar>: Debug {
    /// Computes the step length for the current descent iteration.
    ///
    /// # Arguments
    ///
    /// * `x` - Current iterate (non-empty)
    /// * `h` - Descent direction, same dimension as `x`. The contract assumes
    ///   but does not verify that h is a true descent direction; strategies
    ///   with curvature conditions rely on this for termination and report
    ///   [`StepSizeError::LineSearchFailed`] when it does not hold.
    /// * `k` - Zero-based iteration index (used by schedule-based variants)
    /// * `gradf` - Gradient callable ∇f
    /// * `f` - Objective callable f
    ///
    /// # Errors
    ///
    /// - [`StepSizeError::DimensionMismatch`] if `x` and `h` disagree in
    ///   length or are empty
    /// - [`StepSizeError::NonFiniteValue`] if the initial evaluations of
    ///   `f`/`gradf` are non-finite
    /// - [`StepSizeError::LineSearchFailed`] /
    ///   [`StepSizeError::BracketCollapsed`] from bounded internal searches
    fn compute_step<G, F>(
        &self,
        x: &DVector<T>,
        h: &DVector<T>,
        k: usize,
        gradf: &G,
        f: &F,
    ) -> Result<T>
    where
        G: GradientFn<T>,
        F: ObjectiveFn<T>;

    /// Returns a human-readable name identifying the strategy.
    ///
    /// Used for logging and diagnostics by calling optimizers.
    fn name(&self) -> &str;
}

/// Checks that the iterate and direction are non-empty and share a dimension.
pub(crate) fn validate_inputs<T: Scalar>(x: &DVector<T>, h: &DVector<T>) -> Result<()> {
    if x.is_empty() {
        return Err(StepSizeError::dimension_mismatch(
            "non-empty vector",
            "empty vector",
        ));
    }
    if x.len() != h.len() {
        return Err(StepSizeError::dimension_mismatch(x.len(), h.len()));
    }
    Ok(())
}

/// Constant step-size strategy: α_k = α for every iteration.
///
/// The simplest possible strategy, performing zero function evaluations.
/// The quality of the run rests entirely on choosing α well; for a gradient
/// with Lipschitz constant L, α ≤ 1/L guarantees sufficient decrease.
#[derive(Debug, Clone, Copy)]
pub struct ConstantStep<T: Scalar> {
    alpha: T,
}

impl<T: Scalar> ConstantStep<T> {
    /// Creates a constant step-size strategy with step length `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if `alpha` is not a
    /// finite, strictly positive value.
    pub fn new(alpha: T) -> Result<Self> {
        if !<T as Float>::is_finite(alpha) || alpha <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Constant step size alpha must be finite and positive",
            ));
        }
        Ok(Self { alpha })
    }

    /// Returns the configured step length.
    pub fn alpha(&self) -> T {
        self.alpha
    }
}

impl<T: Scalar> StepSizeStrategy<T> for ConstantStep<T> {
    fn compute_step<G, F>(
        &self,
        x: &DVector<T>,
        h: &DVector<T>,
        _k: usize,
        _gradf: &G,
        _f: &F,
    ) -> Result<T>
    where
        G: GradientFn<T>,
        F: ObjectiveFn<T>,
    {
        validate_inputs(x, h)?;
        Ok(self.alpha)
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

enum Schedule<T: Scalar> {
    /// α_k = α₀ / (k+1)^d
    PowerDecay { alpha0: T, d: T },
    /// Caller-supplied function of the iteration index alone.
    Custom(Box<dyn Fn(usize) -> T + Send + Sync>),
}

/// Scheduled step-size strategy: α_k is a pure function of the iteration
/// index.
///
/// The default schedule is the power decay α_k = α₀/(k+1)^d. A custom
/// schedule may be supplied instead; it is resolved at construction time and
/// passed through verbatim — in particular, it is not validated for the
/// monotonic non-increase that convergence theory usually requires.
pub struct ScheduledStep<T: Scalar> {
    schedule: Schedule<T>,
}

impl<T: Scalar> ScheduledStep<T> {
    /// Creates the power-decay schedule α_k = α₀/(k+1)^d.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::InvalidConfiguration`] if `alpha0` is not
    /// finite and positive or `d` is not finite.
    pub fn power_decay(alpha0: T, d: T) -> Result<Self> {
        if !<T as Float>::is_finite(alpha0) || alpha0 <= T::zero() {
            return Err(StepSizeError::invalid_configuration(
                "Schedule coefficient alpha0 must be finite and positive",
            ));
        }
        if !<T as Float>::is_finite(d) {
            return Err(StepSizeError::invalid_configuration(
                "Decay exponent d must be finite",
            ));
        }
        Ok(Self {
            schedule: Schedule::PowerDecay { alpha0, d },
        })
    }

    /// Creates a schedule from an arbitrary function of the iteration index.
    pub fn custom<S>(schedule: S) -> Self
    where
        S: Fn(usize) -> T + Send + Sync + 'static,
    {
        Self {
            schedule: Schedule::Custom(Box::new(schedule)),
        }
    }

    fn step_at(&self, k: usize) -> T {
        match &self.schedule {
            Schedule::PowerDecay { alpha0, d } => {
                *alpha0 / <T as Float>::powf(<T as Scalar>::from_usize(k + 1), *d)
            }
            Schedule::Custom(schedule) => schedule(k),
        }
    }
}

impl<T: Scalar> Default for ScheduledStep<T> {
    /// The classic diminishing schedule α_k = 1/(k+1).
    fn default() -> Self {
        Self {
            schedule: Schedule::PowerDecay {
                alpha0: T::one(),
                d: T::one(),
            },
        }
    }
}

impl<T: Scalar> Debug for ScheduledStep<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schedule {
            Schedule::PowerDecay { alpha0, d } => f
                .debug_struct("ScheduledStep")
                .field("alpha0", alpha0)
                .field("d", d)
                .finish(),
            Schedule::Custom(_) => f
                .debug_struct("ScheduledStep")
                .field("schedule", &"custom")
                .finish(),
        }
    }
}

impl<T: Scalar> StepSizeStrategy<T> for ScheduledStep<T> {
    fn compute_step<G, F>(
        &self,
        x: &DVector<T>,
        h: &DVector<T>,
        k: usize,
        _gradf: &G,
        _f: &F,
    ) -> Result<T>
    where
        G: GradientFn<T>,
        F: ObjectiveFn<T>,
    {
        validate_inputs(x, h)?;
        Ok(self.step_at(k))
    }

    fn name(&self) -> &str {
        "Scheduled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn unit_problem() -> (DVector<f64>, DVector<f64>) {
        (
            DVector::from_vec(vec![1.0, 2.0]),
            DVector::from_vec(vec![-1.0, -2.0]),
        )
    }

    // Callables that count invocations, to verify schedule-based variants
    // never evaluate the objective or gradient.
    fn counting_callables(
        calls: &Cell<usize>,
    ) -> (
        impl Fn(&DVector<f64>) -> DVector<f64> + '_,
        impl Fn(&DVector<f64>) -> f64 + '_,
    ) {
        (
            move |x: &DVector<f64>| {
                calls.set(calls.get() + 1);
                x * 2.0
            },
            move |x: &DVector<f64>| {
                calls.set(calls.get() + 1);
                x.dot(x)
            },
        )
    }

    #[test]
    fn test_constant_returns_alpha() {
        let (x, h) = unit_problem();
        let calls = Cell::new(0);
        let (gradf, f) = counting_callables(&calls);

        let strategy = ConstantStep::new(0.05).unwrap();
        for k in [0, 1, 100] {
            let alpha = strategy.compute_step(&x, &h, k, &gradf, &f).unwrap();
            assert_eq!(alpha, 0.05);
        }
        assert_eq!(calls.get(), 0, "Constant must not invoke f or gradf");
    }

    #[test]
    fn test_constant_rejects_nonpositive_alpha() {
        assert!(ConstantStep::<f64>::new(0.0).is_err());
        assert!(ConstantStep::<f64>::new(-1.0).is_err());
        assert!(ConstantStep::<f64>::new(f64::NAN).is_err());
        assert!(ConstantStep::<f64>::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_schedule_values() {
        let (x, h) = unit_problem();
        let calls = Cell::new(0);
        let (gradf, f) = counting_callables(&calls);

        let strategy = ScheduledStep::<f64>::default();
        assert_relative_eq!(strategy.compute_step(&x, &h, 0, &gradf, &f).unwrap(), 1.0);
        assert_relative_eq!(strategy.compute_step(&x, &h, 9, &gradf, &f).unwrap(), 0.1);
        assert_eq!(calls.get(), 0, "Scheduled must not invoke f or gradf");
    }

    #[test]
    fn test_power_decay_monotone_non_increasing() {
        let strategy = ScheduledStep::power_decay(2.0, 0.7).unwrap();
        let mut prev = f64::INFINITY;
        for k in 0..100 {
            let alpha = strategy.step_at(k);
            assert!(alpha > 0.0);
            assert!(alpha <= prev);
            prev = alpha;
        }
    }

    #[test]
    fn test_custom_schedule_pass_through() {
        let (x, h) = unit_problem();
        let strategy = ScheduledStep::custom(|k| 0.5 / (1.0 + k as f64).sqrt());

        let alpha = strategy
            .compute_step(&x, &h, 3, &|x: &DVector<f64>| x * 2.0, &|x| x.dot(x))
            .unwrap();
        assert_relative_eq!(alpha, 0.25);
    }

    #[test]
    fn test_power_decay_rejects_invalid_parameters() {
        assert!(ScheduledStep::<f64>::power_decay(0.0, 1.0).is_err());
        assert!(ScheduledStep::<f64>::power_decay(-2.0, 1.0).is_err());
        assert!(ScheduledStep::<f64>::power_decay(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let h = DVector::from_vec(vec![-1.0]);
        let strategy = ConstantStep::new(0.1).unwrap();

        let err = strategy
            .compute_step(&x, &h, 0, &|x: &DVector<f64>| x.clone(), &|x| x.dot(x))
            .unwrap_err();
        assert!(matches!(err, StepSizeError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_vectors_rejected() {
        let x = DVector::<f64>::zeros(0);
        let h = DVector::<f64>::zeros(0);
        let strategy = ScheduledStep::<f64>::default();

        let err = strategy
            .compute_step(&x, &h, 0, &|x: &DVector<f64>| x.clone(), &|x| x.dot(x))
            .unwrap_err();
        assert!(matches!(err, StepSizeError::DimensionMismatch { .. }));
    }

    proptest! {
        #[test]
        fn prop_constant_is_pure(alpha in 1e-6f64..1e3, k in 0usize..1000) {
            let (x, h) = unit_problem();
            let strategy = ConstantStep::new(alpha).unwrap();
            let gradf = |x: &DVector<f64>| x * 2.0;
            let f = |x: &DVector<f64>| x.dot(x);

            let first = strategy.compute_step(&x, &h, k, &gradf, &f).unwrap();
            let second = strategy.compute_step(&x, &h, k, &gradf, &f).unwrap();
            prop_assert_eq!(first, alpha);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_power_decay_monotone(
            alpha0 in 0.1f64..10.0,
            d in 0.1f64..3.0,
            k in 0usize..500,
        ) {
            let strategy = ScheduledStep::power_decay(alpha0, d).unwrap();
            prop_assert!(strategy.step_at(k + 1) <= strategy.step_at(k));
            prop_assert!(strategy.step_at(k) > 0.0);
        }
    }
}
