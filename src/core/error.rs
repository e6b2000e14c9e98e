//! Error types for step-size computations.
//!
//! All errors surface synchronously from `compute_step`; nothing is
//! recovered or swallowed internally. The calling optimizer decides whether
//! to abort the run or retry with a different direction.

use thiserror::Error;

/// Errors that can occur while constructing or invoking a step-size strategy.
#[derive(Debug, Clone, Error)]
pub enum StepSizeError {
    /// Invalid hyperparameter at strategy construction.
    ///
    /// Raised when a constructor receives a value outside its mathematical
    /// domain, e.g. `alpha <= 0`, `rho` outside (0, 1), or `beta1 >= beta2`.
    #[error("Invalid strategy configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the offending parameter
        reason: String,
    },

    /// Dimension mismatch between the iterate and the direction vector.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Non-finite value produced by the objective or gradient.
    ///
    /// Raised when the initial evaluations of `f` or `gradf` yield NaN or
    /// an infinity, in which case no step length is meaningful.
    #[error("Non-finite value encountered: {reason}")]
    NonFiniteValue {
        /// Description of where the non-finite value appeared
        reason: String,
    },

    /// A search loop failed to satisfy its acceptance condition.
    ///
    /// Raised when Armijo backtracking or Wolfe bracketing exhausts its
    /// iteration budget or shrinks the trial step below the minimum floor.
    #[error("Line search failed: {reason} (after {iterations} iterations, last step size {last_step_size:e})")]
    LineSearchFailed {
        /// Description of why the search failed
        reason: String,
        /// Number of iterations attempted
        iterations: usize,
        /// Last step size tried
        last_step_size: f64,
    },

    /// The Wolfe bracket collapsed without satisfying both conditions.
    ///
    /// The carried step size is the midpoint the bisection would have
    /// returned; callers may accept it or treat the search as failed.
    #[error("Wolfe bracket collapsed to width {width:e} without satisfying both conditions (step size {step_size:e})")]
    BracketCollapsed {
        /// Step size held when the bracket width guard triggered
        step_size: f64,
        /// Final bracket width `ub - lb`
        width: f64,
    },
}

impl StepSizeError {
    /// Create an `InvalidConfiguration` error with a custom reason.
    pub fn invalid_configuration<S: Into<String>>(reason: S) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a `DimensionMismatch` error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a `NonFiniteValue` error with a custom reason.
    pub fn non_finite_value<S: Into<String>>(reason: S) -> Self {
        Self::NonFiniteValue {
            reason: reason.into(),
        }
    }

    /// Create a `LineSearchFailed` error with search context.
    pub fn line_search_failed<S: Into<String>>(
        reason: S,
        iterations: usize,
        last_step_size: f64,
    ) -> Self {
        Self::LineSearchFailed {
            reason: reason.into(),
            iterations,
            last_step_size,
        }
    }

    /// Create a `BracketCollapsed` error carrying the terminal step size.
    pub fn bracket_collapsed(step_size: f64, width: f64) -> Self {
        Self::BracketCollapsed { step_size, width }
    }
}

/// Result type alias for step-size operations.
pub type Result<T> = std::result::Result<T, StepSizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = StepSizeError::invalid_configuration("alpha must be positive");
        assert!(matches!(err, StepSizeError::InvalidConfiguration { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid strategy configuration: alpha must be positive"
        );

        let err = StepSizeError::dimension_mismatch(3, 4);
        assert!(matches!(err, StepSizeError::DimensionMismatch { .. }));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3, got 4");
    }

    #[test]
    fn test_line_search_failed_context() {
        let err = StepSizeError::line_search_failed("sufficient decrease never held", 25, 1e-8);

        if let StepSizeError::LineSearchFailed {
            reason,
            iterations,
            last_step_size,
        } = err
        {
            assert_eq!(reason, "sufficient decrease never held");
            assert_eq!(iterations, 25);
            assert_eq!(last_step_size, 1e-8);
        } else {
            panic!("Expected LineSearchFailed variant");
        }
    }

    #[test]
    fn test_bracket_collapsed_context() {
        let err = StepSizeError::bracket_collapsed(0.25, 1e-13);

        if let StepSizeError::BracketCollapsed { step_size, width } = err {
            assert_eq!(step_size, 0.25);
            assert_eq!(width, 1e-13);
        } else {
            panic!("Expected BracketCollapsed variant");
        }
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            StepSizeError::invalid_configuration("rho must lie in (0, 1)"),
            StepSizeError::dimension_mismatch("non-empty vector", "empty vector"),
            StepSizeError::non_finite_value("f(x) is NaN"),
            StepSizeError::line_search_failed("step floor reached", 50, 1e-16),
            StepSizeError::bracket_collapsed(0.5, 1e-13),
        ];

        for err in errors {
            // Ensure Display trait is implemented and produces non-empty strings
            assert!(!err.to_string().is_empty());
        }
    }
}
