//! Step-size and line-search strategies for gradient-based optimization.
//!
//! This crate answers a single question an iterative optimizer asks once per
//! iteration: given the current iterate x, a descent direction h, and the
//! iteration index k, how far should the next step go? Each strategy
//! implements the same [`StepSizeStrategy`](crate::optimization::step_size::StepSizeStrategy)
//! contract, so an optimizer loop can swap them freely:
//!
//! - **Constant**: a fixed step length α on every call
//! - **Scheduled**: a diminishing schedule α₀/(k+1)^d, or any user function of k
//! - **Armijo**: backtracking until the sufficient-decrease condition holds
//! - **Wolfe**: bracketing until both the sufficient-decrease and curvature
//!   conditions hold
//!
//! The caller supplies the objective f and gradient ∇f as plain closures and
//! advances the iterate as x_{k+1} = x_k + α_k h_k; strategies never mutate
//! their inputs and hold no state across calls.
//!
//! # Modules
//!
//! - [`core`](crate::core): scalar/vector types, error taxonomy, objective callables
//! - [`optimization`](crate::optimization): the strategy trait and its four implementations
//!
//! # Example
//!
//! ```
//! use stepsize::prelude::*;
//!
//! let f = |x: &DVector<f64>| x.dot(x);
//! let gradf = |x: &DVector<f64>| x * 2.0;
//!
//! let x = DVector::from_vec(vec![1.0, -2.0]);
//! let h = -gradf(&x); // steepest descent direction
//!
//! let strategy = ArmijoBacktracking::default();
//! let alpha = strategy.compute_step(&x, &h, 0, &gradf, &f).unwrap();
//! assert!(alpha > 0.0);
//! assert!(f(&(&x + &h * alpha)) < f(&x));
//! ```

pub mod core;
pub mod optimization;

// Re-export commonly used items at the crate root
pub use crate::core::error::{Result, StepSizeError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use stepsize::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::cost_function::{GradientFn, ObjectiveFn, QuadraticCost};
    pub use crate::core::error::{Result, StepSizeError};
    pub use crate::core::types::{DMatrix, DVector, Scalar};
    pub use crate::optimization::line_search::{ArmijoBacktracking, WolfeBracketing};
    pub use crate::optimization::step_size::{ConstantStep, ScheduledStep, StepSizeStrategy};
}
