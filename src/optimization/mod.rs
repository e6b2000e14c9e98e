//! Step-size strategies and line-search algorithms.

pub mod line_search;
pub mod step_size;

// Re-export optimization components
pub use line_search::*;
pub use step_size::*;
