//! Shared test utilities for the inca-stack workspace.
//!
//! This crate provides common testing infrastructure including:
//! - On-disk archive fixtures (temporary trees of slot files)
//! - Deterministic grid generators
//! - Approximate floating-point assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::DataTree;
pub use generators::*;

/// Asserts two floating-point values are equal within a tolerance.
///
/// The two-argument form uses a tolerance of `1e-9`, tight enough for
/// exactly-representable grid values while still absorbing summation
/// rounding.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(3.5, 3.5);
/// assert_approx_eq!(1.0001, 1.0, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right) = ($left as f64, $right as f64);
        let tolerance = $tolerance as f64;
        let delta = (left - right).abs();
        assert!(
            delta <= tolerance,
            "values differ by {delta} (tolerance {tolerance}): {left} vs {right}"
        );
    }};
}
