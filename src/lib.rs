#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! Numerical approximations of derivatives
//! by central finite difference.
//!
//! The derivative of a function of one variable
//! is approximated as
//! `(f(x + eps) - f(x - eps)) / (2 eps)`,
//! with error `O(eps^2)`.
//! The partial derivative of a function of many variables
//! is approximated the same way,
//! stepping only one variable
//! and holding the others constant.
//!
//! Functions are approximated by returning new functions,
//! owning the function to differentiate.
//!
//! # Examples
//!
//! Approximate a derivative
//! using a raw step size:
//!
//! ```
//! use finite_difference::derivative;
//!
//! let d = derivative(|x: f64| x.powi(2), 0.0001);
//! assert!((d(3.0) - 6.0).abs() < 0.000001);
//! ```
//!
//! Approximate a partial derivative
//! using the default step size,
//! `10^-4`:
//!
//! ```
//! use finite_difference::Config;
//!
//! let d = Config::default().partial_derivative(|xs: &[f64]| xs[0].powi(2) + 3.0 * xs[1]);
//! assert!((d(&[2.0, 5.0], 0) - 4.0).abs() < 0.000001);
//! assert!((d(&[2.0, 5.0], 1) - 3.0).abs() < 0.000001);
//! ```
//!
//! Validate a step size upfront:
//!
//! ```
//! use finite_difference::{Config, StepSize};
//!
//! assert!(StepSize::new(0.0).is_err());
//!
//! let step_size: StepSize<f64> = "0.001".parse().unwrap();
//! let d = Config::new(step_size).derivative(f64::sin);
//! assert!((d(0.0) - 1.0).abs() < 0.000001);
//! ```

mod config;
pub mod derivative;
pub mod partial_derivative;
pub mod prelude;
mod types;

use num_traits::real::Real;

pub use self::{
    config::*,
    derivative::{derivative, try_derivative},
    partial_derivative::{partial_derivative, try_partial_derivative},
    types::*,
};

/// Combine values of a function
/// stepped forward and backward by `eps`
/// into an approximate derivative.
fn central_difference<A>(forward: A, backward: A, eps: A) -> A
where
    A: Real,
{
    (forward - backward) / (eps + eps)
}
