//! Derivative of a function of one variable.
//!
//! # Examples
//!
//! ```
//! use finite_difference::derivative::derivative;
//!
//! let d = derivative(|x: f64| x.powi(2), 0.0001);
//! assert!((d(3.0) - 6.0).abs() < 0.000001);
//! ```

use num_traits::real::Real;

use crate::central_difference;

/// Return a function approximating the derivative of `f`
/// by central difference,
/// `(f(x + eps) - f(x - eps)) / (2 eps)`.
///
/// Error of the approximation is `O(eps^2)`
/// for sufficiently smooth `f`.
///
/// `f` is moved into the returned function.
/// Pass `&f` to borrow it instead.
///
/// `eps` is not validated.
/// An `eps` of zero results in a non-finite derivative.
/// Use [`StepSize`](crate::StepSize) with [`Config`](crate::Config)
/// to reject such values upfront.
pub fn derivative<A, F>(f: F, eps: A) -> impl Fn(A) -> A
where
    A: Real,
    F: Fn(A) -> A,
{
    move |x: A| central_difference(f(x + eps), f(x - eps), eps)
}

/// Return a function approximating the derivative of fallible `f`
/// by central difference.
///
/// Otherwise,
/// this is the same as [`derivative`].
/// The first error returned by `f` is returned as is.
pub fn try_derivative<A, F, E>(f: F, eps: A) -> impl Fn(A) -> Result<A, E>
where
    A: Real,
    F: Fn(A) -> Result<A, E>,
{
    move |x: A| -> Result<A, E> { Ok(central_difference(f(x + eps)?, f(x - eps)?, eps)) }
}
