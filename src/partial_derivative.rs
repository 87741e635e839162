//! Partial derivative of a function of many variables.
//!
//! # Examples
//!
//! ```
//! use finite_difference::partial_derivative::partial_derivative;
//!
//! let d = partial_derivative(|xs: &[f64]| xs[0].powi(2) + 3.0 * xs[1], 0.0001);
//! assert!((d(&[2.0, 5.0], 0) - 4.0).abs() < 0.000001);
//! assert!((d(&[2.0, 5.0], 1) - 3.0).abs() < 0.000001);
//! ```

use num_traits::real::Real;

use crate::central_difference;

/// Return a function approximating the partial derivative of `f`
/// by central difference.
///
/// The returned function takes a point
/// and the index of the variable to vary.
/// All other variables are held constant.
///
/// Each call copies the point twice,
/// once stepped forward and once stepped backward.
/// The given point is never modified.
///
/// `f` is moved into the returned function.
/// Pass `&f` to borrow it instead.
///
/// # Panics
///
/// The returned function panics
/// if the index is out of bounds for the point.
pub fn partial_derivative<A, F>(f: F, eps: A) -> impl Fn(&[A], usize) -> A
where
    A: Real,
    F: Fn(&[A]) -> A,
{
    move |point: &[A], i: usize| {
        let (forward, backward) = stepped_points(point, i, eps);
        central_difference(f(&forward), f(&backward), eps)
    }
}

/// Return a function approximating the partial derivative of fallible `f`
/// by central difference.
///
/// Otherwise,
/// this is the same as [`partial_derivative`].
/// The first error returned by `f` is returned as is.
///
/// # Panics
///
/// The returned function panics
/// if the index is out of bounds for the point.
pub fn try_partial_derivative<A, F, E>(f: F, eps: A) -> impl Fn(&[A], usize) -> Result<A, E>
where
    A: Real,
    F: Fn(&[A]) -> Result<A, E>,
{
    move |point: &[A], i: usize| -> Result<A, E> {
        let (forward, backward) = stepped_points(point, i, eps);
        Ok(central_difference(f(&forward)?, f(&backward)?, eps))
    }
}

fn stepped_points<A>(point: &[A], i: usize, eps: A) -> (Vec<A>, Vec<A>)
where
    A: Real,
{
    assert!(
        i < point.len(),
        "variable index {} is out of bounds for point of length {}",
        i,
        point.len()
    );

    let mut forward = point.to_vec();
    forward[i] = forward[i] + eps;

    let mut backward = point.to_vec();
    backward[i] = backward[i] - eps;

    (forward, backward)
}
