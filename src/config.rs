//! Configuration for approximating derivatives.

use num_traits::{real::Real, AsPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    derivative::{derivative, try_derivative},
    partial_derivative::{partial_derivative, try_partial_derivative},
    StepSize,
};

/// Finite-difference configuration parameters.
///
/// Unlike the free functions,
/// step size is validated upfront.
///
/// # Examples
///
/// ```
/// use finite_difference::{Config, StepSize};
///
/// let d = Config::default().derivative(|x: f64| x.powi(3));
/// assert!((d(2.0) - 12.0).abs() < 0.000001);
///
/// let config = Config {
///     step_size: StepSize::new(0.001).unwrap(),
/// };
/// let d = config.partial_derivative(|xs: &[f64]| xs[0] * xs[1]);
/// assert!((d(&[2.0, 3.0], 1) - 2.0).abs() < 0.000001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "StepSize<A>: Deserialize<'de>"))
)]
pub struct Config<A> {
    /// Distance to step from a point.
    pub step_size: StepSize<A>,
}

impl<A> Default for Config<A>
where
    A: 'static + Copy,
    f64: AsPrimitive<A>,
{
    fn default() -> Self {
        Self {
            step_size: StepSize::default(),
        }
    }
}

impl<A> Config<A>
where
    A: Real,
{
    /// Return a new 'Config' with the given step size.
    pub fn new(step_size: StepSize<A>) -> Self {
        Self { step_size }
    }

    /// Return a function approximating the derivative of `f`.
    ///
    /// See [`derivative`].
    pub fn derivative<F>(&self, f: F) -> impl Fn(A) -> A
    where
        F: Fn(A) -> A,
    {
        derivative(f, self.step_size.into_inner())
    }

    /// Return a function approximating the derivative of fallible `f`.
    ///
    /// See [`try_derivative`].
    pub fn try_derivative<F, E>(&self, f: F) -> impl Fn(A) -> Result<A, E>
    where
        F: Fn(A) -> Result<A, E>,
    {
        try_derivative(f, self.step_size.into_inner())
    }

    /// Return a function approximating the partial derivative of `f`.
    ///
    /// See [`partial_derivative`].
    pub fn partial_derivative<F>(&self, f: F) -> impl Fn(&[A], usize) -> A
    where
        F: Fn(&[A]) -> A,
    {
        partial_derivative(f, self.step_size.into_inner())
    }

    /// Return a function approximating the partial derivative of fallible `f`.
    ///
    /// See [`try_partial_derivative`].
    pub fn try_partial_derivative<F, E>(&self, f: F) -> impl Fn(&[A], usize) -> Result<A, E>
    where
        F: Fn(&[A]) -> Result<A, E>,
    {
        try_partial_derivative(f, self.step_size.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn default_config_should_use_default_step_size() {
        assert_eq!(Config::<f64>::default().step_size.into_inner(), 0.0001);
    }

    #[test]
    fn config_should_use_its_step_size() {
        let config = Config::new(StepSize::new(0.5).unwrap());
        let f = |x: f64| x.powi(3);
        assert_eq!(config.derivative(f)(1.0), derivative(f, 0.5)(1.0));
        assert_eq!(
            config.try_derivative(|x| Ok::<_, ()>(f(x)))(1.0),
            Ok(derivative(f, 0.5)(1.0))
        );

        let g = |xs: &[f64]| xs[0].powi(3) + xs[1];
        assert_eq!(
            config.partial_derivative(g)(&[1.0, 1.0], 0),
            partial_derivative(g, 0.5)(&[1.0, 1.0], 0)
        );
        assert_eq!(
            config.try_partial_derivative(|xs: &[f64]| Ok::<_, ()>(g(xs)))(&[1.0, 1.0], 0),
            Ok(partial_derivative(g, 0.5)(&[1.0, 1.0], 0))
        );
    }

    #[test]
    fn default_config_should_approximate_derivatives() {
        let config = Config::default();
        assert_abs_diff_eq!(
            config.derivative(|x: f64| x.powi(2))(-4.0),
            -8.0,
            epsilon = 0.000001
        );
        assert_abs_diff_eq!(
            config.partial_derivative(|xs: &[f64]| xs[0].powi(2) + 3.0 * xs[1])(&[2.0, 5.0], 1),
            3.0,
            epsilon = 0.000001
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_should_serialize_step_size_as_a_number() {
        let config = Config::new(StepSize::new(0.25).unwrap());
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"step_size":0.25}"#);
        assert_eq!(serde_json::from_str::<Config<f64>>(&json).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_should_reject_invalid_step_sizes_on_deserialization() {
        assert!(serde_json::from_str::<Config<f64>>(r#"{"step_size":0.0}"#).is_err());
        assert!(serde_json::from_str::<Config<f64>>(r#"{"step_size":-0.5}"#).is_err());
    }
}
