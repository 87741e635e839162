//! Types for finite differences.

use std::{cmp::Ordering, str::FromStr};

use derive_more::Display;
use num_traits::{bounds::LowerBounded, real::Real, AsPrimitive};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Step size used when none is given,
/// `10^-4`.
pub const DEFAULT_STEP_SIZE: f64 = 0.0001;

/// Distance to step forward and backward from a point
/// when approximating a derivative,
/// `eps`.
///
/// A smaller step size reduces truncation error,
/// at the cost of more floating-point cancellation.
#[derive(Clone, Copy, Debug, Display, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StepSize<A>(A);

/// Error returned when 'StepSize' is given an invalid value.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidStepSizeError<A: Real> {
    /// Value is NaN.
    #[error("{0} is NaN")]
    IsNan(A),
    /// Value is below lower bound.
    #[error("{0} is below lower bound ({})", StepSize::<A>::min_value())]
    TooLow(A),
}

impl<A> StepSize<A>
where
    A: Real,
{
    /// Return a new 'StepSize' if given a valid value.
    ///
    /// Zero,
    /// negative values,
    /// and NaN
    /// are rejected.
    pub fn new(value: A) -> Result<Self, InvalidStepSizeError<A>> {
        match value.partial_cmp(&Self::min_value().0) {
            None => Err(InvalidStepSizeError::IsNan(value)),
            Some(Ordering::Less) => Err(InvalidStepSizeError::TooLow(value)),
            _ => Ok(Self(value)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> Deserialize<'de> for StepSize<A>
where
    A: Real + std::fmt::Display + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StepSize::new(A::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl<A> StepSize<A> {
    /// Unwrap 'StepSize' into inner value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Default for StepSize<A>
where
    A: 'static + Copy,
    f64: AsPrimitive<A>,
{
    fn default() -> Self {
        Self(DEFAULT_STEP_SIZE.as_())
    }
}

impl<A> LowerBounded for StepSize<A>
where
    A: Real,
{
    fn min_value() -> Self {
        Self(A::epsilon())
    }
}

macro_rules! impl_try_from_for_step_size {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<$ty> for StepSize<$ty> {
                type Error = InvalidStepSizeError<$ty>;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    StepSize::new(value)
                }
            }
        )*
    };
}

impl_try_from_for_step_size!(f32, f64);

/// Error returned when failing to convert from a string into 'StepSize'.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StepSizeFromStrError<A: Real, E> {
    /// Error converting from 'str' to inner value.
    #[error("Failed to convert from 'str': {0}")]
    FromStr(E),
    /// Error converting from inner value to 'StepSize'.
    #[error("Failed to convert into type: {0}")]
    TryInto(InvalidStepSizeError<A>),
}

impl<A> FromStr for StepSize<A>
where
    A: Real + FromStr,
{
    type Err = StepSizeFromStrError<A, A::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<A>()
            .map_err(StepSizeFromStrError::FromStr)
            .and_then(|x| StepSize::new(x).map_err(StepSizeFromStrError::TryInto))
    }
}
