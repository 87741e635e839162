//! Useful traits, types, and functions unlikely to conflict with existing definitions.

pub use crate::{
    derivative::{derivative, try_derivative},
    partial_derivative::{partial_derivative, try_partial_derivative},
    Config, StepSize,
};
