// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// Failure reported by an [`Evaluator`] for a single input.
///
/// These never reach the user: [`evaluate_defined`] folds them into
/// "undefined at this x".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The input lies outside the function's domain.
    Domain(String),
    /// The expression engine failed for any other reason.
    Engine(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(msg) => write!(f, "domain error: {msg}"),
            Self::Engine(msg) => write!(f, "evaluation failed: {msg}"),
        }
    }
}

impl core::error::Error for EvalError {}

/// A compiled function of one variable.
///
/// Implementations may return any `f64`, including `NaN` and infinities, or an
/// error; callers that plot the result go through [`evaluate_defined`].
///
/// Any `Fn(f64) -> Result<f64, EvalError>` closure is an evaluator.
pub trait Evaluator: Send + Sync {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> Evaluator for F
where
    F: Fn(f64) -> Result<f64, EvalError> + Send + Sync,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self(x)
    }
}

/// Evaluates at `x`, returning `Some` only for a finite result.
///
/// Errors, `NaN` and infinities all become `None`, meaning the function is
/// undefined at `x`. A non-finite `x` is never passed to the evaluator.
pub fn evaluate_defined<E: Evaluator + ?Sized>(evaluator: &E, x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }
    evaluator.evaluate(x).ok().filter(|y| y.is_finite())
}
