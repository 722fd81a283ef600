// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_eval --heading-base-level=0

//! Graphplane Eval: the boundary between the plot engine and the expression
//! engine.
//!
//! The plot engine only ever needs "the value of f at x, or nothing". This
//! crate provides:
//!
//! - [`Evaluator`]: a compiled function of one variable. Implemented by
//!   compiled expressions and by any `Fn(f64) -> Result<f64, EvalError>`.
//! - [`evaluate_defined`]: the adapter that folds errors, `NaN` and
//!   infinities into `None`, so samplers never see the engine's error types.
//! - [`compile`]: expression text to [`ExprEvaluator`] via `exmex`, with blank
//!   text reported as [`ParseError::Empty`].
//! - [`FunctionList`] and [`CompiledFunction`]: a host-side list of user
//!   functions that owns id allocation and colors, and the immutable
//!   snapshot the renderer consumes.
//!
//! ## Example
//!
//! ```rust
//! use graphplane_eval::{FunctionList, ParseError, evaluate_defined};
//!
//! let mut list = FunctionList::new();
//! let square = list.add("x^2");
//! let pending = list.add("");
//!
//! // The empty entry stays in the list with its error attached ...
//! assert_eq!(list.get(pending).unwrap().error(), Some(&ParseError::Empty));
//!
//! // ... but only compiled functions reach the renderer.
//! let snapshot = list.compiled();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].id, square);
//! assert_eq!(evaluate_defined(snapshot[0].evaluator.as_ref(), 3.0), Some(9.0));
//!
//! // 1/x is undefined at the pole rather than an error.
//! let recip = graphplane_eval::compile("1/x").unwrap();
//! assert_eq!(evaluate_defined(&recip, 0.0), None);
//! ```

mod compile;
mod evaluator;
mod function;

pub use compile::{ExprEvaluator, ParseError, VARIABLE, compile};
pub use evaluator::{EvalError, Evaluator, evaluate_defined};
pub use function::{CompiledFunction, FunctionId, FunctionList, PALETTE, PlottedFunction};
