// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expression text to [`Evaluator`], backed by `exmex`.

use std::fmt;

use exmex::{Express, FlatEx, FloatOpsFactory, MakeOperators, Operator};

use crate::{EvalError, Evaluator};

/// The single free variable an expression may use.
pub const VARIABLE: &str = "x";

/// The engine's float operators plus lowercase `pi`.
///
/// `e`, `E`, `PI` and `π` are already part of the engine's set.
#[derive(Clone, Debug)]
struct PlotOps;

impl MakeOperators<f64> for PlotOps {
    fn make<'a>() -> Vec<Operator<'a, f64>> {
        let mut ops = FloatOpsFactory::<f64>::make();
        ops.push(Operator::make_constant("pi", core::f64::consts::PI));
        ops
    }
}

/// Why an expression could not be turned into an evaluator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The expression is blank.
    Empty,
    /// The expression engine rejected the text; holds a readable reason.
    Syntax(String),
    /// The expression refers to a variable other than `x`.
    UnknownVariable(String),
    /// The expression parsed but failed on a trial evaluation at `x = 0`.
    Evaluation(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty expression"),
            Self::Syntax(msg) | Self::Evaluation(msg) => f.write_str(msg),
            Self::UnknownVariable(name) => write!(f, "Undefined symbol {name}"),
        }
    }
}

impl core::error::Error for ParseError {}

/// A compiled expression in `x`.
#[derive(Clone, Debug)]
pub struct ExprEvaluator {
    expr: FlatEx<f64, PlotOps>,
    text: String,
    uses_x: bool,
}

impl ExprEvaluator {
    /// The (trimmed) source text this evaluator was compiled from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Evaluator for ExprEvaluator {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        let args = [x];
        let vars: &[f64] = if self.uses_x { &args } else { &[] };
        self.expr
            .eval(vars)
            .map_err(|e| EvalError::Engine(e.to_string()))
    }
}

/// Compiles `text` into an evaluator of `x`.
///
/// Blank text is [`ParseError::Empty`] and never reaches the engine. The
/// constants `pi` and `e` are available. Variables other than [`VARIABLE`] are
/// rejected, and the result is evaluated once at `x = 0` so that engine
/// failures show up here rather than as a silently empty curve. A non-finite
/// trial result is fine: `1/x` compiles.
pub fn compile(text: &str) -> Result<ExprEvaluator, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let expr = FlatEx::<f64, PlotOps>::parse(text).map_err(|e| {
        log::debug!("engine rejected `{text}`: {e}");
        ParseError::Syntax(describe_syntax_error(text))
    })?;
    if let Some(other) = expr.var_names().iter().find(|name| name.as_str() != VARIABLE) {
        return Err(ParseError::UnknownVariable(other.clone()));
    }
    let uses_x = !expr.var_names().is_empty();
    let evaluator = ExprEvaluator {
        expr,
        text: text.to_owned(),
        uses_x,
    };
    evaluator
        .evaluate(0.0)
        .map_err(|e| ParseError::Evaluation(e.to_string()))?;
    Ok(evaluator)
}

/// A reason for a rejected expression that does not leak engine internals.
fn describe_syntax_error(text: &str) -> String {
    if let Some(at) = implicit_product_at(text) {
        let rest = &text[at..];
        let token = match rest.find(|c: char| !(c.is_alphanumeric() || c == '.' || c == '_')) {
            Some(0) => &rest[..1],
            Some(end) => &rest[..end],
            None => rest,
        };
        return format!("Missing operator before `{token}`, write products with `*`");
    }
    if !parentheses_balance(text) {
        return "Unbalanced parentheses".to_owned();
    }
    format!("Invalid expression `{text}`")
}

#[derive(Clone, Copy, PartialEq)]
enum Token {
    Start,
    Number,
    Name,
    Close,
    Operator,
}

/// Byte offset of the first operand that directly follows another operand,
/// as in `2x`, `(x)(x)` or `2 sin(x)`.
fn implicit_product_at(text: &str) -> Option<usize> {
    let mut prev = Token::Start;
    // Token the current character would extend, if any.
    let mut open = Token::Start;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            open = Token::Start;
        } else if c.is_ascii_digit() || c == '.' {
            if !matches!(open, Token::Number | Token::Name) {
                if matches!(prev, Token::Number | Token::Name | Token::Close) {
                    return Some(i);
                }
                open = Token::Number;
                prev = Token::Number;
            }
        } else if c.is_alphabetic() || c == '_' {
            match open {
                Token::Name => {}
                Token::Number => {
                    let exponent = matches!(c, 'e' | 'E')
                        && chars
                            .peek()
                            .is_some_and(|(_, n)| n.is_ascii_digit() || matches!(n, '+' | '-'));
                    if !exponent {
                        return Some(i);
                    }
                    if chars.peek().is_some_and(|(_, n)| matches!(n, '+' | '-')) {
                        chars.next();
                    }
                }
                _ => {
                    if matches!(prev, Token::Number | Token::Name | Token::Close) {
                        return Some(i);
                    }
                    open = Token::Name;
                    prev = Token::Name;
                }
            }
        } else if c == '(' {
            if open != Token::Name && matches!(prev, Token::Number | Token::Close) {
                return Some(i);
            }
            open = Token::Start;
            prev = Token::Operator;
        } else if c == ')' {
            open = Token::Start;
            prev = Token::Close;
        } else {
            open = Token::Start;
            prev = Token::Operator;
        }
    }
    None
}

fn parentheses_balance(text: &str) -> bool {
    let mut depth = 0_usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::{ParseError, compile};
    use crate::{Evaluator, evaluate_defined};

    #[test]
    fn empty_text_is_its_own_error() {
        assert_eq!(compile("").unwrap_err(), ParseError::Empty);
        assert_eq!(compile("   \t").unwrap_err(), ParseError::Empty);
        assert_eq!(ParseError::Empty.to_string(), "Empty expression");
    }

    #[test]
    fn square_evaluates() {
        let f = compile("x^2").unwrap();
        assert_eq!(f.evaluate(0.0).unwrap(), 0.0);
        assert_eq!(f.evaluate(3.0).unwrap(), 9.0);
        assert_eq!(f.evaluate(-2.0).unwrap(), 4.0);
    }

    #[test]
    fn functions_and_arithmetic() {
        let f = compile("sin(x) + 2*x - 1").unwrap();
        assert!((f.evaluate(0.0).unwrap() - -1.0).abs() < 1e-12);
        assert!((f.evaluate(1.5).unwrap() - (1.5f64.sin() + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn constant_expressions_ignore_x() {
        let f = compile("3.5").unwrap();
        assert_eq!(f.evaluate(100.0).unwrap(), 3.5);
    }

    #[test]
    fn pole_at_zero_still_compiles() {
        let f = compile("1/x").unwrap();
        assert_eq!(evaluate_defined(&f, 0.0), None);
        assert_eq!(evaluate_defined(&f, 2.0), Some(0.5));
    }

    #[test]
    fn other_variables_are_rejected() {
        assert_eq!(
            compile("x + y").unwrap_err(),
            ParseError::UnknownVariable("y".into())
        );
        assert_eq!(compile("y").unwrap_err().to_string(), "Undefined symbol y");
    }

    #[test]
    fn malformed_text_is_a_syntax_error() {
        assert!(matches!(compile("x +* )("), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn syntax_errors_read_as_plain_language() {
        assert_eq!(
            compile("2x").unwrap_err().to_string(),
            "Missing operator before `x`, write products with `*`"
        );
        assert_eq!(
            compile("(x+1)(x-1)").unwrap_err().to_string(),
            "Missing operator before `(`, write products with `*`"
        );
        assert_eq!(
            compile("sin(x").unwrap_err().to_string(),
            "Unbalanced parentheses"
        );
    }

    #[test]
    fn pi_and_e_are_constants() {
        let f = compile("sin(pi*x)").unwrap();
        assert!((f.evaluate(0.5).unwrap() - 1.0).abs() < 1e-12);
        let g = compile("e^x").unwrap();
        assert!((g.evaluate(1.0).unwrap() - core::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn exponent_literals_are_not_products() {
        assert_eq!(super::implicit_product_at("1e-3*x"), None);
        assert_eq!(super::implicit_product_at("log10(x) + 2.5E2"), None);
        assert_eq!(super::implicit_product_at("3 x"), Some(2));
    }

    #[test]
    fn domain_violations_are_undefined_not_errors() {
        let f = compile("sqrt(x)").unwrap();
        assert_eq!(evaluate_defined(&f, -4.0), None);
        assert_eq!(evaluate_defined(&f, 4.0), Some(2.0));
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(compile("  x^2 ").unwrap().text(), "x^2");
    }
}
