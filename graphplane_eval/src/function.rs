// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotted functions: the host-side list and the compiled render snapshot.

use std::fmt;
use std::sync::Arc;

use peniko::Color;

use crate::{Evaluator, ExprEvaluator, ParseError, compile};

/// Curve colors handed out to new functions, round-robin by list length.
pub const PALETTE: [Color; 8] = [
    Color::from_rgb8(0xe5, 0x39, 0x35),
    Color::from_rgb8(0x1e, 0x88, 0xe5),
    Color::from_rgb8(0x43, 0xa0, 0x47),
    Color::from_rgb8(0xfb, 0x8c, 0x00),
    Color::from_rgb8(0x8e, 0x24, 0xaa),
    Color::from_rgb8(0x00, 0xac, 0xc1),
    Color::from_rgb8(0x6d, 0x4c, 0x41),
    Color::from_rgb8(0x54, 0x6e, 0x7a),
];

/// Stable identifier of a function within one [`FunctionList`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(u64);

impl FunctionId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A function ready to render: evaluator, color and visibility.
///
/// This is an immutable snapshot. Renderers receive a fresh ordered slice of
/// these per frame and never modify them.
#[derive(Clone)]
pub struct CompiledFunction {
    /// Identifier of the source function.
    pub id: FunctionId,
    /// The compiled expression.
    pub evaluator: Arc<dyn Evaluator>,
    /// Stroke color of the curve.
    pub color: Color,
    /// Hidden functions are skipped by the renderer.
    pub visible: bool,
}

impl CompiledFunction {
    /// Creates a visible function from any evaluator.
    pub fn new(id: FunctionId, evaluator: impl Evaluator + 'static, color: Color) -> Self {
        Self {
            id,
            evaluator: Arc::new(evaluator),
            color,
            visible: true,
        }
    }
}

impl fmt::Debug for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFunction")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// One entry of a [`FunctionList`].
///
/// Keeps the expression text alongside the outcome of compiling it, so an
/// entry that fails to compile stays in the list with its error attached.
#[derive(Clone, Debug)]
pub struct PlottedFunction {
    id: FunctionId,
    expression: String,
    color: Color,
    visible: bool,
    compiled: Result<Arc<ExprEvaluator>, ParseError>,
}

impl PlottedFunction {
    fn new(id: FunctionId, expression: &str, color: Color) -> Self {
        Self {
            id,
            expression: expression.to_owned(),
            color,
            visible: true,
            compiled: compile_logged(id, expression),
        }
    }

    /// Identifier of this function.
    #[must_use]
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// The expression text as entered.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the curve is drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The compile error for the current expression, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.compiled.as_ref().err()
    }

    /// The render snapshot of this function, or `None` if it failed to compile.
    #[must_use]
    pub fn compiled(&self) -> Option<CompiledFunction> {
        let evaluator = self.compiled.as_ref().ok()?;
        Some(CompiledFunction {
            id: self.id,
            evaluator: Arc::clone(evaluator) as Arc<dyn Evaluator>,
            color: self.color,
            visible: self.visible,
        })
    }
}

fn compile_logged(id: FunctionId, expression: &str) -> Result<Arc<ExprEvaluator>, ParseError> {
    compile(expression).map(Arc::new).inspect_err(|err| {
        log::debug!("function {id}: {expression:?} does not compile: {err}");
    })
}

/// Ordered list of user functions.
///
/// Owns id allocation (a monotonic counter, ids are never reused) and compiles
/// each expression exactly once per text change. [`FunctionList::compiled`]
/// produces the snapshot handed to the renderer.
#[derive(Clone, Debug, Default)]
pub struct FunctionList {
    functions: Vec<PlottedFunction>,
    next_id: u64,
}

impl FunctionList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a function and returns its id.
    ///
    /// The color is taken from [`PALETTE`], cycling by the current list length.
    pub fn add(&mut self, expression: &str) -> FunctionId {
        self.next_id += 1;
        let id = FunctionId(self.next_id);
        let color = PALETTE[self.functions.len() % PALETTE.len()];
        self.functions.push(PlottedFunction::new(id, expression, color));
        id
    }

    /// Removes a function. Returns `false` if `id` is unknown.
    pub fn remove(&mut self, id: FunctionId) -> bool {
        let before = self.functions.len();
        self.functions.retain(|f| f.id != id);
        self.functions.len() != before
    }

    /// Replaces the expression text, recompiling if it changed.
    ///
    /// Returns `false` if `id` is unknown.
    pub fn set_expression(&mut self, id: FunctionId, expression: &str) -> bool {
        let Some(f) = self.get_mut(id) else {
            return false;
        };
        if f.expression != expression {
            f.expression = expression.to_owned();
            f.compiled = compile_logged(id, expression);
        }
        true
    }

    /// Changes the curve color. Returns `false` if `id` is unknown.
    pub fn set_color(&mut self, id: FunctionId, color: Color) -> bool {
        let Some(f) = self.get_mut(id) else {
            return false;
        };
        f.color = color;
        true
    }

    /// Flips visibility and returns the new state, or `None` if `id` is unknown.
    pub fn toggle_visibility(&mut self, id: FunctionId) -> Option<bool> {
        let f = self.get_mut(id)?;
        f.visible = !f.visible;
        Some(f.visible)
    }

    /// Looks up a function by id.
    #[must_use]
    pub fn get(&self, id: FunctionId) -> Option<&PlottedFunction> {
        self.functions.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: FunctionId) -> Option<&mut PlottedFunction> {
        self.functions.iter_mut().find(|f| f.id == id)
    }

    /// Iterates functions in list order.
    pub fn iter(&self) -> impl Iterator<Item = &PlottedFunction> {
        self.functions.iter()
    }

    /// Number of functions, including ones that fail to compile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the list has no functions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Render snapshot: every function that compiled, in list order.
    ///
    /// Hidden functions are included with `visible = false`; functions with a
    /// compile error are left out.
    #[must_use]
    pub fn compiled(&self) -> Vec<CompiledFunction> {
        self.functions
            .iter()
            .filter_map(PlottedFunction::compiled)
            .collect()
    }
}
