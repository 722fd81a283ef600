// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_imaging_ref --heading-base-level=0

//! Graphplane Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`]
//! for **IR recording and state tracing**.
//!
//! It does not rasterize. It exists so tests can assert on the ops a frame
//! emits, the imaging state each op saw, and whether every per-frame resource
//! was released again.
//!
//! Destroyed resources keep their descriptors: [`RefBackend::path`] still
//! resolves a path after the renderer has released it, while
//! [`RefBackend::live_paths`] reports how many are still alive.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use graphplane_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

#[derive(Clone, Debug)]
struct Slot<T> {
    desc: T,
    live: bool,
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in vectors keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Slot<PathDesc>>,
    paints: Vec<Slot<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Iterates the draw operations only, in order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter_map(|op| match op {
            ImagingOp::Draw(draw) => Some(draw),
            ImagingOp::State(_) => None,
        })
    }

    /// Clears all recorded events and ops but keeps resources and state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Descriptor of a path, including one that has since been destroyed.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize).map(|slot| &slot.desc)
    }

    /// Descriptor of a paint, including one that has since been destroyed.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize).map(|slot| &slot.desc)
    }

    /// Number of paths created and not yet destroyed.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|slot| slot.live).count()
    }

    /// Number of paints created and not yet destroyed.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().filter(|slot| slot.live).count()
    }

    /// The current imaging state.
    pub fn state_snapshot(&self) -> &StateSnapshot {
        &self.state
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("RefBackend: too many paths for u32 PathId");
        self.paths.push(Slot { desc, live: true });
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some(slot) = self.paths.get_mut(id.0 as usize) {
            slot.live = false;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push(Slot { desc, live: true });
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some(slot) = self.paints.get_mut(id.0 as usize) {
            slot.live = false;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
