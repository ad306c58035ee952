// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the tick loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`FairingStore::tick_traced`](crate::store::FairingStore::tick_traced)
//! calls at each stage. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Plain diagnostic lines (missing nodes, build failures) go through the
//! `log` facade instead; tracing is for structured per-tick events.

use crate::attach::PartRef;
use crate::geometry::MeshHandle;
use crate::id::ControllerId;
use crate::lifecycle::{JettisonMode, LifecycleState};
use crate::scene::Scene;
use crate::scheduler::{TickChanges, TickPhase};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted at the start of every tick.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Monotonic tick counter.
    pub tick_index: u64,
    /// Host context of the tick.
    pub scene: Scene,
    /// Number of controllers in the store.
    pub controllers: usize,
}

/// Marks the beginning of a tick phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBeginEvent {
    /// Tick counter.
    pub tick_index: u64,
    /// Which phase is starting.
    pub phase: TickPhase,
}

/// Marks the end of a tick phase.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEndEvent {
    /// Tick counter.
    pub tick_index: u64,
    /// Which phase is ending.
    pub phase: TickPhase,
    /// Controllers the phase acted on.
    pub processed: usize,
}

/// Emitted when a controller changes lifecycle state.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEvent {
    /// Tick counter (the last started tick for out-of-tick actions).
    pub tick_index: u64,
    /// The controller that changed.
    pub controller: ControllerId,
    /// State before.
    pub from: LifecycleState,
    /// State after.
    pub to: LifecycleState,
}

/// Emitted after every geometry build attempt.
#[derive(Clone, Copy, Debug)]
pub struct BuildEvent {
    /// Tick counter.
    pub tick_index: u64,
    /// The controller that rebuilt.
    pub controller: ControllerId,
    /// Number of sections in the request.
    pub sections: usize,
    /// Opacity passed to the builder.
    pub opacity: f32,
    /// The new mesh, or `None` if the builder failed.
    pub mesh: Option<MeshHandle>,
}

/// Emitted when a fairing leaves the vehicle.
#[derive(Clone, Copy, Debug)]
pub struct JettisonEvent {
    /// Tick counter (the last started tick for out-of-tick actions).
    pub tick_index: u64,
    /// The controller that jettisoned.
    pub controller: ControllerId,
    /// How the fairing left.
    pub mode: JettisonMode,
    /// The peer that received the mesh, for [`JettisonMode::Reparent`].
    pub peer: Option<PartRef>,
}

/// Per-tick counts, emitted at the end of every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Tick counter.
    pub tick_index: u64,
    /// Mailboxes consumed.
    pub updated: usize,
    /// Status checks resolved.
    pub status_checked: usize,
    /// Rebuilds performed.
    pub rebuilt: usize,
    /// GUI refreshes performed.
    pub gui_refreshed: usize,
    /// Lifecycle transitions.
    pub transitions: usize,
    /// Jettisons.
    pub jettisoned: usize,
}

impl TickSummary {
    /// Counts the entries of `changes`.
    #[must_use]
    pub fn new(tick_index: u64, changes: &TickChanges) -> Self {
        Self {
            tick_index,
            updated: changes.updated.len(),
            status_checked: changes.status_checked.len(),
            rebuilt: changes.rebuilt.len(),
            gui_refreshed: changes.gui_refreshed.len(),
            transitions: changes.transitions.len(),
            jettisoned: changes.jettisoned.len(),
        }
    }

    /// Returns how many controllers `phase` processed.
    #[must_use]
    pub fn processed(&self, phase: TickPhase) -> usize {
        match phase {
            TickPhase::ExternalUpdate => self.updated,
            TickPhase::StatusCheck => self.status_checked,
            TickPhase::Rebuild => self.rebuilt,
            TickPhase::GuiRefresh => self.gui_refreshed,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the tick loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of a tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called at the beginning of a tick phase.
    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        _ = e;
    }

    /// Called at the end of a tick phase.
    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        _ = e;
    }

    /// Called when a controller changes lifecycle state.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }

    /// Called after a build attempt.
    fn on_build(&mut self, e: &BuildEvent) {
        _ = e;
    }

    /// Called when a fairing is jettisoned.
    fn on_jettison(&mut self, e: &JettisonEvent) {
        _ = e;
    }

    /// Called with the per-tick summary.
    fn on_tick_summary(&mut self, s: &TickSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseBeginEvent`].
    #[inline]
    pub fn phase_begin(&mut self, e: &PhaseBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseEndEvent`].
    #[inline]
    pub fn phase_end(&mut self, e: &PhaseEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BuildEvent`].
    #[inline]
    pub fn build(&mut self, e: &BuildEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_build(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`JettisonEvent`].
    #[inline]
    pub fn jettison(&mut self, e: &JettisonEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_jettison(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickSummary`].
    #[inline]
    pub fn tick_summary(&mut self, s: &TickSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_tick_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Transition;
    use alloc::vec::Vec;

    #[test]
    fn summary_counts_changes() {
        let mut changes = TickChanges::default();
        changes.updated.push(ControllerId(0));
        changes.rebuilt.push(ControllerId(0));
        changes.rebuilt.push(ControllerId(1));
        changes.transitions.push((
            ControllerId(1),
            Transition {
                from: LifecycleState::Dormant,
                to: LifecycleState::Built,
            },
        ));
        let summary = TickSummary::new(7, &changes);
        assert_eq!(summary.tick_index, 7);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.rebuilt, 2);
        assert_eq!(summary.transitions, 1);
        assert_eq!(summary.jettisoned, 0);

        let per_phase: Vec<usize> = TickPhase::ALL
            .iter()
            .map(|phase| summary.processed(*phase))
            .collect();
        assert_eq!(per_phase, [1, 0, 2, 0]);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_tick(&TickEvent {
            tick_index: 1,
            scene: Scene::Editor,
            controllers: 0,
        });
        sink.on_tick_summary(&TickSummary::default());
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.phase_begin(&PhaseBeginEvent {
            tick_index: 1,
            phase: TickPhase::Rebuild,
        });
        tracer.tick_summary(&TickSummary::default());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        struct RecordingSink {
            builds: Vec<ControllerId>,
        }
        impl TraceSink for RecordingSink {
            fn on_build(&mut self, e: &BuildEvent) {
                self.builds.push(e.controller);
            }
        }

        let mut sink = RecordingSink { builds: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.build(&BuildEvent {
            tick_index: 1,
            controller: ControllerId(4),
            sections: 1,
            opacity: 1.0,
            mesh: Some(MeshHandle(9)),
        });
        drop(tracer);
        assert_eq!(sink.builds, &[ControllerId(4)]);
    }
}
