// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred dirty-flag coalescing.
//!
//! Mutation sources (GUI callbacks, published updates, vessel-modified
//! notifications) never rebuild anything themselves. They mark one or more
//! [`dirty`] channels for a controller through [`RebuildScheduler::mark`].
//! Marking is idempotent: ten rebuild requests for the same controller
//! between two ticks drain as one.
//!
//! Each tick then runs the phases of [`TickPhase`] in declaration order and
//! records what happened in [`TickChanges`]. Draining a channel clears it,
//! so a later phase may mark an earlier-drained channel only for the *next*
//! tick, while marking a later channel (status marking rebuild, rebuild
//! marking GUI) is picked up in the same tick.

use alloc::vec::Vec;

use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use crate::dirty;
use crate::id::ControllerId;
use crate::lifecycle::{JettisonMode, Transition};

/// Which deferred work a mutation requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirtyRequest {
    /// Re-resolve attachment and enablement.
    pub status: bool,
    /// Destroy and rebuild the mesh.
    pub rebuild: bool,
    /// Recompute exposed controls.
    pub gui: bool,
}

impl DirtyRequest {
    /// Requests nothing.
    pub const NONE: Self = Self {
        status: false,
        rebuild: false,
        gui: false,
    };

    /// Requests a status check.
    pub const STATUS: Self = Self {
        status: true,
        rebuild: false,
        gui: false,
    };

    /// Requests a rebuild.
    pub const REBUILD: Self = Self {
        status: false,
        rebuild: true,
        gui: false,
    };

    /// Requests a GUI refresh.
    pub const GUI: Self = Self {
        status: false,
        rebuild: false,
        gui: true,
    };

    /// Returns the union of two requests.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            status: self.status || other.status,
            rebuild: self.rebuild || other.rebuild,
            gui: self.gui || other.gui,
        }
    }

    /// Returns `true` if nothing is requested.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.status || self.rebuild || self.gui)
    }
}

/// The fixed phases of one tick, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickPhase {
    /// Consume every pending mailbox.
    ExternalUpdate,
    /// Drain [`dirty::STATUS`] and resolve lifecycles.
    StatusCheck,
    /// Drain [`dirty::REBUILD`] and rebuild meshes.
    Rebuild,
    /// Drain [`dirty::GUI`] and recompute exposed controls.
    GuiRefresh,
}

impl TickPhase {
    /// Every phase, in execution order.
    pub const ALL: [Self; 4] = [
        Self::ExternalUpdate,
        Self::StatusCheck,
        Self::Rebuild,
        Self::GuiRefresh,
    ];

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExternalUpdate => "update",
            Self::StatusCheck => "status",
            Self::Rebuild => "rebuild",
            Self::GuiRefresh => "gui",
        }
    }
}

/// The set of changes produced by a single
/// [`FairingStore::tick`](crate::store::FairingStore::tick) call.
#[derive(Clone, Debug, Default)]
pub struct TickChanges {
    /// Controllers whose mailbox held a payload.
    pub updated: Vec<ControllerId>,
    /// Controllers whose lifecycle was re-resolved.
    pub status_checked: Vec<ControllerId>,
    /// Controllers whose mesh was rebuilt (successfully or not).
    pub rebuilt: Vec<ControllerId>,
    /// Controllers whose exposed controls were recomputed.
    pub gui_refreshed: Vec<ControllerId>,
    /// Lifecycle changes, in the order they happened.
    pub transitions: Vec<(ControllerId, Transition)>,
    /// Controllers that left the vehicle this tick.
    pub jettisoned: Vec<(ControllerId, JettisonMode)>,
}

impl TickChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.updated.clear();
        self.status_checked.clear();
        self.rebuilt.clear();
        self.gui_refreshed.clear();
        self.transitions.clear();
        self.jettisoned.clear();
    }

    /// Returns `true` if the tick did nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
            && self.status_checked.is_empty()
            && self.rebuilt.is_empty()
            && self.gui_refreshed.is_empty()
            && self.transitions.is_empty()
            && self.jettisoned.is_empty()
    }
}

/// Coalesces dirty requests per controller between ticks.
///
/// Keys are controller slot indices. All channels are local-only; no
/// dependency edges are ever added, so a drain yields exactly the marked
/// controllers, each once, in ascending id order.
#[derive(Debug)]
pub struct RebuildScheduler {
    dirty: DirtyTracker<u32>,
    tick_index: u64,
}

impl Default for RebuildScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RebuildScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            tick_index: 0,
        }
    }

    /// Marks the channels `request` names for `id`.
    pub fn mark(&mut self, id: ControllerId, request: DirtyRequest) {
        if request.status {
            self.dirty.mark(id.0, dirty::STATUS);
        }
        if request.rebuild {
            self.dirty.mark(id.0, dirty::REBUILD);
        }
        if request.gui {
            self.dirty.mark(id.0, dirty::GUI);
        }
    }

    /// Drains `channel`, returning each marked controller once.
    pub fn drain(&mut self, channel: Channel) -> Vec<ControllerId> {
        self.dirty
            .drain(channel)
            .deterministic()
            .run()
            .map(ControllerId)
            .collect()
    }

    /// Starts a new tick and returns its index.
    pub fn begin_tick(&mut self) -> u64 {
        self.tick_index += 1;
        self.tick_index
    }

    /// Returns the index of the most recent tick, or 0 before the first.
    #[must_use]
    pub fn tick_index(&self) -> u64 {
        self.tick_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_marks_drain_once() {
        let mut scheduler = RebuildScheduler::new();
        for _ in 0..10 {
            scheduler.mark(ControllerId(2), DirtyRequest::REBUILD);
        }
        scheduler.mark(ControllerId(0), DirtyRequest::REBUILD);
        assert_eq!(
            scheduler.drain(dirty::REBUILD),
            [ControllerId(0), ControllerId(2)]
        );
        assert!(
            scheduler.drain(dirty::REBUILD).is_empty(),
            "drain must clear the channel"
        );
    }

    #[test]
    fn channels_are_independent() {
        let mut scheduler = RebuildScheduler::new();
        scheduler.mark(ControllerId(1), DirtyRequest::STATUS.union(DirtyRequest::GUI));
        assert!(scheduler.drain(dirty::REBUILD).is_empty());
        assert_eq!(scheduler.drain(dirty::STATUS), [ControllerId(1)]);
        assert_eq!(scheduler.drain(dirty::GUI), [ControllerId(1)]);
    }

    #[test]
    fn empty_request_marks_nothing() {
        let mut scheduler = RebuildScheduler::new();
        scheduler.mark(ControllerId(0), DirtyRequest::NONE);
        assert!(DirtyRequest::NONE.is_empty());
        assert!(scheduler.drain(dirty::STATUS).is_empty());
        assert!(scheduler.drain(dirty::REBUILD).is_empty());
        assert!(scheduler.drain(dirty::GUI).is_empty());
    }

    #[test]
    fn tick_index_increments() {
        let mut scheduler = RebuildScheduler::new();
        assert_eq!(scheduler.tick_index(), 0);
        assert_eq!(scheduler.begin_tick(), 1);
        assert_eq!(scheduler.begin_tick(), 2);
    }

    #[test]
    fn tick_changes_clear() {
        let mut changes = TickChanges::default();
        changes.rebuilt.push(ControllerId(0));
        assert!(!changes.is_empty());
        changes.clear();
        assert!(changes.is_empty());
    }
}
