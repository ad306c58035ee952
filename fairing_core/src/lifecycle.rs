// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller lifecycle states.

/// Where a fairing controller is in its lifecycle.
///
/// ```text
///  Uninitialized ─┬─► Built ◄──────► Dormant
///                 │     ▲ │
///                 │     │ └──► ForceDisabled ──► Dormant
///                 │     └──────────┘
///                 ├─► Dormant
///                 └─► ForceDisabled
///
///  Built ──► Jettisoned (terminal)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// No status check has run yet.
    #[default]
    Uninitialized,
    /// Watching for attachment or re-enable. No geometry exists.
    Dormant,
    /// Geometry exists (or will be rebuilt this tick).
    Built,
    /// A collaborator suppressed the fairing. No geometry exists.
    ForceDisabled,
    /// Terminal. The fairing left the vehicle.
    Jettisoned,
}

impl LifecycleState {
    /// Returns `true` in the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Jettisoned)
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Dormant => "dormant",
            Self::Built => "built",
            Self::ForceDisabled => "force-disabled",
            Self::Jettisoned => "jettisoned",
        }
    }
}

/// A lifecycle change, as reported in
/// [`TickChanges::transitions`](crate::scheduler::TickChanges::transitions).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State before the change.
    pub from: LifecycleState,
    /// State after the change.
    pub to: LifecycleState,
}

/// How a jettisoned fairing left the vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JettisonMode {
    /// The mesh was handed to the structural peer below.
    Reparent,
    /// Panels were ejected as independent bodies.
    Eject,
}
