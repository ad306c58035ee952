// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host context a fairing is running in.
//!
//! Sizing edits only rebuild in the editor and jettison only exists in
//! flight. The editor may also render fairings translucent so the payload
//! stays visible.

/// Which host context the fairings are operating in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scene {
    /// The vehicle is being assembled. Sizes are editable, nothing separates.
    #[default]
    Editor,
    /// The vehicle is live in the simulation.
    Flight,
}

impl Scene {
    /// Returns `true` in the vehicle editor.
    #[inline]
    #[must_use]
    pub const fn is_editor(self) -> bool {
        matches!(self, Self::Editor)
    }

    /// Returns `true` in a live simulation.
    #[inline]
    #[must_use]
    pub const fn is_flight(self) -> bool {
        matches!(self, Self::Flight)
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Flight => "flight",
        }
    }
}
