// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller identity.

use core::fmt;

/// Identifies one fairing controller inside a
/// [`FairingStore`](crate::store::FairingStore).
///
/// Ids are dense slot indices handed out by
/// [`FairingStore::insert`](crate::store::FairingStore::insert). Controllers
/// are never removed individually, so an id stays valid for the store's
/// lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerId(pub u32);

impl ControllerId {
    /// Returns the slot index as a `usize`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControllerId({})", self.0)
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
