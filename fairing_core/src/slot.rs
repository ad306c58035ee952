// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack roles and the fixed slot table.
//!
//! Up to five collaborator subsystems drive the fairings of one part, each
//! owning a stack position. Instead of looking controllers up by module name
//! at runtime, every controller may claim one [`FairingSlot`] in its
//! configuration. The [`SlotTable`] is filled when controllers are inserted,
//! so routing an update is a single array index.

use crate::id::ControllerId;

/// The stack role a fairing plays on its part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FairingSlot {
    /// Shroud over the top of the stack.
    Nose,
    /// Shroud around the main tank body.
    Body,
    /// Shroud around the engine mount.
    Mount,
    /// Adapter shroud between two stages.
    Interstage,
    /// Shroud around radially attached boosters.
    Booster,
}

impl FairingSlot {
    /// Number of slots.
    pub const COUNT: usize = 5;

    /// Every slot, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::Body,
        Self::Mount,
        Self::Interstage,
        Self::Booster,
    ];

    /// Returns the slot's position in the table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Nose => 0,
            Self::Body => 1,
            Self::Mount => 2,
            Self::Interstage => 3,
            Self::Booster => 4,
        }
    }
}

/// Maps each [`FairingSlot`] to at most one controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotTable {
    entries: [Option<ControllerId>; FairingSlot::COUNT],
}

impl SlotTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; FairingSlot::COUNT],
        }
    }

    /// Binds `slot` to `id`, returning the controller previously bound there.
    pub fn assign(&mut self, slot: FairingSlot, id: ControllerId) -> Option<ControllerId> {
        self.entries[slot.index()].replace(id)
    }

    /// Returns the controller bound to `slot`.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: FairingSlot) -> Option<ControllerId> {
        self.entries[slot.index()]
    }

    /// Iterates over bound slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = (FairingSlot, ControllerId)> + '_ {
        FairingSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_table_order() {
        for (i, slot) in FairingSlot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn assign_replaces_previous_binding() {
        let mut table = SlotTable::new();
        assert_eq!(table.assign(FairingSlot::Body, ControllerId(0)), None);
        assert_eq!(
            table.assign(FairingSlot::Body, ControllerId(3)),
            Some(ControllerId(0))
        );
        assert_eq!(table.get(FairingSlot::Body), Some(ControllerId(3)));
        assert_eq!(table.get(FairingSlot::Nose), None);
    }

    #[test]
    fn iter_skips_unbound_slots() {
        let mut table = SlotTable::new();
        table.assign(FairingSlot::Booster, ControllerId(1));
        table.assign(FairingSlot::Nose, ControllerId(2));
        let bound: alloc::vec::Vec<_> = table.iter().collect();
        assert_eq!(
            bound,
            [
                (FairingSlot::Nose, ControllerId(2)),
                (FairingSlot::Booster, ControllerId(1)),
            ]
        );
    }
}
