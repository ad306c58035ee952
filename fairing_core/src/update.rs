// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External update payloads and the single-slot mailbox.
//!
//! Collaborator subsystems (decouplers, adapters, procedural tanks) resize a
//! fairing by publishing a [`FairingUpdateData`] into the controller's
//! [`UpdateChannel`]. Publishing never touches sections directly; the
//! payload is consumed once, at the start of the next tick.

use crate::section::FairingSection;

/// A partial update published by a collaborator.
///
/// Each field is optional. Absent fields leave sections untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FairingUpdateData {
    /// New top ring height for sections with an adjustable top.
    pub top_y: Option<f64>,
    /// New bottom ring height for sections with an adjustable bottom.
    pub bottom_y: Option<f64>,
    /// New top radius for sections with an adjustable top.
    pub top_radius: Option<f64>,
    /// New bottom radius for sections with an adjustable bottom.
    pub bottom_radius: Option<f64>,
    /// External enable flag. Absence means enabled.
    pub enabled: Option<bool>,
}

impl FairingUpdateData {
    /// Sets the top ring height.
    #[must_use]
    pub fn with_top_y(mut self, y: f64) -> Self {
        self.top_y = Some(y);
        self
    }

    /// Sets the bottom ring height.
    #[must_use]
    pub fn with_bottom_y(mut self, y: f64) -> Self {
        self.bottom_y = Some(y);
        self
    }

    /// Sets the top radius.
    #[must_use]
    pub fn with_top_radius(mut self, radius: f64) -> Self {
        self.top_radius = Some(radius);
        self
    }

    /// Sets the bottom radius.
    #[must_use]
    pub fn with_bottom_radius(mut self, radius: f64) -> Self {
        self.bottom_radius = Some(radius);
        self
    }

    /// Sets the external enable flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Returns `true` if any geometric field is present.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        self.top_y.is_some()
            || self.bottom_y.is_some()
            || self.top_radius.is_some()
            || self.bottom_radius.is_some()
    }

    /// Writes the present fields into the adjustable ends of `sections`.
    ///
    /// Top fields only reach sections with `can_adjust_top`, bottom fields
    /// only sections with `can_adjust_bottom`. Returns `true` if any section
    /// value actually changed.
    pub fn apply_to(&self, sections: &mut [FairingSection]) -> bool {
        let mut changed = false;
        for section in sections {
            let before = section.geometry();
            if section.can_adjust_top {
                if let Some(y) = self.top_y {
                    section.top_y = y;
                }
                if let Some(r) = self.top_radius {
                    section.set_top_radius(r);
                }
            }
            if section.can_adjust_bottom {
                if let Some(y) = self.bottom_y {
                    section.bottom_y = y;
                }
                if let Some(r) = self.bottom_radius {
                    section.set_bottom_radius(r);
                }
            }
            changed |= section.geometry() != before;
        }
        changed
    }
}

/// Holds at most one pending [`FairingUpdateData`].
///
/// A second publish before consumption replaces the first; there is no
/// queue and no merge.
#[derive(Clone, Debug, Default)]
pub struct UpdateChannel {
    pending: Option<FairingUpdateData>,
}

impl UpdateChannel {
    /// Creates an empty mailbox.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `update`, replacing any unconsumed payload.
    ///
    /// Returns `true` if a previous payload was overwritten.
    pub fn publish(&mut self, update: FairingUpdateData) -> bool {
        let overwritten = self.is_pending();
        self.pending = Some(update);
        overwritten
    }

    /// Removes and returns the pending payload.
    pub fn take(&mut self) -> Option<FairingUpdateData> {
        self.pending.take()
    }

    /// Returns the pending payload without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&FairingUpdateData> {
        self.pending.as_ref()
    }

    /// Returns `true` if a payload is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionGeometry;

    #[test]
    fn last_publish_wins() {
        let mut channel = UpdateChannel::new();
        assert!(!channel.is_pending());
        assert!(!channel.publish(FairingUpdateData::default().with_top_radius(1.0)));
        assert!(channel.is_pending());
        assert!(channel.publish(FairingUpdateData::default().with_top_radius(2.0)));
        let taken = channel.take().unwrap();
        assert_eq!(taken.top_radius, Some(2.0));
        assert!(!channel.is_pending());
        assert!(channel.take().is_none(), "take must clear the mailbox");
    }

    #[test]
    fn respects_adjustability() {
        let mut sections = [
            FairingSection::new(SectionGeometry::cylinder(0.0, 1.0, 1.0)).with_adjustable(true, false),
            FairingSection::new(SectionGeometry::cylinder(1.0, 2.0, 1.0)).with_adjustable(false, true),
        ];
        let update = FairingUpdateData::default()
            .with_top_radius(2.0)
            .with_bottom_radius(3.0)
            .with_bottom_y(-0.5);
        assert!(update.apply_to(&mut sections));

        assert_eq!(sections[0].top_radius, 2.0);
        assert_eq!(sections[0].bottom_radius, 1.0);
        assert_eq!(sections[0].bottom_y, 0.0);
        assert_eq!(sections[1].top_radius, 1.0);
        assert_eq!(sections[1].bottom_radius, 3.0);
        assert_eq!(sections[1].bottom_y, -0.5);
    }

    #[test]
    fn absent_fields_change_nothing() {
        let mut sections =
            [FairingSection::new(SectionGeometry::cylinder(0.0, 1.0, 1.0)).with_adjustable(true, true)];
        let update = FairingUpdateData::default().with_enabled(false);
        assert!(!update.has_geometry());
        assert!(!update.apply_to(&mut sections));
        assert_eq!(sections[0].geometry(), SectionGeometry::cylinder(0.0, 1.0, 1.0));
    }

    #[test]
    fn same_value_is_not_a_change() {
        let mut sections =
            [FairingSection::new(SectionGeometry::cylinder(0.0, 1.0, 1.0)).with_adjustable(true, true)];
        let update = FairingUpdateData::default().with_top_radius(1.0);
        assert!(!update.apply_to(&mut sections));
    }
}
