// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-controller configuration.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attach::WatchMode;
use crate::section::FairingSection;
use crate::slot::FairingSlot;

/// Default opacity of a fairing rendered translucent in the editor.
pub const DEFAULT_EDITOR_OPACITY: f32 = 0.25;

/// Default separation impulse applied to ejected panels.
pub const DEFAULT_EJECTION_IMPULSE: f64 = 5.0;

/// Configuration for one [`FairingController`](crate::controller::FairingController).
#[derive(Clone, Debug)]
pub struct FairingConfig {
    /// Display name, used in log lines.
    pub name: String,
    /// Node whose coupling spawns the fairing. `None` means always present.
    pub watched_node: Option<String>,
    /// How the watched node is interpreted.
    pub watch_mode: WatchMode,
    /// Whether the lowest section's bottom snaps to the trigger node.
    pub snap_to_node: bool,
    /// Whether losing the trigger peer in flight jettisons the fairing.
    pub auto_jettison: bool,
    /// Whether the user may toggle the fairing off in the editor.
    pub can_disable_in_editor: bool,
    /// Whether user-chosen diameters are applied to adjustable sections.
    pub can_adjust: bool,
    /// Texture set handed to the geometry builder.
    pub texture_set: String,
    /// Opacity used in the editor when the transparency toggle is on.
    pub editor_opacity: f32,
    /// Separation impulse hint for ejected panels.
    pub ejection_impulse: f64,
    /// Default sections, bottom to top.
    pub sections: Vec<FairingSection>,
    /// Stack role this controller answers to, if any.
    pub slot: Option<FairingSlot>,
}

impl Default for FairingConfig {
    fn default() -> Self {
        Self {
            name: String::from("fairing"),
            watched_node: None,
            watch_mode: WatchMode::Direct,
            snap_to_node: false,
            auto_jettison: true,
            can_disable_in_editor: true,
            can_adjust: true,
            texture_set: String::from("default"),
            editor_opacity: DEFAULT_EDITOR_OPACITY,
            ejection_impulse: DEFAULT_EJECTION_IMPULSE,
            sections: Vec::new(),
            slot: None,
        }
    }
}

impl FairingConfig {
    /// A payload shroud that spawns when something is attached at `node`
    /// and snaps its base to it.
    #[must_use]
    pub fn payload(node: &str) -> Self {
        Self {
            name: String::from("payload"),
            watched_node: Some(String::from(node)),
            snap_to_node: true,
            ..Self::default()
        }
    }

    /// An interstage that looks through the adapter attached at `node` to
    /// the stage below it.
    #[must_use]
    pub fn interstage(node: &str) -> Self {
        Self {
            name: String::from("interstage"),
            watched_node: Some(String::from(node)),
            watch_mode: WatchMode::LowestNode,
            snap_to_node: true,
            slot: Some(FairingSlot::Interstage),
            ..Self::default()
        }
    }

    /// A fairing that is always present and never separates on its own.
    #[must_use]
    pub fn permanent() -> Self {
        Self {
            name: String::from("permanent"),
            auto_jettison: false,
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = String::from(name);
        self
    }

    /// Sets the watched node and mode.
    #[must_use]
    pub fn with_watched_node(mut self, node: &str, mode: WatchMode) -> Self {
        self.watched_node = Some(String::from(node));
        self.watch_mode = mode;
        self
    }

    /// Sets whether the base snaps to the trigger node.
    #[must_use]
    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap_to_node = snap;
        self
    }

    /// Sets auto-jettison on detachment.
    #[must_use]
    pub fn with_auto_jettison(mut self, auto_jettison: bool) -> Self {
        self.auto_jettison = auto_jettison;
        self
    }

    /// Sets whether the editor toggle is offered.
    #[must_use]
    pub fn with_can_disable(mut self, can_disable: bool) -> Self {
        self.can_disable_in_editor = can_disable;
        self
    }

    /// Sets global adjustability.
    #[must_use]
    pub fn with_can_adjust(mut self, can_adjust: bool) -> Self {
        self.can_adjust = can_adjust;
        self
    }

    /// Sets the texture set.
    #[must_use]
    pub fn with_texture_set(mut self, texture_set: &str) -> Self {
        self.texture_set = String::from(texture_set);
        self
    }

    /// Sets the editor opacity.
    #[must_use]
    pub fn with_editor_opacity(mut self, opacity: f32) -> Self {
        self.editor_opacity = opacity;
        self
    }

    /// Sets the panel ejection impulse.
    #[must_use]
    pub fn with_ejection_impulse(mut self, impulse: f64) -> Self {
        self.ejection_impulse = impulse;
        self
    }

    /// Appends a section on top of the stack.
    #[must_use]
    pub fn with_section(mut self, section: FairingSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Sets the stack role.
    #[must_use]
    pub fn with_slot(mut self, slot: FairingSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Clamps out-of-range values, logging each correction.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.editor_opacity) {
            let clamped = if self.editor_opacity.is_nan() {
                DEFAULT_EDITOR_OPACITY
            } else {
                self.editor_opacity.clamp(0.0, 1.0)
            };
            log::warn!(
                "fairing `{}`: editor opacity {} out of range, using {clamped}",
                self.name,
                self.editor_opacity
            );
            self.editor_opacity = clamped;
        }
        if self.ejection_impulse.is_nan() || self.ejection_impulse < 0.0 {
            log::warn!(
                "fairing `{}`: ejection impulse {} is invalid, using 0",
                self.name,
                self.ejection_impulse
            );
            self.ejection_impulse = 0.0;
        }
        for (i, section) in self.sections.iter_mut().enumerate() {
            if section.section_count == 0 {
                log::warn!("fairing `{}`: section {i} has no panels, using 1", self.name);
                section.section_count = 1;
            }
            if section.top_radius < 0.0 || section.bottom_radius < 0.0 {
                log::warn!("fairing `{}`: section {i} has a negative radius", self.name);
                section.set_top_radius(section.top_radius);
                section.set_bottom_radius(section.bottom_radius);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionGeometry;

    #[test]
    fn presets() {
        let payload = FairingConfig::payload("bottom");
        assert_eq!(payload.watched_node.as_deref(), Some("bottom"));
        assert_eq!(payload.watch_mode, WatchMode::Direct);
        assert!(payload.snap_to_node);

        let interstage = FairingConfig::interstage("bottom");
        assert_eq!(interstage.watch_mode, WatchMode::LowestNode);
        assert_eq!(interstage.slot, Some(FairingSlot::Interstage));

        let permanent = FairingConfig::permanent();
        assert!(permanent.watched_node.is_none());
        assert!(!permanent.auto_jettison);
    }

    #[test]
    fn sanitized_clamps_invalid_values() {
        let mut section = FairingSection::new(SectionGeometry::cylinder(0.0, 1.0, 1.0));
        section.section_count = 0;
        section.top_radius = -2.0;
        let config = FairingConfig::default()
            .with_editor_opacity(3.0)
            .with_ejection_impulse(f64::NAN)
            .with_section(section)
            .sanitized();
        assert_eq!(config.editor_opacity, 1.0);
        assert_eq!(config.ejection_impulse, 0.0);
        assert_eq!(config.sections[0].section_count, 1);
        assert_eq!(config.sections[0].top_radius, 0.0);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let config = FairingConfig::default().with_editor_opacity(0.5).sanitized();
        assert_eq!(config.editor_opacity, 0.5);
        assert_eq!(config.ejection_impulse, DEFAULT_EJECTION_IMPULSE);
    }
}
