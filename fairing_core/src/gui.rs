// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which user controls a fairing exposes.
//!
//! The host's UI layer reads [`GuiState`] after each tick; this crate never
//! draws anything. The state is recomputed when the controller's `GUI`
//! channel drains, which always happens after the same tick's rebuild.

use crate::config::FairingConfig;
use crate::lifecycle::LifecycleState;
use crate::scene::Scene;
use crate::section::FairingSection;

/// Visibility of each user-facing control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GuiState {
    /// Editor enable/disable toggle.
    pub toggle_visible: bool,
    /// Flight jettison action.
    pub jettison_visible: bool,
    /// Top diameter slider.
    pub top_diameter_visible: bool,
    /// Bottom diameter slider.
    pub bottom_diameter_visible: bool,
    /// Editor transparency toggle.
    pub transparency_visible: bool,
}

impl GuiState {
    /// Derives the exposed controls from the controller's current state.
    #[must_use]
    pub fn resolve(
        scene: Scene,
        state: LifecycleState,
        config: &FairingConfig,
        sections: &[FairingSection],
    ) -> Self {
        if state.is_terminal() {
            return Self::default();
        }
        let built = state == LifecycleState::Built;
        let sizing = scene.is_editor() && built && config.can_adjust;
        Self {
            toggle_visible: scene.is_editor()
                && config.can_disable_in_editor
                && state != LifecycleState::ForceDisabled,
            jettison_visible: scene.is_flight() && built,
            top_diameter_visible: sizing && sections.iter().any(|s| s.can_adjust_top),
            bottom_diameter_visible: sizing && sections.iter().any(|s| s.can_adjust_bottom),
            transparency_visible: scene.is_editor() && built,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionGeometry;

    fn sections() -> [FairingSection; 1] {
        [FairingSection::new(SectionGeometry::cylinder(0.0, 2.0, 1.0)).with_adjustable(true, false)]
    }

    #[test]
    fn editor_built_exposes_sizing() {
        let gui = GuiState::resolve(
            Scene::Editor,
            LifecycleState::Built,
            &FairingConfig::default(),
            &sections(),
        );
        assert!(gui.toggle_visible);
        assert!(gui.top_diameter_visible);
        assert!(!gui.bottom_diameter_visible, "no section has an adjustable bottom");
        assert!(gui.transparency_visible);
        assert!(!gui.jettison_visible);
    }

    #[test]
    fn flight_built_exposes_only_jettison() {
        let gui = GuiState::resolve(
            Scene::Flight,
            LifecycleState::Built,
            &FairingConfig::default(),
            &sections(),
        );
        assert_eq!(
            gui,
            GuiState {
                jettison_visible: true,
                ..GuiState::default()
            }
        );
    }

    #[test]
    fn force_disabled_hides_toggle() {
        let gui = GuiState::resolve(
            Scene::Editor,
            LifecycleState::ForceDisabled,
            &FairingConfig::default(),
            &sections(),
        );
        assert!(!gui.toggle_visible);
        assert!(!gui.top_diameter_visible);
    }

    #[test]
    fn jettisoned_hides_everything() {
        let gui = GuiState::resolve(
            Scene::Flight,
            LifecycleState::Jettisoned,
            &FairingConfig::default(),
            &sections(),
        );
        assert_eq!(gui, GuiState::default());
    }

    #[test]
    fn adjustment_can_be_locked() {
        let config = FairingConfig::default().with_can_adjust(false).with_can_disable(false);
        let gui = GuiState::resolve(Scene::Editor, LifecycleState::Built, &config, &sections());
        assert!(!gui.toggle_visible);
        assert!(!gui.top_diameter_visible);
    }
}
