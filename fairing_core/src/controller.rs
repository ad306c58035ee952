// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-fairing lifecycle state machine.
//!
//! A [`FairingController`] owns its sections, its attachment watcher, its
//! update mailbox and at most one mesh. It never schedules work itself:
//! every mutating method reports the dirty channels it needs through an
//! [`Effects`] value, and the owning
//! [`FairingStore`](crate::store::FairingStore) marks them and drives the
//! tick.
//!
//! # Status resolution
//!
//! On each status check the controller observes its watched node and then,
//! in order of precedence:
//!
//! 1. A jettisoned controller does nothing.
//! 2. A new or different trigger peer is remembered, the base snaps to it
//!    (if enabled) and a rebuild is requested.
//! 3. A remembered peer that is gone is a *detachment*.
//! 4. External force-disable tears down to
//!    [`ForceDisabled`](LifecycleState::ForceDisabled).
//! 5. A detachment of a built fairing in flight with auto-jettison
//!    jettisons onto the remembered peer.
//! 6. Otherwise the fairing is built when the user has it enabled and the
//!    watcher allows it, and torn down to [`Dormant`](LifecycleState::Dormant)
//!    when not.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::attach::{AttachmentWatcher, Observation, PartRef, PartTree};
use crate::config::FairingConfig;
use crate::geometry::{BuildRequest, EjectRequest, GeometryBuilder, MeshHandle};
use crate::gui::GuiState;
use crate::id::ControllerId;
use crate::lifecycle::{JettisonMode, LifecycleState, Transition};
use crate::persist::{self, SavedFairing};
use crate::scene::Scene;
use crate::scheduler::DirtyRequest;
use crate::section::{self, FairingExtents, FairingSection};
use crate::update::{FairingUpdateData, UpdateChannel};

/// What a controller operation changed, for the store to act on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Effects {
    /// Channels to mark for this controller.
    pub(crate) request: DirtyRequest,
    /// Net lifecycle change, if any.
    pub(crate) transition: Option<Transition>,
    /// Set when the controller jettisoned.
    pub(crate) jettison: Option<(JettisonMode, Option<PartRef>)>,
}

/// Result of a rebuild attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BuildReport {
    pub(crate) sections: usize,
    pub(crate) opacity: f32,
    pub(crate) mesh: Option<MeshHandle>,
}

/// One fairing: sections, lifecycle and the geometry it currently owns.
#[derive(Debug)]
pub struct FairingController {
    id: ControllerId,
    config: FairingConfig,
    sections: Vec<FairingSection>,
    watcher: AttachmentWatcher,
    lifecycle: LifecycleState,
    enabled_by_user: bool,
    enabled_externally: bool,
    last_peer: Option<PartRef>,
    mailbox: UpdateChannel,
    mesh: Option<MeshHandle>,
    restored_built: bool,
    top_diameter: f64,
    bottom_diameter: f64,
    transparent_in_editor: bool,
    gui: GuiState,
}

impl FairingController {
    /// Creates an uninitialized controller from `config`.
    #[must_use]
    pub fn new(id: ControllerId, config: FairingConfig) -> Self {
        let config = config.sanitized();
        let watcher = AttachmentWatcher::new(config.watched_node.as_deref(), config.watch_mode);
        let mut controller = Self {
            id,
            sections: config.sections.clone(),
            config,
            watcher,
            lifecycle: LifecycleState::Uninitialized,
            enabled_by_user: true,
            enabled_externally: true,
            last_peer: None,
            mailbox: UpdateChannel::new(),
            mesh: None,
            restored_built: false,
            top_diameter: 0.0,
            bottom_diameter: 0.0,
            transparent_in_editor: false,
            gui: GuiState::default(),
        };
        controller.sync_targets_from_sections();
        controller
    }

    // -- Accessors --

    /// Returns the controller's id.
    #[must_use]
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Returns the (sanitized) configuration.
    #[must_use]
    pub fn config(&self) -> &FairingConfig {
        &self.config
    }

    /// Returns the sections, bottom to top.
    #[must_use]
    pub fn sections(&self) -> &[FairingSection] {
        &self.sections
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    /// Returns the user's enable toggle.
    #[must_use]
    pub fn enabled_by_user(&self) -> bool {
        self.enabled_by_user
    }

    /// Returns `false` while a collaborator force-disables the fairing.
    #[must_use]
    pub fn enabled_externally(&self) -> bool {
        self.enabled_externally
    }

    /// Returns the remembered trigger peer.
    #[must_use]
    pub fn last_peer(&self) -> Option<PartRef> {
        self.last_peer
    }

    /// Returns the mesh currently owned by this controller.
    #[must_use]
    pub fn mesh(&self) -> Option<MeshHandle> {
        self.mesh
    }

    /// Returns the exposed controls as of the last GUI refresh.
    #[must_use]
    pub fn gui(&self) -> GuiState {
        self.gui
    }

    /// Returns the user-chosen `(top, bottom)` diameters.
    #[must_use]
    pub fn target_diameters(&self) -> (f64, f64) {
        (self.top_diameter, self.bottom_diameter)
    }

    /// Returns whether the editor renders this fairing translucent.
    #[must_use]
    pub fn is_transparent_in_editor(&self) -> bool {
        self.transparent_in_editor
    }

    /// Returns the unconsumed update, if any.
    #[must_use]
    pub fn pending_update(&self) -> Option<&FairingUpdateData> {
        self.mailbox.peek()
    }

    /// Measures the current section stack.
    #[must_use]
    pub fn extents(&self) -> Option<FairingExtents> {
        FairingExtents::measure(&self.sections)
    }

    /// Returns the union of all section profiles in the (radius, axial)
    /// plane.
    #[must_use]
    pub fn profile_bounds(&self) -> Option<Rect> {
        section::profile_bounds(&self.sections)
    }

    /// Returns the opacity a build in `scene` would use.
    #[must_use]
    pub fn opacity(&self, scene: Scene) -> f32 {
        if scene.is_editor() && self.transparent_in_editor {
            self.config.editor_opacity
        } else {
            1.0
        }
    }

    // -- Mutation sources --

    /// Stores `update` in the mailbox. Returns `true` if an unconsumed
    /// update was overwritten.
    pub(crate) fn publish(&mut self, update: FairingUpdateData) -> bool {
        self.mailbox.publish(update)
    }

    /// Sets the user-chosen diameters. Negative values are clamped.
    pub(crate) fn set_target_diameters(&mut self, top: Option<f64>, bottom: Option<f64>) -> bool {
        let before = (self.top_diameter, self.bottom_diameter);
        if let Some(top) = top {
            self.top_diameter = top.max(0.0);
        }
        if let Some(bottom) = bottom {
            self.bottom_diameter = bottom.max(0.0);
        }
        before != (self.top_diameter, self.bottom_diameter)
    }

    /// Edits sections in place. Returns `true` if any shape changed.
    pub(crate) fn edit_sections(&mut self, edit: impl FnOnce(&mut [FairingSection])) -> bool {
        let before: Vec<_> = self.sections.iter().map(FairingSection::geometry).collect();
        edit(&mut self.sections);
        for section in &mut self.sections {
            section.section_count = section.section_count.max(1);
            section.set_top_radius(section.top_radius);
            section.set_bottom_radius(section.bottom_radius);
        }
        let changed = self
            .sections
            .iter()
            .map(FairingSection::geometry)
            .ne(before.iter().copied());
        if changed {
            self.sync_targets_from_sections();
        }
        changed
    }

    /// Sets the editor transparency toggle. Returns `true` on change.
    pub(crate) fn set_transparent(&mut self, transparent: bool) -> bool {
        let changed = self.transparent_in_editor != transparent;
        self.transparent_in_editor = transparent;
        changed
    }

    /// Sets the user's enable toggle.
    ///
    /// Only honored in the editor. Ignored while force-disabled or
    /// jettisoned, and when the configuration forbids disabling.
    pub(crate) fn set_enabled(&mut self, enabled: bool, scene: Scene) -> DirtyRequest {
        if self.lifecycle.is_terminal()
            || self.lifecycle == LifecycleState::ForceDisabled
            || !scene.is_editor()
            || (!enabled && !self.config.can_disable_in_editor)
            || self.enabled_by_user == enabled
        {
            log::debug!(
                "fairing `{}` {}: ignoring enable={enabled} in {} state",
                self.config.name,
                self.id,
                self.lifecycle.as_str()
            );
            return DirtyRequest::NONE;
        }
        self.enabled_by_user = enabled;
        DirtyRequest::STATUS.union(DirtyRequest::GUI)
    }

    // -- Tick phases --

    /// Consumes the mailbox. Returns `None` if it was empty.
    pub(crate) fn consume_update(&mut self) -> Option<DirtyRequest> {
        let update = self.mailbox.take()?;
        if self.lifecycle.is_terminal() {
            return Some(DirtyRequest::NONE);
        }
        let changed = update.apply_to(&mut self.sections);
        if let Some(r) = update.top_radius {
            self.top_diameter = 2.0 * r.max(0.0);
        }
        if let Some(r) = update.bottom_radius {
            self.bottom_diameter = 2.0 * r.max(0.0);
        }
        self.enabled_externally = update.enabled.unwrap_or(true);
        Some(DirtyRequest {
            status: true,
            rebuild: changed,
            gui: false,
        })
    }

    /// Re-resolves the lifecycle against the part graph.
    pub(crate) fn resolve_status<P, G>(
        &mut self,
        parts: &P,
        geometry: &mut G,
        scene: Scene,
    ) -> Effects
    where
        P: PartTree + ?Sized,
        G: GeometryBuilder + ?Sized,
    {
        let mut effects = Effects::default();
        if self.lifecycle.is_terminal() {
            return effects;
        }

        let observation = self.watcher.observe(parts);
        let mut detached_from = None;
        match (observation.trigger(), self.last_peer) {
            (Some(trigger), previous) if previous != Some(trigger.peer) => {
                log::debug!(
                    "fairing `{}` {}: trigger peer {:?} at {} (node {:?}, {:?})",
                    self.config.name,
                    self.id,
                    trigger.peer,
                    trigger.snap_y,
                    self.watcher.node().unwrap_or("<none>"),
                    self.watcher.mode(),
                );
                self.last_peer = Some(trigger.peer);
                if self.config.snap_to_node {
                    if let Some(lowest) = self.sections.first_mut() {
                        lowest.bottom_y = trigger.snap_y;
                    }
                }
                effects.request.rebuild = true;
            }
            (None, Some(previous)) => {
                log::debug!(
                    "fairing `{}` {}: detached from {previous:?}",
                    self.config.name,
                    self.id
                );
                detached_from = Some(previous);
                self.last_peer = None;
                self.restored_built = false;
            }
            _ => {}
        }

        if !self.enabled_externally {
            self.teardown(geometry);
            self.set_state(LifecycleState::ForceDisabled, &mut effects);
            return effects;
        }

        if detached_from.is_some()
            && self.lifecycle == LifecycleState::Built
            && self.config.auto_jettison
            && scene.is_flight()
        {
            self.jettison_onto(detached_from, geometry, &mut effects);
            return effects;
        }

        let present = match observation {
            Observation::Unwatched | Observation::Attached(_) => true,
            Observation::NodeMissing => false,
            Observation::Vacant => self.restored_built,
        };
        if self.enabled_by_user && present {
            if self.lifecycle != LifecycleState::Built {
                self.set_state(LifecycleState::Built, &mut effects);
                effects.request.rebuild = true;
            }
        } else {
            self.teardown(geometry);
            self.set_state(LifecycleState::Dormant, &mut effects);
        }
        effects
    }

    /// Destroys the current mesh and builds a new one from every section.
    ///
    /// Returns `None` without touching geometry unless the controller is
    /// built and has at least one section.
    pub(crate) fn rebuild<G: GeometryBuilder + ?Sized>(
        &mut self,
        geometry: &mut G,
        scene: Scene,
    ) -> Option<BuildReport> {
        if self.lifecycle != LifecycleState::Built || self.sections.is_empty() {
            return None;
        }
        if scene.is_editor() && self.config.can_adjust {
            self.apply_target_diameters();
        }
        self.teardown(geometry);

        let opacity = self.opacity(scene);
        let request = BuildRequest {
            controller: self.id,
            sections: &self.sections,
            opacity,
            texture_set: &self.config.texture_set,
        };
        self.mesh = match geometry.build(&request) {
            Ok(mesh) => Some(mesh),
            Err(err) => {
                log::warn!(
                    "fairing `{}` {}: build failed: {err}",
                    self.config.name,
                    self.id
                );
                None
            }
        };
        Some(BuildReport {
            sections: self.sections.len(),
            opacity,
            mesh: self.mesh,
        })
    }

    /// Recomputes the exposed controls.
    pub(crate) fn refresh_gui(&mut self, scene: Scene) {
        self.gui = GuiState::resolve(scene, self.lifecycle, &self.config, &self.sections);
    }

    /// Jettisons a built fairing in flight onto the remembered peer.
    ///
    /// A no-op in any other state or scene.
    pub(crate) fn jettison<G: GeometryBuilder + ?Sized>(
        &mut self,
        geometry: &mut G,
        scene: Scene,
    ) -> Effects {
        let mut effects = Effects::default();
        if self.lifecycle != LifecycleState::Built || !scene.is_flight() {
            log::debug!(
                "fairing `{}` {}: jettison ignored in {} state ({})",
                self.config.name,
                self.id,
                self.lifecycle.as_str(),
                scene.as_str()
            );
            return effects;
        }
        self.jettison_onto(self.last_peer, geometry, &mut effects);
        effects
    }

    // -- Persistence --

    /// Captures the controller's persistent state.
    #[must_use]
    pub fn save(&self) -> SavedFairing {
        SavedFairing {
            sections: persist::encode_sections(&self.sections),
            built: self.lifecycle == LifecycleState::Built,
            enabled_by_user: self.enabled_by_user,
            jettisoned: self.lifecycle.is_terminal(),
            top_diameter: self.top_diameter,
            bottom_diameter: self.bottom_diameter,
            transparent_in_editor: self.transparent_in_editor,
        }
    }

    /// Loads persisted state into an uninitialized controller.
    ///
    /// Malformed or mismatched section data is logged and the configured
    /// sections are kept; the remaining flags are still restored.
    pub(crate) fn restore(&mut self, saved: &SavedFairing) -> DirtyRequest {
        if self.lifecycle != LifecycleState::Uninitialized {
            log::warn!(
                "fairing `{}` {}: restore ignored after initialization",
                self.config.name,
                self.id
            );
            return DirtyRequest::NONE;
        }
        let loaded = persist::parse_sections(&saved.sections)
            .and_then(|shapes| persist::apply_sections(&mut self.sections, &shapes));
        if let Err(err) = loaded {
            log::warn!(
                "fairing `{}` {}: {err}; using configured sections",
                self.config.name,
                self.id
            );
        }
        self.enabled_by_user = saved.enabled_by_user;
        self.restored_built = saved.built;
        self.top_diameter = saved.top_diameter.max(0.0);
        self.bottom_diameter = saved.bottom_diameter.max(0.0);
        self.transparent_in_editor = saved.transparent_in_editor;
        if saved.jettisoned {
            self.enabled_by_user = false;
            self.lifecycle = LifecycleState::Jettisoned;
        }
        DirtyRequest::STATUS.union(DirtyRequest::GUI)
    }

    // -- Internals --

    fn set_state(&mut self, to: LifecycleState, effects: &mut Effects) {
        if self.lifecycle == to {
            return;
        }
        log::debug!(
            "fairing `{}` {}: {} -> {}",
            self.config.name,
            self.id,
            self.lifecycle.as_str(),
            to.as_str()
        );
        let from = effects.transition.map_or(self.lifecycle, |t| t.from);
        effects.transition = (from != to).then_some(Transition { from, to });
        effects.request.gui = true;
        self.lifecycle = to;
    }

    fn teardown<G: GeometryBuilder + ?Sized>(&mut self, geometry: &mut G) {
        if let Some(mesh) = self.mesh.take() {
            geometry.destroy(mesh);
        }
    }

    fn jettison_onto<G: GeometryBuilder + ?Sized>(
        &mut self,
        peer: Option<PartRef>,
        geometry: &mut G,
        effects: &mut Effects,
    ) {
        let single_panel = self.sections.iter().all(|s| s.section_count == 1);
        let (mode, peer) = match peer {
            Some(peer) if single_panel => (JettisonMode::Reparent, Some(peer)),
            _ => (JettisonMode::Eject, None),
        };
        // Only a mesh that was actually handed over names a receiver.
        let mut receiver = None;
        if let Some(mesh) = self.mesh.take() {
            match peer {
                Some(peer) => {
                    geometry.reparent(mesh, peer);
                    receiver = Some(peer);
                }
                None => {
                    for (section, s) in self.sections.iter().enumerate() {
                        geometry.eject_panels(
                            mesh,
                            &EjectRequest {
                                section,
                                panels: s.section_count,
                                impulse: self.config.ejection_impulse,
                            },
                        );
                    }
                    geometry.destroy(mesh);
                }
            }
        }
        self.enabled_by_user = false;
        self.last_peer = None;
        self.set_state(LifecycleState::Jettisoned, effects);
        effects.jettison = Some((mode, receiver));
    }

    fn apply_target_diameters(&mut self) {
        for section in &mut self.sections {
            if section.can_adjust_top {
                section.set_top_radius(self.top_diameter / 2.0);
            }
            if section.can_adjust_bottom {
                section.set_bottom_radius(self.bottom_diameter / 2.0);
            }
        }
    }

    fn sync_targets_from_sections(&mut self) {
        if let Some(top) = self.sections.iter().rev().find(|s| s.can_adjust_top) {
            self.top_diameter = 2.0 * top.top_radius;
        }
        if let Some(bottom) = self.sections.iter().find(|s| s.can_adjust_bottom) {
            self.bottom_diameter = 2.0 * bottom.bottom_radius;
        }
    }
}
