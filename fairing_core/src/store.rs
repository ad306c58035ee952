// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fairings of one part and their tick loop.
//!
//! [`FairingStore`] owns every [`FairingController`] on a part, the
//! [`RebuildScheduler`] that coalesces their dirty requests, and the
//! [`SlotTable`] collaborators route updates through. Everything a caller
//! does between ticks only fills mailboxes or marks channels; the host then
//! calls [`tick`](FairingStore::tick) once, late in its frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut store = FairingStore::new(Scene::Editor);
//! let body = store.insert(FairingConfig::payload("bottom").with_section(section));
//!
//! // Any number of mutations during the frame...
//! store.publish(body, FairingUpdateData::default().with_top_radius(1.5));
//! store.request_rebuild(body);
//!
//! // ...resolve into at most one rebuild per controller.
//! let changes = store.tick(&parts, &mut geometry);
//! ```

use alloc::vec::Vec;

use kurbo::Rect;

use crate::attach::PartTree;
use crate::config::FairingConfig;
use crate::controller::{Effects, FairingController};
use crate::dirty;
use crate::geometry::GeometryBuilder;
use crate::id::ControllerId;
use crate::lifecycle::{JettisonMode, Transition};
use crate::persist::SavedFairing;
use crate::scene::Scene;
use crate::scheduler::{DirtyRequest, RebuildScheduler, TickChanges, TickPhase};
use crate::section::{FairingExtents, FairingSection};
use crate::slot::{FairingSlot, SlotTable};
use crate::trace::{
    BuildEvent, JettisonEvent, PhaseBeginEvent, PhaseEndEvent, TickEvent, TickSummary, Tracer,
    TransitionEvent,
};
use crate::update::FairingUpdateData;

/// Owns the controllers of one part and drives their ticks.
///
/// Controller ids are dense and never reused. Passing an id that this store
/// did not hand out panics.
#[derive(Debug)]
pub struct FairingStore {
    scene: Scene,
    controllers: Vec<FairingController>,
    scheduler: RebuildScheduler,
    slots: SlotTable,

    // -- Out-of-tick results, reported by the next tick --
    pending_transitions: Vec<(ControllerId, Transition)>,
    pending_jettisoned: Vec<(ControllerId, JettisonMode)>,
}

impl FairingStore {
    /// Creates an empty store for `scene`.
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            controllers: Vec::new(),
            scheduler: RebuildScheduler::new(),
            slots: SlotTable::new(),
            pending_transitions: Vec::new(),
            pending_jettisoned: Vec::new(),
        }
    }

    // -- Setup --

    /// Adds a controller and schedules its first status check.
    ///
    /// If `config` claims a slot that is already bound, the new controller
    /// takes it over.
    pub fn insert(&mut self, config: FairingConfig) -> ControllerId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a part never carries 2^32 fairings"
        )]
        let id = ControllerId(self.controllers.len() as u32);
        if let Some(slot) = config.slot {
            if let Some(previous) = self.slots.assign(slot, id) {
                log::warn!("fairing slot {slot:?} rebound from {previous} to {id}");
            }
        }
        self.controllers.push(FairingController::new(id, config));
        self.scheduler
            .mark(id, DirtyRequest::STATUS.union(DirtyRequest::GUI));
        id
    }

    /// Loads persisted state into a controller that has not ticked yet.
    pub fn restore(&mut self, id: ControllerId, saved: &SavedFairing) {
        let request = self.controller_mut(id).restore(saved);
        self.scheduler.mark(id, request);
    }

    /// Switches host context. Every controller re-resolves and rebuilds.
    pub fn set_scene(&mut self, scene: Scene) {
        if self.scene == scene {
            return;
        }
        log::debug!(
            "fairings: scene {} -> {}",
            self.scene.as_str(),
            scene.as_str()
        );
        self.scene = scene;
        let all = DirtyRequest::STATUS
            .union(DirtyRequest::REBUILD)
            .union(DirtyRequest::GUI);
        for c in &self.controllers {
            self.scheduler.mark(c.id(), all);
        }
    }

    // -- Queries --

    /// Returns the current host context.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Returns the number of controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if the store has no controllers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Returns a controller.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this store.
    #[must_use]
    pub fn controller(&self, id: ControllerId) -> &FairingController {
        self.validate(id);
        &self.controllers[id.index()]
    }

    /// Iterates over all controllers in id order.
    pub fn controllers(&self) -> impl Iterator<Item = &FairingController> + '_ {
        self.controllers.iter()
    }

    /// Returns the controller bound to `slot`.
    #[must_use]
    pub fn slot(&self, slot: FairingSlot) -> Option<ControllerId> {
        self.slots.get(slot)
    }

    /// Returns a controller's current extents.
    #[must_use]
    pub fn extents(&self, id: ControllerId) -> Option<FairingExtents> {
        self.controller(id).extents()
    }

    /// Returns a controller's profile bounds in the (radius, axial) plane.
    #[must_use]
    pub fn profile_bounds(&self, id: ControllerId) -> Option<Rect> {
        self.controller(id).profile_bounds()
    }

    /// Captures a controller's persistent state.
    #[must_use]
    pub fn save(&self, id: ControllerId) -> SavedFairing {
        self.controller(id).save()
    }

    // -- External protocol --

    /// Publishes an update into a controller's mailbox.
    ///
    /// A second publish before the next tick replaces the first.
    pub fn publish(&mut self, id: ControllerId, update: FairingUpdateData) {
        if self.controller_mut(id).publish(update) {
            log::debug!("fairing {id}: unconsumed update overwritten");
        }
    }

    /// Publishes an update to whichever controller holds `slot`.
    ///
    /// Returns `false` if no controller holds the slot.
    pub fn publish_to_slot(&mut self, slot: FairingSlot, update: FairingUpdateData) -> bool {
        match self.slots.get(slot) {
            Some(id) => {
                self.publish(id, update);
                true
            }
            None => {
                log::debug!("fairing slot {slot:?} is unbound; update dropped");
                false
            }
        }
    }

    /// Notifies the store that the vehicle's structure changed.
    pub fn vessel_modified(&mut self) {
        for c in &self.controllers {
            self.scheduler.mark(c.id(), DirtyRequest::STATUS);
        }
    }

    // -- GUI callbacks --

    /// Sets the user-chosen diameters. Editor only.
    pub fn set_target_diameters(&mut self, id: ControllerId, top: Option<f64>, bottom: Option<f64>) {
        if !self.scene.is_editor() {
            log::debug!("fairing {id}: diameter change ignored in flight");
            return;
        }
        if self.controller_mut(id).set_target_diameters(top, bottom) {
            self.scheduler.mark(id, DirtyRequest::REBUILD);
        }
    }

    /// Edits a controller's sections in place. Editor only.
    pub fn edit_sections(&mut self, id: ControllerId, edit: impl FnOnce(&mut [FairingSection])) {
        if !self.scene.is_editor() {
            self.validate(id);
            log::debug!("fairing {id}: section edit ignored in flight");
            return;
        }
        if self.controller_mut(id).edit_sections(edit) {
            self.scheduler.mark(id, DirtyRequest::REBUILD);
        }
    }

    /// Sets the editor transparency toggle.
    ///
    /// Outside the editor the flag is stored for later but the mesh is left
    /// alone, since flight always renders opaque.
    pub fn set_transparent(&mut self, id: ControllerId, transparent: bool) {
        if self.controller_mut(id).set_transparent(transparent) {
            let request = if self.scene.is_editor() {
                DirtyRequest::REBUILD.union(DirtyRequest::GUI)
            } else {
                DirtyRequest::GUI
            };
            self.scheduler.mark(id, request);
        }
    }

    /// Requests a rebuild on the next tick.
    pub fn request_rebuild(&mut self, id: ControllerId) {
        self.validate(id);
        self.scheduler.mark(id, DirtyRequest::REBUILD);
    }

    /// Requests a status check on the next tick.
    pub fn request_status(&mut self, id: ControllerId) {
        self.validate(id);
        self.scheduler.mark(id, DirtyRequest::STATUS);
    }

    /// Requests a GUI refresh on the next tick.
    pub fn request_gui_refresh(&mut self, id: ControllerId) {
        self.validate(id);
        self.scheduler.mark(id, DirtyRequest::GUI);
    }

    /// Flips the user's enable toggle. Editor only; a no-op while
    /// force-disabled or jettisoned.
    pub fn toggle(&mut self, id: ControllerId) {
        let enabled = !self.controller(id).enabled_by_user();
        self.set_enabled(id, enabled);
    }

    /// Sets the user's enable toggle. Editor only; a no-op while
    /// force-disabled or jettisoned, or when already in that state.
    pub fn set_enabled(&mut self, id: ControllerId, enabled: bool) {
        let scene = self.scene;
        let request = self.controller_mut(id).set_enabled(enabled, scene);
        self.scheduler.mark(id, request);
    }

    /// Jettisons a built fairing immediately. Flight only.
    ///
    /// Returns `true` if the fairing left the vehicle. Jettisoning an
    /// already-jettisoned fairing is a no-op.
    pub fn jettison<G>(&mut self, id: ControllerId, geometry: &mut G) -> bool
    where
        G: GeometryBuilder + ?Sized,
    {
        self.jettison_traced(id, geometry, &mut Tracer::none())
    }

    /// Like [`jettison`](Self::jettison), reporting to `tracer`.
    pub fn jettison_traced<G>(
        &mut self,
        id: ControllerId,
        geometry: &mut G,
        tracer: &mut Tracer<'_>,
    ) -> bool
    where
        G: GeometryBuilder + ?Sized,
    {
        let scene = self.scene;
        let effects = self.controller_mut(id).jettison(geometry, scene);
        let jettisoned = effects.jettison.is_some();
        record(
            &mut self.scheduler,
            id,
            effects,
            &mut self.pending_transitions,
            &mut self.pending_jettisoned,
            tracer,
        );
        jettisoned
    }

    // -- Tick --

    /// Runs one tick: consume mailboxes, then resolve status, rebuild and
    /// refresh GUI for every marked controller, in that order.
    pub fn tick<P, G>(&mut self, parts: &P, geometry: &mut G) -> TickChanges
    where
        P: PartTree + ?Sized,
        G: GeometryBuilder + ?Sized,
    {
        let mut changes = TickChanges::default();
        self.tick_into(parts, geometry, &mut changes, &mut Tracer::none());
        changes
    }

    /// Like [`tick`](Self::tick), reporting to `tracer`.
    pub fn tick_traced<P, G>(
        &mut self,
        parts: &P,
        geometry: &mut G,
        tracer: &mut Tracer<'_>,
    ) -> TickChanges
    where
        P: PartTree + ?Sized,
        G: GeometryBuilder + ?Sized,
    {
        let mut changes = TickChanges::default();
        self.tick_into(parts, geometry, &mut changes, tracer);
        changes
    }

    /// Like [`tick_traced`](Self::tick_traced), but reuses a caller-provided
    /// buffer.
    pub fn tick_into<P, G>(
        &mut self,
        parts: &P,
        geometry: &mut G,
        changes: &mut TickChanges,
        tracer: &mut Tracer<'_>,
    ) where
        P: PartTree + ?Sized,
        G: GeometryBuilder + ?Sized,
    {
        changes.clear();
        let scene = self.scene;
        let tick_index = self.scheduler.begin_tick();
        tracer.tick(&TickEvent {
            tick_index,
            scene,
            controllers: self.controllers.len(),
        });

        // Report out-of-tick actions first.
        core::mem::swap(&mut self.pending_transitions, &mut changes.transitions);
        core::mem::swap(&mut self.pending_jettisoned, &mut changes.jettisoned);

        // Phase 1: external updates.
        begin(tracer, tick_index, TickPhase::ExternalUpdate);
        for c in &mut self.controllers {
            if let Some(request) = c.consume_update() {
                changes.updated.push(c.id());
                self.scheduler.mark(c.id(), request);
            }
        }
        end(tracer, tick_index, TickPhase::ExternalUpdate, changes.updated.len());

        // Phase 2: status.
        begin(tracer, tick_index, TickPhase::StatusCheck);
        for id in self.scheduler.drain(dirty::STATUS) {
            let effects = self.controllers[id.index()].resolve_status(parts, geometry, scene);
            changes.status_checked.push(id);
            record(
                &mut self.scheduler,
                id,
                effects,
                &mut changes.transitions,
                &mut changes.jettisoned,
                tracer,
            );
        }
        end(tracer, tick_index, TickPhase::StatusCheck, changes.status_checked.len());

        // Phase 3: rebuild.
        begin(tracer, tick_index, TickPhase::Rebuild);
        for id in self.scheduler.drain(dirty::REBUILD) {
            let Some(report) = self.controllers[id.index()].rebuild(geometry, scene) else {
                continue;
            };
            changes.rebuilt.push(id);
            self.scheduler.mark(id, DirtyRequest::GUI);
            tracer.build(&BuildEvent {
                tick_index,
                controller: id,
                sections: report.sections,
                opacity: report.opacity,
                mesh: report.mesh,
            });
        }
        end(tracer, tick_index, TickPhase::Rebuild, changes.rebuilt.len());

        // Phase 4: GUI.
        begin(tracer, tick_index, TickPhase::GuiRefresh);
        for id in self.scheduler.drain(dirty::GUI) {
            self.controllers[id.index()].refresh_gui(scene);
            changes.gui_refreshed.push(id);
        }
        end(tracer, tick_index, TickPhase::GuiRefresh, changes.gui_refreshed.len());

        tracer.tick_summary(&TickSummary::new(tick_index, changes));
    }

    // -- Internals --

    fn validate(&self, id: ControllerId) {
        assert!(
            id.index() < self.controllers.len(),
            "unknown fairing controller {id}"
        );
    }

    fn controller_mut(&mut self, id: ControllerId) -> &mut FairingController {
        self.validate(id);
        &mut self.controllers[id.index()]
    }
}

/// Marks requested channels and reports transitions and jettisons.
fn record(
    scheduler: &mut RebuildScheduler,
    id: ControllerId,
    effects: Effects,
    transitions: &mut Vec<(ControllerId, Transition)>,
    jettisoned: &mut Vec<(ControllerId, JettisonMode)>,
    tracer: &mut Tracer<'_>,
) {
    let tick_index = scheduler.tick_index();
    scheduler.mark(id, effects.request);
    if let Some(t) = effects.transition {
        transitions.push((id, t));
        tracer.transition(&TransitionEvent {
            tick_index,
            controller: id,
            from: t.from,
            to: t.to,
        });
    }
    if let Some((mode, peer)) = effects.jettison {
        log::debug!("fairing {id}: jettisoned ({mode:?})");
        jettisoned.push((id, mode));
        tracer.jettison(&JettisonEvent {
            tick_index,
            controller: id,
            mode,
            peer,
        });
    }
}

fn begin(tracer: &mut Tracer<'_>, tick_index: u64, phase: TickPhase) {
    tracer.phase_begin(&PhaseBeginEvent { tick_index, phase });
}

fn end(tracer: &mut Tracer<'_>, tick_index: u64, phase: TickPhase, processed: usize) {
    tracer.phase_end(&PhaseEndEvent {
        tick_index,
        phase,
        processed,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attach::{AttachNode, PartRef};
    use crate::lifecycle::LifecycleState;
    use crate::section::SectionGeometry;
    use crate::testing::{FakeParts, RecordingGeometry};

    fn section() -> FairingSection {
        FairingSection::new(SectionGeometry::cylinder(0.0, 2.0, 1.25)).with_adjustable(true, false)
    }

    fn attached() -> FakeParts {
        let mut parts = FakeParts::new(PartRef(1));
        parts.set_node("bottom", AttachNode::occupied(0.0, PartRef(2)));
        parts
    }

    #[test]
    fn first_tick_builds_and_refreshes_gui() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        let changes = store.tick(&attached(), &mut g);

        assert_eq!(changes.status_checked, [id]);
        assert_eq!(changes.rebuilt, [id]);
        assert_eq!(changes.gui_refreshed, [id]);
        assert_eq!(
            changes.transitions,
            [(
                id,
                Transition {
                    from: LifecycleState::Uninitialized,
                    to: LifecycleState::Built
                }
            )]
        );
        assert!(store.controller(id).gui().top_diameter_visible);
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut store = FairingStore::new(Scene::Editor);
        store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        let changes = store.tick(&attached(), &mut g);
        assert!(changes.is_empty());
        assert_eq!(g.builds.len(), 1);
    }

    #[test]
    fn many_requests_coalesce_into_one_build() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);

        for i in 0..5 {
            store.publish(
                id,
                FairingUpdateData::default().with_top_radius(1.0 + f64::from(i)),
            );
            store.request_rebuild(id);
        }
        store.vessel_modified();
        let changes = store.tick(&attached(), &mut g);
        assert_eq!(changes.rebuilt, [id]);
        assert_eq!(g.builds.len(), 2);
        assert_eq!(store.controller(id).sections()[0].top_radius, 5.0);
    }

    #[test]
    fn slot_routing() {
        let mut store = FairingStore::new(Scene::Editor);
        let nose = store.insert(
            FairingConfig::permanent()
                .with_slot(FairingSlot::Nose)
                .with_section(section()),
        );
        assert_eq!(store.slot(FairingSlot::Nose), Some(nose));
        assert!(store.publish_to_slot(
            FairingSlot::Nose,
            FairingUpdateData::default().with_top_radius(0.5)
        ));
        assert!(!store.publish_to_slot(FairingSlot::Body, FairingUpdateData::default()));
        assert!(store.controller(nose).pending_update().is_some());
    }

    #[test]
    fn slot_rebind_takes_over() {
        let mut store = FairingStore::new(Scene::Editor);
        store.insert(FairingConfig::permanent().with_slot(FairingSlot::Body));
        let second = store.insert(FairingConfig::permanent().with_slot(FairingSlot::Body));
        assert_eq!(store.slot(FairingSlot::Body), Some(second));
    }

    #[test]
    fn gui_request_skips_status_and_rebuild() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);

        store.request_gui_refresh(id);
        let changes = store.tick(&attached(), &mut g);
        assert_eq!(changes.gui_refreshed, [id]);
        assert!(changes.status_checked.is_empty());
        assert!(changes.rebuilt.is_empty());
        assert_eq!(g.builds.len(), 1);
    }

    #[test]
    fn status_request_notices_detach() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);

        let mut detached = FakeParts::new(PartRef(1));
        detached.set_node("bottom", AttachNode::vacant(0.0));
        // Without a request the store does not look at the part graph.
        assert!(store.tick(&detached, &mut g).is_empty());
        assert_eq!(store.controller(id).lifecycle(), LifecycleState::Built);

        store.request_status(id);
        let changes = store.tick(&detached, &mut g);
        assert_eq!(changes.status_checked, [id]);
        assert!(changes.rebuilt.is_empty());
        assert_eq!(store.controller(id).lifecycle(), LifecycleState::Dormant);
    }

    #[test]
    fn diameters_ignored_in_flight() {
        let mut store = FairingStore::new(Scene::Flight);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        store.set_target_diameters(id, Some(10.0), None);
        let changes = store.tick(&attached(), &mut g);
        assert!(changes.rebuilt.is_empty());
        assert_eq!(store.controller(id).target_diameters().0, 2.5);
    }

    #[test]
    fn section_edits_ignored_in_flight() {
        let mut store = FairingStore::new(Scene::Flight);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        store.edit_sections(id, |s| s[0].top_radius = 5.0);
        let changes = store.tick(&attached(), &mut g);
        assert!(changes.rebuilt.is_empty(), "no forced rebuild in flight");
        assert_eq!(store.controller(id).sections()[0].top_radius, 1.25);
        assert_eq!(g.builds.len(), 1);
    }

    #[test]
    fn section_edits_rebuild_in_editor() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        store.edit_sections(id, |s| s[0].top_y = 3.0);
        let changes = store.tick(&attached(), &mut g);
        assert_eq!(changes.rebuilt, [id]);
        assert_eq!(g.builds[1].sections[0].top_y, 3.0);
    }

    #[test]
    fn transparency_in_flight_only_refreshes_gui() {
        let mut store = FairingStore::new(Scene::Flight);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        store.set_transparent(id, true);
        let changes = store.tick(&attached(), &mut g);
        assert!(changes.rebuilt.is_empty(), "flight renders opaque regardless");
        assert_eq!(changes.gui_refreshed, [id]);
        assert!(store.controller(id).is_transparent_in_editor());
        assert_eq!(g.builds.len(), 1);
    }

    #[test]
    fn explicit_jettison_reports_on_next_tick() {
        let mut store = FairingStore::new(Scene::Flight);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);

        assert!(store.jettison(id, &mut g));
        assert!(!store.jettison(id, &mut g));
        let changes = store.tick(&attached(), &mut g);
        assert_eq!(changes.jettisoned, [(id, JettisonMode::Reparent)]);
        assert_eq!(changes.gui_refreshed, [id]);
        assert_eq!(store.controller(id).gui(), crate::gui::GuiState::default());
    }

    #[test]
    fn scene_switch_rebuilds_at_full_opacity() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        store.set_transparent(id, true);
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);
        assert_eq!(g.builds[0].opacity, store.controller(id).config().editor_opacity);

        store.set_scene(Scene::Flight);
        store.tick(&attached(), &mut g);
        assert_eq!(g.builds.len(), 2);
        assert_eq!(g.builds[1].opacity, 1.0);
        assert!(store.controller(id).gui().jettison_visible);
    }

    #[test]
    fn toggle_round_trip_in_editor() {
        let mut store = FairingStore::new(Scene::Editor);
        let id = store.insert(FairingConfig::payload("bottom").with_section(section()));
        let mut g = RecordingGeometry::default();
        store.tick(&attached(), &mut g);

        store.toggle(id);
        store.tick(&attached(), &mut g);
        assert_eq!(store.controller(id).lifecycle(), LifecycleState::Dormant);
        assert!(g.live.is_empty());

        store.toggle(id);
        store.tick(&attached(), &mut g);
        assert_eq!(store.controller(id).lifecycle(), LifecycleState::Built);
        assert_eq!(g.live.len(), 1);
    }

    #[test]
    #[should_panic(expected = "unknown fairing controller")]
    fn unknown_id_panics() {
        let store = FairingStore::new(Scene::Editor);
        let _ = store.controller(ControllerId(3));
    }
}
