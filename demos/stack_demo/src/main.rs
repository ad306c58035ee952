// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated launch that exercises the whole fairing pipeline.
//!
//! Builds a four-part stack (engine, adapter, upper stage, payload) in the
//! editor. The upper stage carries an interstage over the adapter and a
//! payload shroud. The shroud is resized, both fairings are saved and
//! reloaded for flight, then the vehicle stages: the engine drops away
//! (ejecting the multi-panel interstage) and the shroud is jettisoned onto
//! the payload. Every tick is traced to a
//! [`PrettyPrintSink`] on stdout and a [`JournalSink`], which is exported to
//! `fairings.json` at the end.
//!
//! Set `RUST_LOG=debug` to see the controllers' own diagnostic lines.

use std::fs::File;
use std::io::BufWriter;

use fairing_core::attach::PartRef;
use fairing_core::config::FairingConfig;
use fairing_core::id::ControllerId;
use fairing_core::scene::Scene;
use fairing_core::section::{FairingSection, SectionGeometry};
use fairing_core::slot::FairingSlot;
use fairing_core::store::FairingStore;
use fairing_core::trace::{
    BuildEvent, JettisonEvent, PhaseBeginEvent, PhaseEndEvent, TickEvent, TickSummary, TraceSink,
    Tracer, TransitionEvent,
};
use fairing_core::update::FairingUpdateData;
use fairing_debug::journal::{JournalSink, export_json};
use fairing_debug::pretty::PrettyPrintSink;
use fairing_harness::{RecordingGeometry, SimulatedVessel};

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    journal: &'a mut JournalSink,
}

impl TraceSink for Tee<'_> {
    fn on_tick(&mut self, e: &TickEvent) {
        self.pretty.on_tick(e);
        self.journal.on_tick(e);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.pretty.on_phase_begin(e);
        self.journal.on_phase_begin(e);
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.pretty.on_phase_end(e);
        self.journal.on_phase_end(e);
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.pretty.on_transition(e);
        self.journal.on_transition(e);
    }

    fn on_build(&mut self, e: &BuildEvent) {
        self.pretty.on_build(e);
        self.journal.on_build(e);
    }

    fn on_jettison(&mut self, e: &JettisonEvent) {
        self.pretty.on_jettison(e);
        self.journal.on_jettison(e);
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        self.pretty.on_tick_summary(s);
        self.journal.on_tick_summary(s);
    }
}

/// The simulated vehicle and the fairing store of its upper stage.
struct Launch {
    vessel: SimulatedVessel,
    geometry: RecordingGeometry,
    upper: PartRef,
    store: FairingStore,
}

impl Launch {
    fn tick(&mut self, pretty: &mut PrettyPrintSink, journal: &mut JournalSink) {
        let mut tee = Tee { pretty, journal };
        let mut tracer = Tracer::new(&mut tee);
        let view = self.vessel.view(self.upper);
        self.store.tick_traced(&view, &mut self.geometry, &mut tracer);
    }

    /// Inserts both fairings into a fresh store for `scene`.
    fn reset(&mut self, scene: Scene) -> (ControllerId, ControllerId) {
        self.store = FairingStore::new(scene);
        let interstage = self.store.insert(interstage_config());
        let nose = self.store.insert(payload_config());
        (interstage, nose)
    }
}

/// Covers the adapter below the upper stage; spawns once an engine hangs
/// under the adapter.
fn interstage_config() -> FairingConfig {
    FairingConfig::interstage("bottom").with_section(
        FairingSection::new(SectionGeometry::new(0.0, -1.0, 1.25, 1.25))
            .with_adjustable(false, true)
            .with_section_count(3),
    )
}

/// A cylinder and an adjustable nose cone over the payload.
fn payload_config() -> FairingConfig {
    FairingConfig::payload("top")
        .with_name("nose")
        .with_slot(FairingSlot::Nose)
        .with_section(FairingSection::new(SectionGeometry::cylinder(3.0, 6.0, 1.25)))
        .with_section(
            FairingSection::new(SectionGeometry::new(7.5, 6.0, 0.25, 1.25))
                .with_adjustable(true, false),
        )
}

/// Engine, adapter, upper stage and payload, bottom to top.
fn build_vessel() -> (SimulatedVessel, [PartRef; 4]) {
    let mut vessel = SimulatedVessel::new();
    let engine = vessel.add_part(-3.0);
    let adapter = vessel.add_part(-1.0);
    let upper = vessel.add_part(0.0);
    let payload = vessel.add_part(3.0);
    vessel.add_node(engine, "top", 2.0);
    vessel.add_node(adapter, "bottom", 0.0).add_node(adapter, "top", 1.0);
    vessel.add_node(upper, "bottom", 0.0).add_node(upper, "top", 3.0);
    vessel.add_node(payload, "bottom", 0.0);
    vessel.couple(engine, "top", adapter, "bottom");
    vessel.couple(adapter, "top", upper, "bottom");
    vessel.couple(upper, "top", payload, "bottom");
    (vessel, [engine, adapter, upper, payload])
}

fn main() {
    env_logger::init();

    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut journal = JournalSink::new();

    // -- editor ------------------------------------------------------------
    println!("== editor ==");
    let (vessel, [engine, _adapter, upper, payload]) = build_vessel();
    let mut launch = Launch {
        vessel,
        geometry: RecordingGeometry::new(),
        upper,
        store: FairingStore::new(Scene::Editor),
    };
    let (interstage, _) = launch.reset(Scene::Editor);
    launch.tick(&mut pretty, &mut journal);

    // A collaborator narrows the nose through its slot while the user makes
    // the shroud see-through. One rebuild covers both.
    launch.store.publish_to_slot(
        FairingSlot::Nose,
        FairingUpdateData::default().with_top_radius(0.5),
    );
    let Some(nose) = launch.store.slot(FairingSlot::Nose) else {
        log::error!("nose slot is unbound");
        return;
    };
    launch.store.set_transparent(nose, true);
    launch.tick(&mut pretty, &mut journal);

    // The user drags the top diameter slider.
    launch.store.set_target_diameters(nose, Some(0.6), None);
    launch.tick(&mut pretty, &mut journal);

    let saved_nose = launch.store.save(nose);
    let saved_interstage = launch.store.save(interstage);
    println!("saved nose sections: {}", saved_nose.sections);

    // -- flight ------------------------------------------------------------
    println!("== flight ==");
    let (interstage, nose) = launch.reset(Scene::Flight);
    launch.store.restore(interstage, &saved_interstage);
    launch.store.restore(nose, &saved_nose);
    launch.tick(&mut pretty, &mut journal);

    // Staging: the spent engine drops away. The interstage is multi-panel,
    // so its panels are ejected.
    println!("== staging ==");
    launch.vessel.decouple(engine, "top");
    launch.store.vessel_modified();
    launch.tick(&mut pretty, &mut journal);

    // Fairing separation: the shroud is left behind on the payload.
    println!("== jettison ==");
    {
        let mut tee = Tee {
            pretty: &mut pretty,
            journal: &mut journal,
        };
        let mut tracer = Tracer::new(&mut tee);
        launch
            .store
            .jettison_traced(nose, &mut launch.geometry, &mut tracer);
    }
    launch.tick(&mut pretty, &mut journal);

    println!(
        "builds={} destroyed={} ejected={} reparented={} live={} (payload {payload:?})",
        launch.geometry.builds.len(),
        launch.geometry.destroyed.len(),
        launch.geometry.ejected.len(),
        launch.geometry.reparented.len(),
        launch.geometry.live().len(),
    );

    // -- export journal ----------------------------------------------------
    let path = "fairings.json";
    let file = File::create(path).expect("failed to create fairings.json");
    let mut writer = BufWriter::new(file);
    export_json(journal.entries(), &mut writer).expect("failed to write fairing journal");

    println!("Wrote {path} ({} events)", journal.entries().len());
}
