// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event journal with JSON export.
//!
//! [`JournalSink`] implements [`TraceSink`] and keeps a copy of every event
//! it receives. [`export_json`] writes a slice of [`JournalEntry`] values as a
//! pretty-printed JSON array, one object per event, for diffing runs or
//! attaching to bug reports.

use std::io::{self, Write};

use serde_json::{Value, json};

use fairing_core::trace::{
    BuildEvent, JettisonEvent, PhaseBeginEvent, PhaseEndEvent, TickEvent, TickSummary, TraceSink,
    TransitionEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum JournalEntry {
    /// See [`TraceSink::on_tick`].
    Tick(TickEvent),
    /// See [`TraceSink::on_phase_begin`].
    PhaseBegin(PhaseBeginEvent),
    /// See [`TraceSink::on_phase_end`].
    PhaseEnd(PhaseEndEvent),
    /// See [`TraceSink::on_transition`].
    Transition(TransitionEvent),
    /// See [`TraceSink::on_build`].
    Build(BuildEvent),
    /// See [`TraceSink::on_jettison`].
    Jettison(JettisonEvent),
    /// See [`TraceSink::on_tick_summary`].
    Summary(TickSummary),
}

/// A [`TraceSink`] that records every event in order.
#[derive(Debug, Default)]
pub struct JournalSink {
    entries: Vec<JournalEntry>,
}

impl JournalSink {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded entries.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Consumes the journal and returns the recorded entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<JournalEntry> {
        self.entries
    }

    /// Discards all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TraceSink for JournalSink {
    fn on_tick(&mut self, e: &TickEvent) {
        self.entries.push(JournalEntry::Tick(*e));
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.entries.push(JournalEntry::PhaseBegin(*e));
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.entries.push(JournalEntry::PhaseEnd(*e));
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.entries.push(JournalEntry::Transition(*e));
    }

    fn on_build(&mut self, e: &BuildEvent) {
        self.entries.push(JournalEntry::Build(*e));
    }

    fn on_jettison(&mut self, e: &JettisonEvent) {
        self.entries.push(JournalEntry::Jettison(*e));
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        self.entries.push(JournalEntry::Summary(*s));
    }
}

/// Writes `entries` to `writer` as a JSON array.
pub fn export_json(entries: &[JournalEntry], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = entries.iter().map(entry_to_json).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn entry_to_json(entry: &JournalEntry) -> Value {
    match entry {
        JournalEntry::Tick(e) => json!({
            "event": "tick",
            "tick": e.tick_index,
            "scene": e.scene.as_str(),
            "controllers": e.controllers,
        }),
        JournalEntry::PhaseBegin(e) => json!({
            "event": "phase_begin",
            "tick": e.tick_index,
            "phase": e.phase.as_str(),
        }),
        JournalEntry::PhaseEnd(e) => json!({
            "event": "phase_end",
            "tick": e.tick_index,
            "phase": e.phase.as_str(),
            "processed": e.processed,
        }),
        JournalEntry::Transition(e) => json!({
            "event": "transition",
            "tick": e.tick_index,
            "controller": e.controller.0,
            "from": e.from.as_str(),
            "to": e.to.as_str(),
        }),
        JournalEntry::Build(e) => json!({
            "event": "build",
            "tick": e.tick_index,
            "controller": e.controller.0,
            "sections": e.sections,
            "opacity": e.opacity,
            "mesh": e.mesh.map(|m| m.0),
        }),
        JournalEntry::Jettison(e) => json!({
            "event": "jettison",
            "tick": e.tick_index,
            "controller": e.controller.0,
            "mode": format!("{:?}", e.mode),
            "peer": e.peer.map(|p| p.0),
        }),
        JournalEntry::Summary(s) => json!({
            "event": "summary",
            "tick": s.tick_index,
            "updated": s.updated,
            "status_checked": s.status_checked,
            "rebuilt": s.rebuilt,
            "gui_refreshed": s.gui_refreshed,
            "transitions": s.transitions,
            "jettisoned": s.jettisoned,
        }),
    }
}
