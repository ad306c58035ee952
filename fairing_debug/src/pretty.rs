// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use fairing_core::lifecycle::JettisonMode;
use fairing_core::scheduler::TickPhase;
use fairing_core::trace::{
    BuildEvent, JettisonEvent, PhaseBeginEvent, PhaseEndEvent, TickEvent, TickSummary, TraceSink,
    TransitionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    phases: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("phases", &self.phases)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            phases: false,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            phases: false,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            phases: false,
        }
    }

    /// Also prints phase begin/end lines. Off by default; they are noisy.
    #[must_use]
    pub fn with_phases(mut self, phases: bool) -> Self {
        self.phases = phases;
        self
    }

    /// Consumes the sink and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tick(&mut self, e: &TickEvent) {
        let _ = writeln!(
            self.writer,
            "[tick] #{} scene={} controllers={}",
            e.tick_index,
            e.scene.as_str(),
            e.controllers,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        if self.phases {
            let _ = writeln!(
                self.writer,
                "[phase:begin] #{} {}",
                e.tick_index,
                e.phase.as_str(),
            );
        }
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        if self.phases {
            let _ = writeln!(
                self.writer,
                "[phase:end] #{} {} processed={}",
                e.tick_index,
                e.phase.as_str(),
                e.processed,
            );
        }
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[state] #{} {} {} -> {}",
            e.tick_index,
            e.controller,
            e.from.as_str(),
            e.to.as_str(),
        );
    }

    fn on_build(&mut self, e: &BuildEvent) {
        match e.mesh {
            Some(mesh) => {
                let _ = writeln!(
                    self.writer,
                    "[build] #{} {} sections={} opacity={:.2} mesh={}",
                    e.tick_index, e.controller, e.sections, e.opacity, mesh.0,
                );
            }
            None => {
                let _ = writeln!(
                    self.writer,
                    "[build] #{} {} sections={} FAILED",
                    e.tick_index, e.controller, e.sections,
                );
            }
        }
    }

    fn on_jettison(&mut self, e: &JettisonEvent) {
        let how = match (e.mode, e.peer) {
            (JettisonMode::Reparent, Some(peer)) => format!("reparent onto part {}", peer.0),
            (JettisonMode::Reparent, None) => String::from("reparent"),
            (JettisonMode::Eject, _) => String::from("eject"),
        };
        let _ = writeln!(
            self.writer,
            "[jettison] #{} {} {how}",
            e.tick_index, e.controller,
        );
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        let _ = write!(self.writer, "[summary] #{}", s.tick_index);
        for phase in TickPhase::ALL {
            let _ = write!(self.writer, " {}={}", phase.as_str(), s.processed(phase));
        }
        let _ = writeln!(
            self.writer,
            " transitions={} jettisoned={}",
            s.transitions, s.jettisoned,
        );
    }
}
