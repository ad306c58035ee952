// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON journal export for fairing diagnostics.
//!
//! This crate provides [`TraceSink`](fairing_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`journal::JournalSink`]: records events in memory, with
//!   [`journal::export_json`] to write them as a JSON array.

pub mod journal;
pub mod pretty;
