// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle, attachment tracking and coalesced rebuild scheduling for
//! node-triggered procedural fairings.
//!
//! A *fairing* is a shroud built from one or more ring-profile sections and
//! attached to a structural node of a modular vehicle. `fairing_core` owns
//! everything about a fairing except the mesh itself: when it should exist,
//! how big it is, when it must be rebuilt, and how it leaves the vehicle.
//! Mesh generation and the vehicle's part graph are host collaborators
//! reached through the [`GeometryBuilder`](geometry::GeometryBuilder) and
//! [`PartTree`](attach::PartTree) traits.
//!
//! # Architecture
//!
//! Every mutation source only marks dirty channels or fills a mailbox. The
//! host drives one [`FairingStore::tick`](store::FairingStore::tick) per frame,
//! which drains the work in a fixed order:
//!
//! ```text
//!   GUI callbacks ─┐
//!   publish() ─────┼──► mailboxes + dirty channels
//!   vessel events ─┘              │
//!                                 ▼
//!   FairingStore::tick():  external updates ─► STATUS ─► REBUILD ─► GUI
//!                                                │           │
//!                                           PartTree   GeometryBuilder
//!                                                 │
//!                                                 ▼
//!                                           TickChanges
//! ```
//!
//! **[`section`]**: One independently configurable shell segment and its
//! profile in the (radius, axial) plane.
//!
//! **[`update`]**: The [`FairingUpdateData`](update::FairingUpdateData)
//! payload and the single-slot mailbox collaborators publish into.
//!
//! **[`attach`]**: The part-graph contract and the
//! [`AttachmentWatcher`](attach::AttachmentWatcher) that turns node queries
//! into spawn and detachment decisions.
//!
//! **[`dirty`]** / **[`scheduler`]**: Dirty channels via `understory_dirty`
//! and the per-tick drain order.
//!
//! **[`controller`]**: The per-fairing lifecycle state machine, rebuild and
//! jettison algorithms, persistence and measurements.
//!
//! **[`store`]**: Owns the controllers of one part, the scheduler and the
//! slot table, and exposes the external protocol.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) instrumentation with a
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attach;
pub mod config;
pub mod controller;
pub mod dirty;
pub mod geometry;
pub mod gui;
pub mod id;
pub mod lifecycle;
pub mod persist;
pub mod scene;
pub mod scheduler;
pub mod section;
pub mod slot;
pub mod store;
pub mod trace;
pub mod update;

#[cfg(test)]
mod testing;
