// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable collaborator doubles for fairing demos and integration tests.
//!
//! - [`SimulatedVessel`]: a small part graph with named, coupleable nodes.
//!   [`SimulatedVessel::view`] gives any part a [`PartTree`] in its own
//!   local frame.
//! - [`RecordingGeometry`]: a [`GeometryBuilder`] that hands out sequential
//!   mesh handles and remembers every call.
//!
//! [`PartTree`]: fairing_core::attach::PartTree
//! [`GeometryBuilder`]: fairing_core::geometry::GeometryBuilder

#![no_std]

extern crate alloc;

mod geometry;
mod vessel;

pub use geometry::{RecordedBuild, RecordingGeometry};
pub use vessel::{SimulatedVessel, VesselView};
