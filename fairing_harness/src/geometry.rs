// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use fairing_core::attach::PartRef;
use fairing_core::geometry::{BuildError, BuildRequest, EjectRequest, GeometryBuilder, MeshHandle};
use fairing_core::id::ControllerId;
use fairing_core::section::FairingSection;

/// One recorded [`GeometryBuilder::build`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedBuild {
    /// The requesting controller.
    pub controller: ControllerId,
    /// Every section in the request, with panel and collider settings.
    pub sections: Vec<FairingSection>,
    /// Requested opacity.
    pub opacity: f32,
    /// Requested texture set.
    pub texture_set: String,
    /// The handle returned, or `None` if the build was made to fail.
    pub mesh: Option<MeshHandle>,
}

/// A [`GeometryBuilder`] that records every call.
///
/// Handles are handed out sequentially from 1. A mesh counts as live from
/// its build until it is destroyed or handed to a peer.
#[derive(Debug, Default)]
pub struct RecordingGeometry {
    next: u64,
    fail_with: Option<BuildError>,
    /// Every build call, in order.
    pub builds: Vec<RecordedBuild>,
    /// Every destroyed mesh, in order.
    pub destroyed: Vec<MeshHandle>,
    /// Every panel ejection, in order.
    pub ejected: Vec<(MeshHandle, EjectRequest)>,
    /// Every mesh handed to a peer, in order.
    pub reparented: Vec<(MeshHandle, PartRef)>,
    live: Vec<MeshHandle>,
}

impl RecordingGeometry {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later build fail with `err`, or succeed again with `None`.
    pub fn fail_builds(&mut self, err: Option<BuildError>) {
        self.fail_with = err;
    }

    /// Returns the meshes built and not yet destroyed or reparented.
    #[must_use]
    pub fn live(&self) -> &[MeshHandle] {
        &self.live
    }

    /// Returns the number of build calls made by `controller`.
    #[must_use]
    pub fn builds_for(&self, controller: ControllerId) -> usize {
        self.builds.iter().filter(|b| b.controller == controller).count()
    }

    /// Returns the most recent build call.
    #[must_use]
    pub fn last_build(&self) -> Option<&RecordedBuild> {
        self.builds.last()
    }

    /// Forgets every recorded call. Live meshes and the handle counter are
    /// kept.
    pub fn clear_log(&mut self) {
        self.builds.clear();
        self.destroyed.clear();
        self.ejected.clear();
        self.reparented.clear();
    }
}

impl GeometryBuilder for RecordingGeometry {
    fn build(&mut self, request: &BuildRequest<'_>) -> Result<MeshHandle, BuildError> {
        let result = match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => {
                self.next += 1;
                Ok(MeshHandle(self.next))
            }
        };
        let mesh = result.as_ref().ok().copied();
        self.builds.push(RecordedBuild {
            controller: request.controller,
            sections: request.sections.to_vec(),
            opacity: request.opacity,
            texture_set: String::from(request.texture_set),
            mesh,
        });
        if let Some(mesh) = mesh {
            self.live.push(mesh);
        }
        result
    }

    fn destroy(&mut self, mesh: MeshHandle) {
        self.destroyed.push(mesh);
        self.live.retain(|m| *m != mesh);
    }

    fn eject_panels(&mut self, mesh: MeshHandle, request: &EjectRequest) {
        self.ejected.push((mesh, *request));
    }

    fn reparent(&mut self, mesh: MeshHandle, peer: PartRef) {
        self.reparented.push((mesh, peer));
        self.live.retain(|m| *m != mesh);
    }
}
