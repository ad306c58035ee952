// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-crate collaborator doubles for unit tests.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attach::{AttachNode, PartRef, PartTree};
use crate::geometry::{BuildError, BuildRequest, EjectRequest, GeometryBuilder, MeshHandle};
use crate::section::FairingSection;

/// A hand-wired part graph.
#[derive(Debug)]
pub(crate) struct FakeParts {
    this: PartRef,
    nodes: Vec<(String, AttachNode)>,
    lowest: Vec<(PartRef, AttachNode)>,
}

impl FakeParts {
    pub(crate) fn new(this: PartRef) -> Self {
        Self {
            this,
            nodes: Vec::new(),
            lowest: Vec::new(),
        }
    }

    pub(crate) fn set_node(&mut self, name: &str, node: AttachNode) {
        self.nodes.retain(|(n, _)| n != name);
        self.nodes.push((String::from(name), node));
    }

    pub(crate) fn set_lowest(&mut self, peer: PartRef, node: AttachNode) {
        self.lowest.retain(|(p, _)| *p != peer);
        self.lowest.push((peer, node));
    }
}

impl PartTree for FakeParts {
    fn this_part(&self) -> PartRef {
        self.this
    }

    fn node(&self, name: &str) -> Option<AttachNode> {
        self.nodes.iter().find(|(n, _)| n == name).map(|(_, node)| *node)
    }

    fn lowest_node(&self, peer: PartRef) -> Option<AttachNode> {
        self.lowest.iter().find(|(p, _)| *p == peer).map(|(_, node)| *node)
    }
}

/// One recorded `build` call.
#[derive(Clone, Debug)]
pub(crate) struct RecordedBuild {
    pub(crate) sections: Vec<FairingSection>,
    pub(crate) opacity: f32,
}

/// Records every geometry call and hands out sequential handles.
#[derive(Debug, Default)]
pub(crate) struct RecordingGeometry {
    pub(crate) next: u64,
    pub(crate) fail_with: Option<BuildError>,
    pub(crate) builds: Vec<RecordedBuild>,
    pub(crate) destroyed: Vec<MeshHandle>,
    pub(crate) ejected: Vec<(MeshHandle, EjectRequest)>,
    pub(crate) reparented: Vec<(MeshHandle, PartRef)>,
    pub(crate) live: Vec<MeshHandle>,
}

impl GeometryBuilder for RecordingGeometry {
    fn build(&mut self, request: &BuildRequest<'_>) -> Result<MeshHandle, BuildError> {
        self.builds.push(RecordedBuild {
            sections: request.sections.to_vec(),
            opacity: request.opacity,
        });
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }
        self.next += 1;
        let mesh = MeshHandle(self.next);
        self.live.push(mesh);
        Ok(mesh)
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
