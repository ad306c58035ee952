// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry builder contract.
//!
//! Lofting sections into a mesh, generating colliders and spawning ejected
//! panels as rigid bodies all belong to the host. The controller only
//! decides *when* these happen and with which parameters, through the
//! [`GeometryBuilder`] trait.
//!
//! The controller owns at most one [`MeshHandle`] at a time. A handle is
//! released exactly once: by [`destroy`](GeometryBuilder::destroy), or by
//! [`reparent`](GeometryBuilder::reparent) which hands it to another part.

use core::fmt;

use crate::attach::PartRef;
use crate::id::ControllerId;
use crate::section::FairingSection;

/// Opaque handle to a mesh created by a [`GeometryBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Everything a builder needs to produce one fairing mesh.
#[derive(Clone, Copy, Debug)]
pub struct BuildRequest<'a> {
    /// The controller asking for the mesh.
    pub controller: ControllerId,
    /// All sections, bottom to top.
    pub sections: &'a [FairingSection],
    /// Material opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Texture set name, resolved by the host.
    pub texture_set: &'a str,
}

/// Parameters for ejecting one section's angular panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EjectRequest {
    /// Index of the section in the controller's stack.
    pub section: usize,
    /// Number of angular panels to release as independent bodies.
    pub panels: u32,
    /// Separation impulse hint applied to each panel.
    pub impulse: f64,
}

/// Reasons a builder may refuse to produce a mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The host has no mesh template for the requested texture set.
    MissingTemplate,
    /// A section's profile cannot be lofted (for example a zero-height,
    /// zero-radius ring).
    InvalidProfile {
        /// Index of the offending section.
        section: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTemplate => f.write_str("fairing mesh template is missing"),
            Self::InvalidProfile { section } => {
                write!(f, "section {section} has a degenerate profile")
            }
        }
    }
}

impl core::error::Error for BuildError {}

/// Host-side mesh generation and separation.
pub trait GeometryBuilder {
    /// Builds one mesh covering every section in `request`.
    fn build(&mut self, request: &BuildRequest<'_>) -> Result<MeshHandle, BuildError>;

    /// Tears down a mesh and everything it owns.
    fn destroy(&mut self, mesh: MeshHandle);

    /// Releases one section's panels as independent rigid bodies.
    ///
    /// The mesh stays valid; the controller destroys what remains afterwards.
    fn eject_panels(&mut self, mesh: MeshHandle, request: &EjectRequest);

    /// Moves `mesh` under `peer`'s model hierarchy. Ownership of the mesh
    /// passes to the peer.
    fn reparent(&mut self, mesh: MeshHandle, peer: PartRef);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_display() {
        assert_eq!(
            alloc::format!("{}", BuildError::InvalidProfile { section: 2 }),
            "section 2 has a degenerate profile"
        );
        assert_eq!(
            alloc::format!("{}", BuildError::MissingTemplate),
            "fairing mesh template is missing"
        );
    }
}
