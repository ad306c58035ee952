// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fairing sections.
//!
//! A fairing is a stack of [`FairingSection`]s ordered bottom to top. Each
//! section is a conical or cylindrical shell described by two rings: the
//! bottom ring at `bottom_y` with `bottom_radius`, and the top ring at `top_y`
//! with `top_radius`. All axial values are offsets along the fairing's local
//! up-axis.
//!
//! The model deliberately does not require `top_y >= bottom_y`; callers may
//! invert a section to build an inverted cone. Radii are clamped to be
//! non-negative on every write.

use kurbo::{Line, Rect, Shape};

/// The four numbers that fully describe a section's shape.
///
/// This is also the unit of persistence; see [`persist`](crate::persist).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    /// Axial offset of the top ring.
    pub top_y: f64,
    /// Axial offset of the bottom ring.
    pub bottom_y: f64,
    /// Radius of the top ring.
    pub top_radius: f64,
    /// Radius of the bottom ring.
    pub bottom_radius: f64,
}

impl SectionGeometry {
    /// Creates a section shape, clamping negative radii to zero.
    #[must_use]
    pub fn new(top_y: f64, bottom_y: f64, top_radius: f64, bottom_radius: f64) -> Self {
        Self {
            top_y,
            bottom_y,
            top_radius: top_radius.max(0.0),
            bottom_radius: bottom_radius.max(0.0),
        }
    }

    /// Creates a straight cylinder between `bottom_y` and `top_y`.
    #[must_use]
    pub fn cylinder(bottom_y: f64, top_y: f64, radius: f64) -> Self {
        Self::new(top_y, bottom_y, radius, radius)
    }

    /// Returns the shell's profile as a line in the (radius, axial) plane,
    /// running from the bottom ring to the top ring.
    #[must_use]
    pub fn profile(&self) -> Line {
        Line::new(
            (self.bottom_radius, self.bottom_y),
            (self.top_radius, self.top_y),
        )
    }

    /// Returns the bounding box of [`profile`](Self::profile), extended to
    /// the axis so the box covers the full shell cross-section.
    #[must_use]
    pub fn profile_bounds(&self) -> Rect {
        let bounds = self.profile().bounding_box();
        Rect::new(0.0, bounds.y0, bounds.x1, bounds.y1)
    }
}

/// One independently configurable geometric shell segment.
#[derive(Clone, Debug, PartialEq)]
pub struct FairingSection {
    /// Axial offset of the top ring.
    pub top_y: f64,
    /// Axial offset of the bottom ring.
    pub bottom_y: f64,
    /// Radius of the top ring. Never negative.
    pub top_radius: f64,
    /// Radius of the bottom ring. Never negative.
    pub bottom_radius: f64,
    /// Whether external updates and user sizing may move the top ring.
    pub can_adjust_top: bool,
    /// Whether external updates and user sizing may move the bottom ring.
    pub can_adjust_bottom: bool,
    /// Number of angular panels the shell is split into. At least 1.
    pub section_count: u32,
    /// Whether the builder should generate colliders for this section.
    pub colliders_enabled: bool,
    /// Mesh faces merged into a single collider.
    pub faces_per_collider: u32,
}

impl FairingSection {
    /// Default number of faces merged into one collider.
    pub const DEFAULT_FACES_PER_COLLIDER: u32 = 4;

    /// Creates a fixed (non-adjustable) single-panel section with colliders.
    #[must_use]
    pub fn new(geometry: SectionGeometry) -> Self {
        let geometry = SectionGeometry::new(
            geometry.top_y,
            geometry.bottom_y,
            geometry.top_radius,
            geometry.bottom_radius,
        );
        Self {
            top_y: geometry.top_y,
            bottom_y: geometry.bottom_y,
            top_radius: geometry.top_radius,
            bottom_radius: geometry.bottom_radius,
            can_adjust_top: false,
            can_adjust_bottom: false,
            section_count: 1,
            colliders_enabled: true,
            faces_per_collider: Self::DEFAULT_FACES_PER_COLLIDER,
        }
    }

    /// Sets which rings may be moved by updates and sizing.
    #[must_use]
    pub fn with_adjustable(mut self, top: bool, bottom: bool) -> Self {
        self.can_adjust_top = top;
        self.can_adjust_bottom = bottom;
        self
    }

    /// Sets the angular panel count, clamped to at least 1.
    #[must_use]
    pub fn with_section_count(mut self, count: u32) -> Self {
        self.section_count = count.max(1);
        self
    }

    /// Sets collider generation.
    #[must_use]
    pub fn with_colliders(mut self, enabled: bool, faces_per_collider: u32) -> Self {
        self.colliders_enabled = enabled;
        self.faces_per_collider = faces_per_collider.max(1);
        self
    }

    /// Returns the section's shape.
    #[must_use]
    pub fn geometry(&self) -> SectionGeometry {
        SectionGeometry {
            top_y: self.top_y,
            bottom_y: self.bottom_y,
            top_radius: self.top_radius,
            bottom_radius: self.bottom_radius,
        }
    }

    /// Overwrites the section's shape, keeping its settings.
    pub fn set_geometry(&mut self, geometry: SectionGeometry) {
        self.top_y = geometry.top_y;
        self.bottom_y = geometry.bottom_y;
        self.set_top_radius(geometry.top_radius);
        self.set_bottom_radius(geometry.bottom_radius);
    }

    /// Sets the top radius, clamping to zero.
    pub fn set_top_radius(&mut self, radius: f64) {
        self.top_radius = radius.max(0.0);
    }

    /// Sets the bottom radius, clamping to zero.
    pub fn set_bottom_radius(&mut self, radius: f64) {
        self.bottom_radius = radius.max(0.0);
    }

    /// Returns the section's profile line; see [`SectionGeometry::profile`].
    #[must_use]
    pub fn profile(&self) -> Line {
        self.geometry().profile()
    }
}

/// Top/bottom axial extents and radii of a whole fairing.
///
/// Collaborators use these after a rebuild to place their own attach nodes
/// (for example the payload node sitting at the fairing's top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FairingExtents {
    /// Highest axial position reached by any section.
    pub top_y: f64,
    /// Lowest axial position reached by any section.
    pub bottom_y: f64,
    /// Radius of the ring at `top_y`.
    pub top_radius: f64,
    /// Radius of the ring at `bottom_y`.
    pub bottom_radius: f64,
    /// Largest radius of any ring.
    pub max_radius: f64,
}

impl FairingExtents {
    /// Measures a section stack. Returns `None` for an empty stack.
    #[must_use]
    pub fn measure(sections: &[FairingSection]) -> Option<Self> {
        let mut rings = sections.iter().flat_map(|s| {
            [
                (s.bottom_y, s.bottom_radius),
                (s.top_y, s.top_radius),
            ]
        });
        let first = rings.next()?;
        let mut extents = Self {
            top_y: first.0,
            bottom_y: first.0,
            top_radius: first.1,
            bottom_radius: first.1,
            max_radius: first.1,
        };
        for (y, radius) in rings {
            if y > extents.top_y {
                extents.top_y = y;
                extents.top_radius = radius;
            }
            if y < extents.bottom_y {
                extents.bottom_y = y;
                extents.bottom_radius = radius;
            }
            extents.max_radius = extents.max_radius.max(radius);
        }
        Some(extents)
    }
}

/// Returns the union of all section profile bounds, or `None` when empty.
#[must_use]
pub fn profile_bounds(sections: &[FairingSection]) -> Option<Rect> {
    sections
        .iter()
        .map(|s| s.geometry().profile_bounds())
        .reduce(|a, b| a.union(b))
}
