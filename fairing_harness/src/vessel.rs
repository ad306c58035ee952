// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use fairing_core::attach::{AttachNode, PartRef, PartTree};

#[derive(Clone, Debug)]
struct SimNode {
    name: String,
    position: f64,
    attached: Option<PartRef>,
}

#[derive(Clone, Debug)]
struct SimPart {
    offset: f64,
    nodes: Vec<SimNode>,
}

/// A hand-built vehicle: parts stacked along one axis, each with named
/// attach nodes.
///
/// Node positions are local to their part; a part's `offset` places it on
/// the vehicle axis. Coupling is symmetric: [`couple`](Self::couple) fills
/// both nodes and [`decouple`](Self::decouple) clears both.
#[derive(Clone, Debug, Default)]
pub struct SimulatedVessel {
    parts: Vec<SimPart>,
}

impl SimulatedVessel {
    /// Creates an empty vessel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part whose origin sits at `offset` on the vehicle axis.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "test vessels stay far below 2^32 parts"
    )]
    pub fn add_part(&mut self, offset: f64) -> PartRef {
        let part = PartRef(self.parts.len() as u32);
        self.parts.push(SimPart {
            offset,
            nodes: Vec::new(),
        });
        part
    }

    /// Adds a vacant node called `name` at local `position`.
    ///
    /// # Panics
    ///
    /// Panics if `part` is unknown or already has a node called `name`.
    pub fn add_node(&mut self, part: PartRef, name: &str, position: f64) -> &mut Self {
        let p = self.part_mut(part);
        assert!(
            p.nodes.iter().all(|n| n.name != name),
            "part {part:?} already has a node `{name}`"
        );
        p.nodes.push(SimNode {
            name: String::from(name),
            position,
            attached: None,
        });
        self
    }

    /// Couples `a`'s node `a_node` to `b`'s node `b_node`.
    ///
    /// # Panics
    ///
    /// Panics if either part or node is unknown.
    pub fn couple(&mut self, a: PartRef, a_node: &str, b: PartRef, b_node: &str) {
        self.node_mut(a, a_node).attached = Some(b);
        self.node_mut(b, b_node).attached = Some(a);
    }

    /// Decouples whatever is attached at `part`'s node `name`, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the part or node is unknown.
    pub fn decouple(&mut self, part: PartRef, name: &str) -> Option<PartRef> {
        let other = self.node_mut(part, name).attached.take()?;
        for node in &mut self.part_mut(other).nodes {
            if node.attached == Some(part) {
                node.attached = None;
            }
        }
        Some(other)
    }

    /// Returns the part attached at `part`'s node `name`.
    #[must_use]
    pub fn attached_at(&self, part: PartRef, name: &str) -> Option<PartRef> {
        self.parts
            .get(part.0 as usize)?
            .nodes
            .iter()
            .find(|n| n.name == name)?
            .attached
    }

    /// Returns the part graph as seen from `part`.
    #[must_use]
    pub fn view(&self, part: PartRef) -> VesselView<'_> {
        VesselView { vessel: self, this: part }
    }

    fn part(&self, part: PartRef) -> &SimPart {
        let index = part.0 as usize;
        assert!(index < self.parts.len(), "unknown part {part:?}");
        &self.parts[index]
    }

    fn part_mut(&mut self, part: PartRef) -> &mut SimPart {
        let index = part.0 as usize;
        assert!(index < self.parts.len(), "unknown part {part:?}");
        &mut self.parts[index]
    }

    fn node_mut(&mut self, part: PartRef, name: &str) -> &mut SimNode {
        let p = self.part_mut(part);
        let found = p.nodes.iter_mut().find(|n| n.name == name);
        match found {
            Some(node) => node,
            None => panic!("part {part:?} has no node `{name}`"),
        }
    }
}

/// A [`SimulatedVessel`] seen from one part. Positions are converted into
/// that part's local frame.
#[derive(Clone, Copy, Debug)]
pub struct VesselView<'a> {
    vessel: &'a SimulatedVessel,
    this: PartRef,
}

impl VesselView<'_> {
    fn local(&self, owner: PartRef, position: f64) -> f64 {
        position + self.vessel.part(owner).offset - self.vessel.part(self.this).offset
    }
}

impl PartTree for VesselView<'_> {
    fn this_part(&self) -> PartRef {
        self.this
    }

    fn node(&self, name: &str) -> Option<AttachNode> {
        let node = self
            .vessel
            .part(self.this)
            .nodes
            .iter()
            .find(|n| n.name == name)?;
        Some(AttachNode {
            position: node.position,
            attached: node.attached,
        })
    }

    fn lowest_node(&self, peer: PartRef) -> Option<AttachNode> {
        let lowest = self
            .vessel
            .part(peer)
            .nodes
            .iter()
            .min_by(|a, b| a.position.total_cmp(&b.position))?;
        Some(AttachNode {
            position: self.local(peer, lowest.position),
            attached: lowest.attached,
        })
    }
}
