// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural coupling detection.
//!
//! The vehicle's part graph belongs to the host. This module defines the
//! read-only [`PartTree`] queries a fairing needs and the
//! [`AttachmentWatcher`] that turns them into a per-status-check
//! [`Observation`].
//!
//! # Watch modes
//!
//! - [`WatchMode::Direct`]: the trigger peer is whatever is attached to the
//!   watched node on this part. The snap target is that node's axial
//!   position.
//! - [`WatchMode::LowestNode`]: once a peer is attached directly, the peer's
//!   lowest attach node is inspected instead. Whatever is attached *there*
//!   (unless it is this part) becomes the effective trigger, and the snap
//!   target moves to that node. An intermediate adapter therefore does not
//!   spawn a fairing on its own. Only one level of indirection is walked.

use alloc::string::String;
use core::fmt;

/// Lookup-only reference to a part in the host's part graph.
///
/// Holding a `PartRef` never keeps a part alive; it is compared and handed
/// back to collaborators, nothing more.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartRef(pub u32);

impl fmt::Debug for PartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartRef({})", self.0)
    }
}

/// A structural attachment point as reported by the part graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachNode {
    /// Axial position of the node in this fairing's local frame.
    pub position: f64,
    /// The part coupled at this node, if any.
    pub attached: Option<PartRef>,
}

impl AttachNode {
    /// Creates a vacant node at `position`.
    #[must_use]
    pub const fn vacant(position: f64) -> Self {
        Self {
            position,
            attached: None,
        }
    }

    /// Creates a node at `position` with `part` attached.
    #[must_use]
    pub const fn occupied(position: f64, part: PartRef) -> Self {
        Self {
            position,
            attached: Some(part),
        }
    }
}

/// Read-only queries against the host's part graph.
///
/// All positions are expressed in the querying fairing's local frame.
pub trait PartTree {
    /// Returns the part that owns the querying fairing.
    fn this_part(&self) -> PartRef;

    /// Returns this part's node called `name`, or `None` if the part has no
    /// such node.
    fn node(&self, name: &str) -> Option<AttachNode>;

    /// Returns the lowest attach node of `peer`, or `None` if it has none.
    fn lowest_node(&self, peer: PartRef) -> Option<AttachNode>;
}

/// How the watched node is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WatchMode {
    /// Trigger on whatever is attached at the watched node.
    #[default]
    Direct,
    /// Look through the directly attached part to its lowest node.
    LowestNode,
}

/// The effective trigger found by a status check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    /// The part whose presence keeps the fairing alive.
    pub peer: PartRef,
    /// Axial position the lowest section's bottom snaps to.
    pub snap_y: f64,
}

/// Result of one [`AttachmentWatcher::observe`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Observation {
    /// No node is watched; the fairing is always present.
    Unwatched,
    /// The watched node does not exist on this part.
    NodeMissing,
    /// The node exists but no effective trigger is attached.
    Vacant,
    /// An effective trigger is attached.
    Attached(Trigger),
}

impl Observation {
    /// Returns the trigger, if one is attached.
    #[must_use]
    pub fn trigger(&self) -> Option<Trigger> {
        match self {
            Self::Attached(t) => Some(*t),
            _ => None,
        }
    }
}

/// Watches one named node and reports what is coupled there.
#[derive(Clone, Debug)]
pub struct AttachmentWatcher {
    node: Option<String>,
    mode: WatchMode,
    missing_reported: bool,
}

impl AttachmentWatcher {
    /// Creates a watcher for `node`, or an always-present watcher if `None`.
    #[must_use]
    pub fn new(node: Option<&str>, mode: WatchMode) -> Self {
        Self {
            node: node.map(String::from),
            mode,
            missing_reported: false,
        }
    }

    /// Returns the watched node name.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the watch mode.
    #[must_use]
    pub fn mode(&self) -> WatchMode {
        self.mode
    }

    /// Queries `parts` for the current effective trigger.
    ///
    /// A missing node is logged the first time it is seen and reported as
    /// [`Observation::NodeMissing`] on every call.
    pub fn observe<P: PartTree + ?Sized>(&mut self, parts: &P) -> Observation {
        let Some(name) = self.node.as_deref() else {
            return Observation::Unwatched;
        };
        let Some(node) = parts.node(name) else {
            if !self.missing_reported {
                self.missing_reported = true;
                log::warn!("fairing node `{name}` does not exist; the fairing will not spawn");
            }
            return Observation::NodeMissing;
        };
        let Some(direct) = node.attached else {
            return Observation::Vacant;
        };
        match self.mode {
            WatchMode::Direct => Observation::Attached(Trigger {
                peer: direct,
                snap_y: node.position,
            }),
            WatchMode::LowestNode => {
                let this = parts.this_part();
                match parts.lowest_node(direct) {
                    Some(AttachNode {
                        position,
                        attached: Some(peer),
                    }) if peer != this => Observation::Attached(Trigger {
                        peer,
                        snap_y: position,
                    }),
                    _ => Observation::Vacant,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeParts;

    #[test]
    fn watcher_keeps_its_configuration() {
        let watcher = AttachmentWatcher::new(Some("bottom"), WatchMode::LowestNode);
        assert_eq!(watcher.node(), Some("bottom"));
        assert_eq!(watcher.mode(), WatchMode::LowestNode);

        let unwatched = AttachmentWatcher::new(None, WatchMode::default());
        assert_eq!(unwatched.node(), None);
        assert_eq!(unwatched.mode(), WatchMode::Direct);
    }

    #[test]
    fn unwatched_is_always_present() {
        let parts = FakeParts::new(PartRef(1));
        let mut watcher = AttachmentWatcher::new(None, WatchMode::Direct);
        assert_eq!(watcher.observe(&parts), Observation::Unwatched);
    }

    #[test]
    fn direct_mode_reports_attached_part() {
        let mut parts = FakeParts::new(PartRef(1));
        parts.set_node("bottom", AttachNode::vacant(-1.0));
        let mut watcher = AttachmentWatcher::new(Some("bottom"), WatchMode::Direct);
        assert_eq!(watcher.observe(&parts), Observation::Vacant);

        parts.set_node("bottom", AttachNode::occupied(-1.0, PartRef(2)));
        assert_eq!(
            watcher.observe(&parts),
            Observation::Attached(Trigger {
                peer: PartRef(2),
                snap_y: -1.0
            })
        );
    }

    #[test]
    fn missing_node_is_reported_every_time() {
        let parts = FakeParts::new(PartRef(1));
        let mut watcher = AttachmentWatcher::new(Some("bottom"), WatchMode::Direct);
        assert_eq!(watcher.observe(&parts), Observation::NodeMissing);
        assert_eq!(watcher.observe(&parts), Observation::NodeMissing);
        assert!(watcher.missing_reported);
    }

    #[test]
    fn lowest_node_looks_through_adapter() {
        let mut parts = FakeParts::new(PartRef(1));
        parts.set_node("bottom", AttachNode::occupied(-1.0, PartRef(2)));
        parts.set_lowest(PartRef(2), AttachNode::vacant(-3.0));
        let mut watcher = AttachmentWatcher::new(Some("bottom"), WatchMode::LowestNode);
        assert_eq!(
            watcher.observe(&parts),
            Observation::Vacant,
            "adapter alone must not trigger"
        );

        parts.set_lowest(PartRef(2), AttachNode::occupied(-3.0, PartRef(3)));
        assert_eq!(
            watcher.observe(&parts),
            Observation::Attached(Trigger {
                peer: PartRef(3),
                snap_y: -3.0
            })
        );
    }

    #[test]
    fn lowest_node_ignores_own_part() {
        let mut parts = FakeParts::new(PartRef(1));
        parts.set_node("bottom", AttachNode::occupied(-1.0, PartRef(2)));
        parts.set_lowest(PartRef(2), AttachNode::occupied(-3.0, PartRef(1)));
        let mut watcher = AttachmentWatcher::new(Some("bottom"), WatchMode::LowestNode);
        assert_eq!(watcher.observe(&parts), Observation::Vacant);
    }
}
