// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Fairing controllers use multi-channel dirty tracking (via
//! [`understory_dirty`]) keyed by controller slot index. Each channel is one
//! of the deferred work requests a controller can accumulate between ticks.
//!
//! All three channels are **local-only**: they are marked with the default
//! policy and no dependency edges exist between controllers, so a drain
//! yields exactly the controllers that were marked. Marking the same
//! controller any number of times before a drain yields it once.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`FairingStore::tick`](crate::store::FairingStore::tick) drains the
//! channels in the fixed order [`STATUS`] → [`REBUILD`] → [`GUI`] and reports
//! what it did as [`TickChanges`](crate::scheduler::TickChanges).

use understory_dirty::Channel;

/// Attachment, enablement or restored state may have changed; the lifecycle
/// must be re-resolved.
pub const STATUS: Channel = Channel::new(0);

/// Section values changed; the mesh must be destroyed and rebuilt.
pub const REBUILD: Channel = Channel::new(1);

/// Lifecycle or sizing changed; exposed controls must be recomputed.
pub const GUI: Channel = Channel::new(2);
