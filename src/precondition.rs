// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Preconditions.
//!
//! A precondition is the state an assertion stub claims to have executed
//! from. Within one dispute segment only `before_hash` moves; the time
//! window and inbox snapshot are fixed for the whole segment and live in a
//! [`ChainContext`].

use crate::types::{Bytes32, InboxSnapshot, TimeBounds};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precondition {
    /// Digest of the machine state before execution.
    pub before_hash: Bytes32,
    pub time_bounds: TimeBounds,
    pub before_inbox: InboxSnapshot,
}

impl Precondition {
    pub fn new(before_hash: Bytes32, time_bounds: TimeBounds, before_inbox: InboxSnapshot) -> Self {
        Self {
            before_hash,
            time_bounds,
            before_inbox,
        }
    }

    /// The segment-wide part of this precondition.
    pub fn context(&self) -> ChainContext {
        ChainContext {
            time_bounds: self.time_bounds,
            before_inbox: self.before_inbox,
        }
    }
}

/// Time bounds and inbox snapshot shared by every step of one segment.
///
/// Taken once from the initial precondition and stamped into each derived
/// precondition; never recomputed per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    pub time_bounds: TimeBounds,
    pub before_inbox: InboxSnapshot,
}

impl ChainContext {
    pub fn new(time_bounds: TimeBounds, before_inbox: InboxSnapshot) -> Self {
        Self {
            time_bounds,
            before_inbox,
        }
    }

    /// Builds the precondition for a machine state inside this segment.
    pub fn at(&self, before_hash: Bytes32) -> Precondition {
        Precondition {
            before_hash,
            time_bounds: self.time_bounds,
            before_inbox: self.before_inbox,
        }
    }
}
