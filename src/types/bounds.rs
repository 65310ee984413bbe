// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Time bounds.

use serde::{Deserialize, Serialize};

/// Block-height window a dispute segment is valid in.
///
/// Produced upstream and carried through a chain untouched; no ordering
/// between `start` and `end` is enforced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeBounds {
    pub start: u64,
    pub end: u64,
}

impl TimeBounds {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}
