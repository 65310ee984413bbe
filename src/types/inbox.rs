// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Inbox snapshot identity.

use super::Bytes32;
use serde::{Deserialize, Serialize};

/// Digest of the inbox state a segment starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InboxSnapshot(pub Bytes32);

impl InboxSnapshot {
    pub fn as_bytes(&self) -> &Bytes32 {
        &self.0
    }
}

impl From<Bytes32> for InboxSnapshot {
    fn from(hash: Bytes32) -> Self {
        InboxSnapshot(hash)
    }
}
