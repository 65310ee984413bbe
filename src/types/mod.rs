// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Value types shared by stubs and preconditions.

pub mod bounds;
pub mod inbox;

pub use bounds::TimeBounds;
pub use inbox::InboxSnapshot;

/// A 32-byte digest exactly as it sits in a packed word.
pub type Bytes32 = [u8; crate::config::HASH_LEN];
