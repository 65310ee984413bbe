// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Assertion stubs.
//!
//! An assertion stub is the compact claim a verifier makes about a span of
//! off-chain execution. The on-chain verifier never re-executes the span;
//! it recomputes [`AssertionStub::hash`] from the same six fields and
//! compares digests.
//!
//! # Hash Input Structure
//! ```text
//! after_hash          bytes32
//! num_steps           uint32 widened to one big-endian word
//! first_message_hash  bytes32
//! last_message_hash   bytes32
//! first_log_hash      bytes32
//! last_log_hash       bytes32
//! ```
//! 192 bytes, Keccak-256.

use crate::config::{PACKED_STUB_LEN, STUB_WORDS};
use crate::error::StubResult;
use crate::packed::decode::{read_uint32, split_words};
use crate::packed::encode::{pack_words, word_bytes32, word_uint32};
use crate::packed::keccak::keccak256_words;
use crate::packed::Word;
use crate::precondition::Precondition;
use crate::types::Bytes32;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AssertionStub {
    after_hash: Bytes32,
    num_steps: u32,
    first_message_hash: Bytes32,
    last_message_hash: Bytes32,
    first_log_hash: Bytes32,
    last_log_hash: Bytes32,
}

impl AssertionStub {
    pub fn new(
        after_hash: Bytes32,
        num_steps: u32,
        first_message_hash: Bytes32,
        last_message_hash: Bytes32,
        first_log_hash: Bytes32,
        last_log_hash: Bytes32,
    ) -> Self {
        Self {
            after_hash,
            num_steps,
            first_message_hash,
            last_message_hash,
            first_log_hash,
            last_log_hash,
        }
    }

    /// Machine state digest after the span.
    pub fn after_hash(&self) -> &Bytes32 {
        &self.after_hash
    }

    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    pub fn first_message_hash(&self) -> &Bytes32 {
        &self.first_message_hash
    }

    pub fn last_message_hash(&self) -> &Bytes32 {
        &self.last_message_hash
    }

    pub fn first_log_hash(&self) -> &Bytes32 {
        &self.first_log_hash
    }

    pub fn last_log_hash(&self) -> &Bytes32 {
        &self.last_log_hash
    }

    /// Compares two stubs on execution outcome and messages consumed.
    ///
    /// Log hashes are NOT compared, although [`hash`](Self::hash) covers
    /// them: two stubs can be equal here and still hash differently.
    pub fn equals(&self, other: &AssertionStub) -> bool {
        self.after_hash == other.after_hash
            && self.num_steps == other.num_steps
            && self.first_message_hash == other.first_message_hash
            && self.last_message_hash == other.last_message_hash
    }

    /// The six fields as packed words, in hash order.
    pub fn words(&self) -> [Word; STUB_WORDS] {
        [
            word_bytes32(&self.after_hash),
            word_uint32(self.num_steps),
            word_bytes32(&self.first_message_hash),
            word_bytes32(&self.last_message_hash),
            word_bytes32(&self.first_log_hash),
            word_bytes32(&self.last_log_hash),
        ]
    }

    /// The exact hash preimage.
    pub fn packed(&self) -> [u8; PACKED_STUB_LEN] {
        pack_words(&self.words())
    }

    /// Parses a packed preimage back into a stub.
    pub fn from_packed(buf: &[u8]) -> StubResult<Self> {
        let [after, steps, first_msg, last_msg, first_log, last_log] =
            split_words::<STUB_WORDS>(buf)?;

        Ok(Self {
            after_hash: after,
            num_steps: read_uint32(&steps)?,
            first_message_hash: first_msg,
            last_message_hash: last_msg,
            first_log_hash: first_log,
            last_log_hash: last_log,
        })
    }

    /// Keccak-256 of the packed stub, as the on-chain verifier computes it.
    pub fn hash(&self) -> Bytes32 {
        keccak256_words(&self.words())
    }

    /// The precondition the next stub in the segment runs against.
    pub fn generate_postcondition(&self, pre: &Precondition) -> Precondition {
        pre.context().at(self.after_hash)
    }
}

impl PartialEq for AssertionStub {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for AssertionStub {}

impl fmt::Display for AssertionStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AssertionStub({}, {}, {}, {})",
            hex::encode(self.after_hash),
            self.num_steps,
            hex::encode(self.first_message_hash),
            hex::encode(self.last_message_hash),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(fill: u8, steps: u32) -> AssertionStub {
        AssertionStub::new([fill; 32], steps, [fill + 1; 32], [fill + 2; 32], [fill + 3; 32], [fill + 4; 32])
    }

    #[test]
    fn test_packed_layout() {
        let s = stub(0x10, 9);
        let packed = s.packed();

        assert_eq!(&packed[0..32], s.after_hash());
        assert_eq!(&packed[32..60], &[0u8; 28]);
        assert_eq!(&packed[60..64], &9u32.to_be_bytes());
        assert_eq!(&packed[64..96], s.first_message_hash());
        assert_eq!(&packed[96..128], s.last_message_hash());
        assert_eq!(&packed[128..160], s.first_log_hash());
        assert_eq!(&packed[160..192], s.last_log_hash());
    }

    #[test]
    fn test_from_packed_restores_all_fields() {
        let s = stub(0x40, 77);
        let back = AssertionStub::from_packed(&s.packed()).unwrap();

        assert!(back.equals(&s));
        assert_eq!(back.first_log_hash(), s.first_log_hash());
        assert_eq!(back.last_log_hash(), s.last_log_hash());
        assert_eq!(back.hash(), s.hash());
    }

    #[test]
    fn test_hash_equals_keccak_of_packed() {
        let s = stub(0x01, 3);
        assert_eq!(s.hash(), crate::packed::keccak::keccak256(&s.packed()));
    }

    #[test]
    fn test_display_omits_logs() {
        let s = AssertionStub::new([0xab; 32], 12, [0x01; 32], [0x02; 32], [0xee; 32], [0xff; 32]);
        let text = std::format!("{}", s);

        assert!(text.starts_with("AssertionStub("));
        assert!(text.contains(&"ab".repeat(32)));
        assert!(text.contains(", 12, "));
        assert!(!text.contains(&"ee".repeat(32)));
    }
}
