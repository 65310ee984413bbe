// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Keccak-256 hashing.
//!
//! This is the original Keccak padding used by the EVM `keccak256`
//! opcode, not the NIST SHA3-256 variant. The two differ on every input.

use super::Word;
use crate::types::Bytes32;
use sha3::{Digest, Keccak256};

/// Keccak-256 of a byte slice.
pub fn keccak256(data: &[u8]) -> Bytes32 {
    Keccak256::digest(data).into()
}

/// Keccak-256 over a word sequence, fed word by word.
///
/// Equal to `keccak256` of the concatenated words.
pub fn keccak256_words(words: &[Word]) -> Bytes32 {
    let mut hasher = Keccak256::new();
    for word in words {
        hasher.update(word);
    }
    hasher.finalize().into()
}
