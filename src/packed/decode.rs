// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Packed decoding.

use super::Word;
use crate::config::WORD_SIZE;
use crate::error::{StubError, StubResult};
use byteorder::{BigEndian, ByteOrder};

/// Splits a buffer into exactly `N` words.
pub fn split_words<const N: usize>(buf: &[u8]) -> StubResult<[Word; N]> {
    let expected = N * WORD_SIZE;
    if buf.len() != expected {
        tracing::debug!(expected, found = buf.len(), "rejecting packed buffer");
        return Err(StubError::InvalidLength {
            expected,
            found: buf.len(),
        });
    }

    let mut words = [[0u8; WORD_SIZE]; N];
    for (word, chunk) in words.iter_mut().zip(buf.chunks_exact(WORD_SIZE)) {
        word.copy_from_slice(chunk);
    }
    Ok(words)
}

/// Reads a `u32` back out of its widened word.
///
/// Every byte above the low four must be zero, otherwise the word could not
/// have come from a `u32`.
pub fn read_uint32(word: &Word) -> StubResult<u32> {
    let (high, low) = word.split_at(WORD_SIZE - 4);
    if high.iter().any(|&b| b != 0) {
        return Err(StubError::NonCanonicalWord);
    }
    Ok(BigEndian::read_u32(low))
}
