// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Packed encoding.

use super::Word;
use crate::config::WORD_SIZE;
use crate::types::Bytes32;
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};

/// A `bytes32` value is its own word.
pub fn word_bytes32(value: &Bytes32) -> Word {
    *value
}

/// A `u32` widened to a full word: big-endian, zero-padded on the left.
pub fn word_uint32(value: u32) -> Word {
    let mut word = [0u8; WORD_SIZE];
    BigEndian::write_u32(&mut word[WORD_SIZE - 4..], value);
    word
}

/// Concatenates a fixed number of words into one buffer.
pub fn pack_words<const N: usize, const LEN: usize>(words: &[Word; N]) -> [u8; LEN] {
    debug_assert_eq!(N * WORD_SIZE, LEN);
    let mut buf = [0u8; LEN];
    for (chunk, word) in buf.chunks_exact_mut(WORD_SIZE).zip(words.iter()) {
        chunk.copy_from_slice(word);
    }
    buf
}

/// Growable packed encoder for word sequences of any length.
#[derive(Debug, Default, Clone)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_words(words: usize) -> Self {
        Self {
            buf: Vec::with_capacity(words * WORD_SIZE),
        }
    }

    pub fn bytes32(&mut self, value: &Bytes32) -> &mut Self {
        self.buf.extend_from_slice(&word_bytes32(value));
        self
    }

    pub fn uint32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&word_uint32(value));
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
