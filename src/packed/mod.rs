// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tightly packed word encoding.
//!
//! Matches the on-chain `keccak256(abi.encodePacked(...))` convention for
//! word-sized values: each value is laid down as exactly one 32-byte word,
//! back to back, with no length prefixes or separators. Encoding and the
//! hash primitive are kept apart so layout can be tested without hashing.

pub mod encode;
pub mod decode;
pub mod keccak;

/// One packed 32-byte word.
pub type Word = [u8; crate::config::WORD_SIZE];
