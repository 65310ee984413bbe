// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.
//!
//! Hashing, equality and chain derivation are total. Only the decoders and
//! the linkage check can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StubError {
    #[error("Invalid packed length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The `num_steps` word carries set bits above the low 32.
    #[error("Non-canonical step word: high bytes must be zero")]
    NonCanonicalWord,

    #[error("Wire encoding failed")]
    WireEncode,

    #[error("Wire decoding failed")]
    WireDecode,

    #[error("Trailing bytes after wire stub: {0}")]
    TrailingBytes(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Precondition count mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Precondition {index} does not follow from its predecessor")]
    Mismatch { index: usize },
}

pub type StubResult<T> = core::result::Result<T, StubError>;
pub type ChainResult<T> = core::result::Result<T, ChainError>;
