// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Width in bytes of one packed word (the on-chain `bytes32` / `uint256` slot).
pub const WORD_SIZE: usize = 32;

/// Length in bytes of every digest field and of the stub hash itself.
pub const HASH_LEN: usize = 32;

/// Number of words in a packed assertion stub.
pub const STUB_WORDS: usize = 6;

/// Length in bytes of the packed assertion stub (the hash preimage).
pub const PACKED_STUB_LEN: usize = STUB_WORDS * WORD_SIZE;

/// Bincode configuration used for the off-chain wire form.
///
/// Fixed-int encoding keeps every stub the same size on the wire.
pub fn wire_config() -> bincode::config::Configuration<
    bincode::config::LittleEndian,
    bincode::config::Fixint,
> {
    bincode::config::standard().with_fixed_int_encoding()
}
