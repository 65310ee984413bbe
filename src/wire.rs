// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Off-chain wire form.
//!
//! Used when stubs travel between off-chain components. It is bincode, not
//! the packed hash preimage, and is never hashed.

use crate::config::wire_config;
use crate::error::{StubError, StubResult};
use crate::precondition::Precondition;
use crate::stub::AssertionStub;
use alloc::vec::Vec;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn encode<T: Serialize>(value: &T) -> StubResult<Vec<u8>> {
    bincode::serde::encode_to_vec(value, wire_config()).map_err(|_| StubError::WireEncode)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StubResult<T> {
    let (value, read) = bincode::serde::decode_from_slice::<T, _>(bytes, wire_config())
        .map_err(|_| StubError::WireDecode)?;
    if read != bytes.len() {
        tracing::debug!(read, total = bytes.len(), "trailing bytes after wire value");
        return Err(StubError::TrailingBytes(bytes.len() - read));
    }
    Ok(value)
}

impl AssertionStub {
    pub fn to_wire(&self) -> StubResult<Vec<u8>> {
        encode(self)
    }

    /// Decodes exactly one stub; trailing bytes are an error.
    pub fn from_wire(bytes: &[u8]) -> StubResult<Self> {
        decode(bytes)
    }
}

impl Precondition {
    pub fn to_wire(&self) -> StubResult<Vec<u8>> {
        encode(self)
    }

    pub fn from_wire(bytes: &[u8]) -> StubResult<Self> {
        decode(bytes)
    }
}
