// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! assertion-kernel: canonical digests and precondition chaining for
//! fraud-proof assertion stubs.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod types;
pub mod packed;
pub mod precondition;
pub mod stub;
pub mod wire;
pub mod chain;

pub use chain::{final_postcondition, generate_preconditions, verify_linkage, PreconditionChain};
pub use precondition::{ChainContext, Precondition};
pub use stub::AssertionStub;

#[cfg(test)]
pub mod tests;
