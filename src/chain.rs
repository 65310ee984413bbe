// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Precondition chaining.
//!
//! A segment of stubs `[s0, s1, ..]` run against `p0` induces `[p0, p1, ..]`
//! where `p(i+1).before_hash == s(i).after_hash`. Time bounds and inbox come
//! from `p0` and stay fixed for the whole segment.
//!
//! The fold is strictly sequential: a stub's precondition is only known
//! once its predecessor's postcondition is.

use crate::error::{ChainError, ChainResult};
use crate::precondition::{ChainContext, Precondition};
use crate::stub::AssertionStub;
use alloc::vec::Vec;

/// Lazily pairs each stub with the precondition it was checked against.
#[derive(Debug, Clone)]
pub struct PreconditionChain<'a> {
    context: ChainContext,
    current: Precondition,
    stubs: core::slice::Iter<'a, AssertionStub>,
    index: usize,
}

impl<'a> PreconditionChain<'a> {
    pub fn new(initial: &Precondition, stubs: &'a [AssertionStub]) -> Self {
        Self {
            context: initial.context(),
            current: *initial,
            stubs: stubs.iter(),
            index: 0,
        }
    }

    /// The precondition the next unvisited stub runs against; after the
    /// last stub, the segment's final postcondition.
    pub fn current(&self) -> &Precondition {
        &self.current
    }

    pub fn context(&self) -> &ChainContext {
        &self.context
    }
}

impl<'a> Iterator for PreconditionChain<'a> {
    type Item = (&'a AssertionStub, Precondition);

    fn next(&mut self) -> Option<Self::Item> {
        let stub = self.stubs.next()?;
        let pre = self.current;
        self.current = self.context.at(*stub.after_hash());

        tracing::trace!(
            index = self.index,
            steps = stub.num_steps(),
            after = %hex::encode(stub.after_hash()),
            "derived postcondition"
        );
        self.index += 1;

        Some((stub, pre))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stubs.size_hint()
    }
}

impl ExactSizeIterator for PreconditionChain<'_> {}

/// The precondition each stub was evaluated against, in stub order.
///
/// Output length equals `stubs.len()`; an empty slice yields an empty vec.
pub fn generate_preconditions(initial: &Precondition, stubs: &[AssertionStub]) -> Vec<Precondition> {
    let preconditions: Vec<Precondition> = PreconditionChain::new(initial, stubs)
        .map(|(_, pre)| pre)
        .collect();

    tracing::debug!(stubs = stubs.len(), "generated preconditions");
    preconditions
}

/// The precondition for whatever follows the last stub.
///
/// With no stubs this is `initial` itself.
pub fn final_postcondition(initial: &Precondition, stubs: &[AssertionStub]) -> Precondition {
    match stubs.last() {
        Some(last) => last.generate_postcondition(initial),
        None => *initial,
    }
}

/// Checks a claimed precondition list against the derivation from `initial`.
///
/// Reports the first index that disagrees.
pub fn verify_linkage(
    initial: &Precondition,
    stubs: &[AssertionStub],
    claimed: &[Precondition],
) -> ChainResult<()> {
    if claimed.len() != stubs.len() {
        return Err(ChainError::LengthMismatch {
            expected: stubs.len(),
            found: claimed.len(),
        });
    }

    for (index, ((_, derived), claim)) in PreconditionChain::new(initial, stubs)
        .zip(claimed.iter())
        .enumerate()
    {
        if derived != *claim {
            tracing::debug!(index, "precondition linkage broken");
            return Err(ChainError::Mismatch { index });
        }
    }

    Ok(())
}
