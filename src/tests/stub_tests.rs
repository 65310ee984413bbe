// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::precondition::Precondition;
use crate::stub::AssertionStub;
use crate::types::{InboxSnapshot, TimeBounds};

fn base() -> AssertionStub {
    AssertionStub::new([0x11; 32], 42, [0x22; 32], [0x33; 32], [0x44; 32], [0x55; 32])
}

fn with_logs(first: u8, last: u8) -> AssertionStub {
    let b = base();
    AssertionStub::new(
        *b.after_hash(),
        b.num_steps(),
        *b.first_message_hash(),
        *b.last_message_hash(),
        [first; 32],
        [last; 32],
    )
}

#[test]
fn test_equality_ignores_log_hashes() {
    let a = with_logs(0x44, 0x55);
    let b = with_logs(0x66, 0x77);

    assert!(a.equals(&b), "log hashes must not affect equality");
    assert_eq!(a, b);
    assert_ne!(a.hash(), b.hash(), "log hashes must affect the digest");
}

#[test]
fn test_last_log_alone_changes_hash() {
    assert_ne!(with_logs(0x44, 0x55).hash(), with_logs(0x44, 0x56).hash());
    assert_ne!(with_logs(0x44, 0x55).hash(), with_logs(0x45, 0x55).hash());
}

#[test]
fn test_equality_checks_each_compared_field() {
    let b = base();
    let variants = [
        AssertionStub::new([0x99; 32], 42, [0x22; 32], [0x33; 32], [0x44; 32], [0x55; 32]),
        AssertionStub::new([0x11; 32], 43, [0x22; 32], [0x33; 32], [0x44; 32], [0x55; 32]),
        AssertionStub::new([0x11; 32], 42, [0x99; 32], [0x33; 32], [0x44; 32], [0x55; 32]),
        AssertionStub::new([0x11; 32], 42, [0x22; 32], [0x99; 32], [0x44; 32], [0x55; 32]),
    ];

    for v in variants.iter() {
        assert!(!b.equals(v));
        assert!(!v.equals(&b));
        assert_ne!(b.hash(), v.hash());
    }
}

#[test]
fn test_equal_hash_implies_equal() {
    let a = base();
    let b = AssertionStub::from_packed(&a.packed()).unwrap();

    assert_eq!(a.hash(), b.hash());
    assert!(a.equals(&b));
}

#[test]
fn test_hash_determinism() {
    let a = base();
    let b = base();

    assert_eq!(a.hash(), a.hash());
    assert_eq!(a.hash(), b.hash(), "structurally identical stubs must hash identically");
}

#[test]
fn test_field_order_matters() {
    // Swapping the message bounds keeps the same bytes in a different order.
    let a = AssertionStub::new([0; 32], 1, [0xaa; 32], [0xbb; 32], [0; 32], [0; 32]);
    let b = AssertionStub::new([0; 32], 1, [0xbb; 32], [0xaa; 32], [0; 32], [0; 32]);

    assert_ne!(a.hash(), b.hash());
}

#[test]
fn test_generate_postcondition() {
    let pre = Precondition::new([0x01; 32], TimeBounds::new(100, 200), InboxSnapshot([0x02; 32]));
    let post = base().generate_postcondition(&pre);

    assert_eq!(post.before_hash, [0x11; 32]);
    assert_eq!(post.time_bounds, pre.time_bounds);
    assert_eq!(post.before_inbox, pre.before_inbox);
}

#[test]
fn test_from_packed_rejects_bad_input() {
    use crate::error::StubError;

    let packed = base().packed();
    assert_eq!(
        AssertionStub::from_packed(&packed[..191]),
        Err(StubError::InvalidLength { expected: 192, found: 191 })
    );

    let mut dirty = packed;
    dirty[32] = 1;
    assert_eq!(AssertionStub::from_packed(&dirty), Err(StubError::NonCanonicalWord));
}
