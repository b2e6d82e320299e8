//! Channel Ledger Tests
//!
//! Exclusive ownership of event-fabric channels.
//! Run with: cargo test --no-default-features --features std --test ledger_tests

use fem_nrf2220::config::FABRIC_CHANNELS;
use fem_nrf2220::hal::channel::{ChannelFabric, ChannelLedger};
use fem_nrf2220::types::ChannelId;

fn ch(id: u8) -> ChannelId {
    ChannelId::new(id)
}

// =============================================================================
// Claiming
// =============================================================================

#[test]
fn new_ledger_is_empty() {
    let ledger = ChannelLedger::<8>::new();
    assert_eq!(ledger.claimed_count(), 0);
    assert_eq!(ledger.capacity(), 8);
    assert!((0..8).all(|id| ledger.is_available(ch(id))));
}

#[test]
fn claim_is_exclusive() {
    let mut ledger = ChannelLedger::<8>::new();
    assert!(ledger.claim_channel(ch(3)));
    assert!(!ledger.claim_channel(ch(3)));
    assert!(ledger.is_claimed(ch(3)));
    assert!(!ledger.is_available(ch(3)));
}

#[test]
fn release_makes_channel_claimable_again() {
    let mut ledger = ChannelLedger::<8>::new();
    ledger.claim_channel(ch(5));
    ledger.release_channel(ch(5));
    assert!(ledger.is_available(ch(5)));
    assert!(ledger.claim_channel(ch(5)));
}

#[test]
fn releasing_a_free_channel_is_harmless() {
    let mut ledger = ChannelLedger::<8>::new();
    ledger.release_channel(ch(1));
    ledger.release_channel(ch(42));
    assert_eq!(ledger.claimed_count(), 0);
}

#[test]
fn channels_past_capacity_cannot_be_claimed() {
    let mut ledger = ChannelLedger::<8>::new();
    assert!(!ledger.is_available(ch(8)));
    assert!(!ledger.claim_channel(ch(8)));
    assert_eq!(ledger.claimed_count(), 0);
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn with_reserved_pre_claims_channels() {
    let ledger = ChannelLedger::<8>::with_reserved(&[0, 6]).unwrap();
    assert_eq!(ledger.claimed().collect::<Vec<_>>(), vec![ch(0), ch(6)]);
}

#[test]
fn with_reserved_reports_duplicate_id() {
    assert_eq!(
        ChannelLedger::<8>::with_reserved(&[2, 5, 2]).unwrap_err(),
        ch(2)
    );
}

#[test]
fn with_reserved_reports_id_past_capacity() {
    assert_eq!(ChannelLedger::<8>::with_reserved(&[1, 8]).unwrap_err(), ch(8));
}

#[test]
fn claimed_iterates_in_channel_order() {
    let mut ledger = ChannelLedger::<8>::new();
    for id in [7, 2, 4] {
        ledger.claim_channel(ch(id));
    }
    assert_eq!(ledger.claimed().collect::<Vec<_>>(), vec![ch(2), ch(4), ch(7)]);
    assert_eq!(ledger.claimed_count(), 3);
}

#[test]
fn target_fabric_covers_board_channels() {
    let ledger = ChannelLedger::<FABRIC_CHANNELS>::default();
    for id in [
        fem_nrf2220::config::channels::CS,
        fem_nrf2220::config::channels::MD,
        fem_nrf2220::config::channels::INTERNAL,
    ] {
        assert!(ledger.is_available(ch(id)));
    }
}
