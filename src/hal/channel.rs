//! Event Channel Fabric
//!
//! Ownership of the timer/radio-event-to-GPIO routing channels. The
//! fabric hands out each channel to exactly one consumer at a time.

use crate::types::ChannelId;

/// Allocator of named event-channel resources
pub trait ChannelFabric {
    /// Whether `id` exists and is not owned by anyone
    fn is_available(&self, id: ChannelId) -> bool;

    /// Take exclusive ownership of `id`; false if it is not available
    fn claim_channel(&mut self, id: ChannelId) -> bool;

    /// Return ownership of `id` to the fabric
    fn release_channel(&mut self, id: ChannelId);
}

/// Channel ownership ledger for an `N`-channel fabric
#[derive(Clone, Debug)]
pub struct ChannelLedger<const N: usize> {
    /// Track which channels are owned
    claimed: [bool; N],
}

impl<const N: usize> ChannelLedger<N> {
    /// Create a ledger with every channel free
    #[must_use]
    pub const fn new() -> Self {
        Self { claimed: [false; N] }
    }

    /// Create a ledger with `reserved` already owned by other consumers
    ///
    /// # Errors
    ///
    /// Returns the first id that is listed twice or lies outside the
    /// fabric.
    pub fn with_reserved(reserved: &[u8]) -> Result<Self, ChannelId> {
        let mut ledger = Self::new();
        for &id in reserved {
            let id = ChannelId::new(id);
            if !ledger.claim_channel(id) {
                return Err(id);
            }
        }
        Ok(ledger)
    }

    /// Check if a channel is owned
    #[must_use]
    pub fn is_claimed(&self, id: ChannelId) -> bool {
        self.claimed
            .get(usize::from(id.index()))
            .copied()
            .unwrap_or(false)
    }

    /// Number of owned channels
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }

    /// Get iterator over owned channels
    pub fn claimed(&self) -> impl Iterator<Item = ChannelId> + '_ {
        (0u8..)
            .zip(self.claimed.iter())
            .filter(|(_, &c)| c)
            .map(|(id, _)| ChannelId::new(id))
    }

    /// Total channels on the fabric
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ChannelLedger<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ChannelFabric for ChannelLedger<N> {
    fn is_available(&self, id: ChannelId) -> bool {
        matches!(self.claimed.get(usize::from(id.index())), Some(false))
    }

    fn claim_channel(&mut self, id: ChannelId) -> bool {
        match self.claimed.get_mut(usize::from(id.index())) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    fn release_channel(&mut self, id: ChannelId) {
        if let Some(slot) = self.claimed.get_mut(usize::from(id.index())) {
            *slot = false;
        }
    }
}
