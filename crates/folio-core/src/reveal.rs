//! Staggered reveal scheduling.
//!
//! Each marked child of a section gets a [`RevealTicket`]. The host waits
//! `ticket.delay` and hands the ticket back; only the most recent,
//! uncancelled ticket for an element is honored, so a timer that fires after
//! its section was hidden again has no effect.

use std::collections::HashMap;
use std::time::Duration;

use crate::page::PageId;

/// Delay before the first child is revealed.
pub const REVEAL_BASE_DELAY: Duration = Duration::from_millis(100);

/// Extra delay per child index.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Identifies a marked child element within a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealKey {
    pub page: PageId,
    pub index: usize,
}

impl RevealKey {
    pub fn new(page: PageId, index: usize) -> Self {
        Self { page, index }
    }
}

/// A scheduled, cancellable reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    pub key: RevealKey,
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug)]
pub struct RevealScheduler {
    base_delay: Duration,
    stagger: Duration,
    next_generation: u64,
    pending: HashMap<RevealKey, u64>,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new(REVEAL_BASE_DELAY, REVEAL_STAGGER)
    }
}

impl RevealScheduler {
    pub fn new(base_delay: Duration, stagger: Duration) -> Self {
        Self {
            base_delay,
            stagger,
            next_generation: 0,
            pending: HashMap::new(),
        }
    }

    /// Schedule `count` children of `page`, superseding older tickets.
    pub fn schedule(&mut self, page: PageId, count: usize) -> Vec<RevealTicket> {
        (0..count)
            .map(|index| {
                let key = RevealKey::new(page, index);
                let generation = self.next_generation;
                self.next_generation += 1;
                self.pending.insert(key, generation);
                RevealTicket {
                    key,
                    generation,
                    delay: self.base_delay + self.stagger * index as u32,
                }
            })
            .collect()
    }

    /// Drop every pending ticket belonging to `page`. Returns how many.
    pub fn cancel_page(&mut self, page: PageId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|key, _| key.page != page);
        before - self.pending.len()
    }

    /// Consume `ticket`, returning whether it was still live.
    pub fn complete(&mut self, ticket: &RevealTicket) -> bool {
        match self.pending.get(&ticket.key) {
            Some(&generation) if generation == ticket.generation => {
                self.pending.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
