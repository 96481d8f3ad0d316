//! Browser history abstraction.
//!
//! The router only ever pushes or replaces entries; traversal (back/forward)
//! is driven by the host and reported back through
//! [`Router::restore_from_history`](crate::Router::restore_from_history).

use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// A history record pairing a page with its URL fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Page recorded in the entry state, if any
    pub page: Option<PageId>,
    /// URL fragment including `#`
    pub fragment: String,
}

impl HistoryEntry {
    pub fn for_page(page: PageId) -> Self {
        Self {
            page: Some(page),
            fragment: page.fragment(),
        }
    }

    /// The recorded page, falling back to the default page.
    pub fn page_or_default(&self) -> PageId {
        self.page.unwrap_or_default()
    }
}

/// Write side of a browser history stack.
pub trait History {
    /// Push a new entry on top of the current one.
    fn push(&mut self, entry: HistoryEntry);
    /// Overwrite the current entry without growing the stack.
    fn replace(&mut self, entry: HistoryEntry);
}

/// In-memory history with a cursor, mirroring browser semantics.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Move one entry back, returning the entry now current.
    pub fn back(&mut self) -> Option<HistoryEntry> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.current().cloned()
    }

    /// Move one entry forward, returning the entry now current.
    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current().cloned()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
            self.cursor += 1;
        }
        self.entries.push(entry);
    }

    fn replace(&mut self, entry: HistoryEntry) {
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = entry,
            None => self.entries.push(entry),
        }
    }
}
