//! View capability used by the router.
//!
//! The router never touches a rendering surface directly. It drives a
//! [`PageView`], and [`SectionState`] is the stock implementation: a plain
//! record of what should be on screen, which the web frontend renders from
//! and tests assert against.

use std::collections::{BTreeMap, BTreeSet};

use crate::page::PageId;
use crate::reveal::RevealKey;

/// Operations the router needs from whatever draws the page.
pub trait PageView {
    fn deactivate_section(&mut self, page: PageId);
    fn activate_section(&mut self, page: PageId);
    /// Number of marked children in `page` that animate in on activation.
    fn reveal_slots(&self, page: PageId) -> usize;
    fn reveal(&mut self, key: RevealKey);
    fn highlight_link(&mut self, page: PageId);
    fn set_menu_open(&mut self, open: bool);
    fn is_menu_open(&self) -> bool;
}

/// Recorded view state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionState {
    visible: BTreeSet<PageId>,
    highlighted: Option<PageId>,
    menu_open: bool,
    revealed: BTreeSet<RevealKey>,
    reveal_slots: BTreeMap<PageId, usize>,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare how many reveal children each page has.
    pub fn with_reveal_slots(mut self, slots: impl IntoIterator<Item = (PageId, usize)>) -> Self {
        self.reveal_slots.extend(slots);
        self
    }

    pub fn visible_sections(&self) -> Vec<PageId> {
        self.visible.iter().copied().collect()
    }

    pub fn is_visible(&self, page: PageId) -> bool {
        self.visible.contains(&page)
    }

    pub fn highlighted(&self) -> Option<PageId> {
        self.highlighted
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }
}

impl PageView for SectionState {
    fn deactivate_section(&mut self, page: PageId) {
        self.visible.remove(&page);
        self.revealed.retain(|key| key.page != page);
    }

    fn activate_section(&mut self, page: PageId) {
        self.visible.insert(page);
    }

    fn reveal_slots(&self, page: PageId) -> usize {
        self.reveal_slots.get(&page).copied().unwrap_or(0)
    }

    fn reveal(&mut self, key: RevealKey) {
        if self.visible.contains(&key.page) {
            self.revealed.insert(key);
        }
    }

    fn highlight_link(&mut self, page: PageId) {
        self.highlighted = Some(page);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deactivate_clears_reveals_of_that_page_only() {
        let mut view = SectionState::new();
        view.activate_section(PageId::Home);
        view.activate_section(PageId::About);
        view.reveal(RevealKey::new(PageId::Home, 0));
        view.reveal(RevealKey::new(PageId::About, 0));

        view.deactivate_section(PageId::Home);
        assert!(!view.is_visible(PageId::Home));
        assert!(!view.is_revealed(RevealKey::new(PageId::Home, 0)));
        assert!(view.is_revealed(RevealKey::new(PageId::About, 0)));
    }

    #[test]
    fn hidden_sections_ignore_reveals() {
        let mut view = SectionState::new();
        view.reveal(RevealKey::new(PageId::Cv, 1));
        assert!(!view.is_revealed(RevealKey::new(PageId::Cv, 1)));
    }

    #[test]
    fn unknown_slot_count_is_zero() {
        let view = SectionState::new().with_reveal_slots([(PageId::Projects, 4)]);
        assert_eq!(view.reveal_slots(PageId::Projects), 4);
        assert_eq!(view.reveal_slots(PageId::Contact), 0);
    }
}
