//! Edge case and boundary condition tests
//!
//! These tests cover rapid input sequences, history traversal corner cases
//! and the reveal timers racing against navigation.

use folio_core::{
    Direction, HistoryEntry, Ignored, InitialPage, KeyChord, MemoryHistory, PageId, RevealKey,
    Router, SectionState, Transition,
};

fn router_with_slots(slots: usize) -> Router<SectionState, MemoryHistory> {
    let view = SectionState::new().with_reveal_slots(PageId::ALL.map(|p| (p, slots)));
    let mut router = Router::new(view, MemoryHistory::new());
    let _ = router.initialize();
    router
}

// ============================================================================
// History Traversal
// ============================================================================

/// After going back, navigating to the page we came from must work again
#[test]
fn test_navigate_after_back_to_previous_page() {
    let mut router = router_with_slots(0);
    let _ = router.navigate("projects");
    let _ = router.navigate("contact");

    let entry = router.history_mut().back();
    let _ = router.restore_from_history(entry.as_ref());
    assert_eq!(router.current(), PageId::Projects);

    let transition = router.navigate("contact");
    assert!(transition.is_moved());
    assert_eq!(router.view().visible_sections(), vec![PageId::Contact]);
    // The forward entry is replaced by the new push
    assert_eq!(router.history().len(), 3);
}

#[test]
fn test_back_past_initial_entry_is_unavailable() {
    let mut router = router_with_slots(0);
    assert!(router.history_mut().back().is_none());
    assert_eq!(router.current(), PageId::Home);
}

#[test]
fn test_restore_entry_with_unrecorded_page() {
    let mut router = router_with_slots(0);
    let _ = router.navigate("about");

    let entry = HistoryEntry {
        page: None,
        fragment: "#somewhere".to_string(),
    };
    let _ = router.restore_from_history(Some(&entry));
    assert_eq!(router.current(), PageId::Home);
    assert_eq!(router.view().highlighted(), Some(PageId::Home));
    assert_eq!(router.history().len(), 2);
}

#[test]
fn test_restore_closes_menu() {
    let mut router = router_with_slots(0);
    let _ = router.navigate("cv");
    router.toggle_menu();

    let entry = router.history_mut().back();
    let _ = router.restore_from_history(entry.as_ref());
    assert!(!router.menu_open());
}

// ============================================================================
// Initial Fragment
// ============================================================================

#[test]
fn test_default_policy_overwrites_fragment() {
    let mut router = Router::new(SectionState::new(), MemoryHistory::new());
    let _ = router.initialize_from(Some("#contact"), InitialPage::Default);
    assert_eq!(router.current(), PageId::Home);
    assert_eq!(
        router.history().current(),
        Some(&HistoryEntry::for_page(PageId::Home))
    );
}

#[test]
fn test_fragment_policy_without_fragment() {
    let mut router = Router::new(SectionState::new(), MemoryHistory::new());
    let _ = router.initialize_from(None, InitialPage::Fragment);
    assert_eq!(router.current(), PageId::Home);
}

/// Starting on a fragment page, going home and stepping both work from there
#[test]
fn test_fragment_policy_with_fragment() {
    let mut router = Router::new(SectionState::new(), MemoryHistory::new());
    let _ = router.initialize_from(Some("#cv"), InitialPage::Fragment);
    assert_eq!(router.current(), PageId::Cv);
    assert_eq!(router.view().visible_sections(), vec![PageId::Cv]);
    assert_eq!(router.history().len(), 1);

    let transition = router.step(Direction::Previous);
    assert_eq!(
        transition,
        Transition::Moved {
            from: PageId::Cv,
            to: PageId::Projects,
            reveals: Vec::new(),
        }
    );

    assert!(router.navigate("home").is_moved());
    assert_eq!(router.view().visible_sections(), vec![PageId::Home]);
    assert_eq!(router.history().len(), 3);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_walk_whole_order_with_keyboard() {
    let mut router = router_with_slots(0);
    let next = KeyChord::new(true, "ArrowRight");

    for expected in PageId::ALL.iter().skip(1) {
        assert!(router.handle_key(&next).is_some_and(|t| t.is_moved()));
        assert_eq!(router.current(), *expected);
    }

    assert_eq!(
        router.handle_key(&next),
        Some(Transition::Ignored(Ignored::AtBoundary(Direction::Next)))
    );
    assert_eq!(router.history().len(), PageId::ALL.len());
}

// ============================================================================
// Reveal Timers
// ============================================================================

/// A burst of navigations leaves only the last page's tickets live
#[test]
fn test_rapid_navigation_drops_stale_reveals() {
    let mut router = router_with_slots(3);
    let mut all_tickets = Vec::new();
    for target in ["about", "projects", "cv", "about"] {
        all_tickets.extend(router.navigate(target).into_reveals());
    }

    let applied: Vec<_> = all_tickets
        .iter()
        .filter(|ticket| router.complete_reveal(ticket))
        .map(|ticket| ticket.key)
        .collect();

    assert_eq!(
        applied,
        (0..3).map(|i| RevealKey::new(PageId::About, i)).collect::<Vec<_>>()
    );
    assert!(!router.view().is_revealed(RevealKey::new(PageId::Projects, 0)));
    assert!(!router.view().is_revealed(RevealKey::new(PageId::Cv, 0)));
}

#[test]
fn test_reveals_replay_when_section_returns() {
    let mut router = router_with_slots(1);
    let first = router.navigate("about").into_reveals();
    assert!(router.complete_reveal(&first[0]));
    assert!(router.view().is_revealed(RevealKey::new(PageId::About, 0)));

    let _ = router.navigate("home");
    assert!(!router.view().is_revealed(RevealKey::new(PageId::About, 0)));

    let second = router.navigate("about").into_reveals();
    assert_eq!(second.len(), 1);
    assert!(router.complete_reveal(&second[0]));
}

#[test]
fn test_ignored_navigation_schedules_nothing() {
    let mut router = router_with_slots(2);
    assert!(router.navigate("home").into_reveals().is_empty());
    assert!(router.navigate("HOME").into_reveals().is_empty());
}
