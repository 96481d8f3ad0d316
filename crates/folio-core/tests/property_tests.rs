//! Property-based tests for the page router
//!
//! Uses proptest to check that the router's three views of the current page
//! (state, visible section, history) never drift apart.

use folio_core::{
    ContactCard, Direction, InitialPage, MemoryHistory, PageId, Profile, Router, SectionState,
    Transition,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn page_strategy() -> impl Strategy<Value = PageId> {
    prop::sample::select(PageId::ALL.to_vec())
}

/// Strings that are never a page id
fn unknown_target_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z#/ ]{0,12}")
        .expect("valid regex")
        .prop_filter("not a page id", |s| s.parse::<PageId>().is_err())
}

/// Fragment the site may be opened with: a page, junk, or nothing
fn start_fragment_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => page_strategy().prop_map(|p| Some(p.fragment())),
        1 => unknown_target_strategy().prop_map(|s| Some(format!("#{s}"))),
        1 => Just(None),
    ]
}

fn policy_strategy() -> impl Strategy<Value = InitialPage> {
    prop_oneof![Just(InitialPage::Default), Just(InitialPage::Fragment)]
}

/// Inputs a user can produce
#[derive(Debug, Clone)]
enum Input {
    Navigate(PageId),
    NavigateUnknown(String),
    Step(Direction),
    Back,
    Forward,
    ToggleMenu,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => page_strategy().prop_map(Input::Navigate),
        1 => unknown_target_strategy().prop_map(Input::NavigateUnknown),
        1 => prop_oneof![Just(Direction::Previous), Just(Direction::Next)].prop_map(Input::Step),
        2 => Just(Input::Back),
        1 => Just(Input::Forward),
        1 => Just(Input::ToggleMenu),
    ]
}

fn unstarted_router() -> Router<SectionState, MemoryHistory> {
    let view = SectionState::new().with_reveal_slots(PageId::ALL.map(|p| (p, 3)));
    Router::new(view, MemoryHistory::new())
}

fn fresh_router() -> Router<SectionState, MemoryHistory> {
    let mut router = unstarted_router();
    let _ = router.initialize();
    router
}

fn assert_consistent(router: &Router<SectionState, MemoryHistory>) -> Result<(), TestCaseError> {
    let current = router.current();
    prop_assert_eq!(router.view().visible_sections(), vec![current]);
    prop_assert_eq!(router.view().highlighted(), Some(current));
    prop_assert_eq!(
        router.history().current().map(|e| e.page_or_default()),
        Some(current)
    );
    Ok(())
}

fn apply(router: &mut Router<SectionState, MemoryHistory>, input: &Input) {
    match input {
        Input::Navigate(page) => {
            let _ = router.navigate_to(*page);
        }
        Input::NavigateUnknown(name) => {
            let _ = router.navigate(name);
        }
        Input::Step(direction) => {
            let _ = router.step(*direction);
        }
        Input::Back => {
            let entry = router.history_mut().back();
            if entry.is_some() {
                let _ = router.restore_from_history(entry.as_ref());
            }
        }
        Input::Forward => {
            let entry = router.history_mut().forward();
            if entry.is_some() {
                let _ = router.restore_from_history(entry.as_ref());
            }
        }
        Input::ToggleMenu => {
            router.toggle_menu();
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Navigating to the active page again changes nothing
    #[test]
    fn repeat_navigation_is_idempotent(page in page_strategy()) {
        let mut router = fresh_router();
        let _ = router.navigate_to(page);
        let len = router.history().len();
        let view = router.view().clone();

        let second = router.navigate_to(page);
        prop_assert!(!second.is_moved());
        prop_assert_eq!(router.current(), page);
        prop_assert_eq!(router.history().len(), len);
        prop_assert_eq!(router.view(), &view);
    }

    /// Unknown targets leave state, view and history untouched
    #[test]
    fn unknown_targets_are_no_ops(
        start in page_strategy(),
        target in unknown_target_strategy(),
    ) {
        let mut router = fresh_router();
        let _ = router.navigate_to(start);
        let len = router.history().len();
        let view = router.view().clone();

        let transition = router.navigate(&target);
        prop_assert!(!transition.is_moved());
        prop_assert_eq!(router.current(), start);
        prop_assert_eq!(router.history().len(), len);
        prop_assert_eq!(router.view(), &view);
    }

    /// From any starting fragment and policy, and after any input sequence,
    /// exactly one section is visible, it is the current page, and it
    /// matches the highlighted link and history entry
    #[test]
    fn views_stay_consistent(
        fragment in start_fragment_strategy(),
        policy in policy_strategy(),
        inputs in prop::collection::vec(input_strategy(), 0..60),
    ) {
        let mut router = unstarted_router();
        let _ = router.initialize_from(fragment.as_deref(), policy);
        assert_consistent(&router)?;

        if policy == InitialPage::Default {
            prop_assert_eq!(router.current(), PageId::Home);
        } else if let Some(page) = fragment.as_deref().and_then(PageId::from_fragment) {
            prop_assert_eq!(router.current(), page);
        }

        for input in &inputs {
            apply(&mut router, input);
            assert_consistent(&router)?;
        }
    }

    /// "Next" advances exactly one position except on the last page
    #[test]
    fn next_advances_by_one(page in page_strategy()) {
        let mut router = fresh_router();
        let _ = router.navigate_to(page);

        let transition = router.step(Direction::Next);
        match page.next() {
            Some(expected) => {
                prop_assert!(transition.is_moved());
                prop_assert_eq!(router.current(), expected);
                prop_assert_eq!(router.current().index(), page.index() + 1);
            }
            None => {
                prop_assert!(matches!(transition, Transition::Ignored(_)));
                prop_assert_eq!(router.current(), PageId::Contact);
            }
        }
    }

    /// Contact cards carry the profile fields regardless of where the
    /// router is
    #[test]
    fn contact_card_is_independent_of_navigation(
        inputs in prop::collection::vec(input_strategy(), 0..20),
        name in "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}",
        phone in "\\+[0-9]{3} [0-9]{3} [0-9]{3} [0-9]{3}",
    ) {
        let profile = Profile { name: name.clone(), phone: phone.clone(), ..Profile::default() };
        let before = ContactCard::from_profile(&profile).render();

        let mut router = fresh_router();
        for input in &inputs {
            apply(&mut router, input);
        }
        let after = ContactCard::from_profile(&profile).render();

        prop_assert_eq!(&before, &after);
        prop_assert!(after.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        prop_assert!(after.ends_with("\nEND:VCARD"));
        let fn_line = format!("FN:{}", name);
        let tel_line = format!("TEL:{}", phone);
        prop_assert!(after.lines().any(|l| l == fn_line));
        prop_assert!(after.lines().any(|l| l == tel_line));
        prop_assert!(after.lines().any(|l| l == "ORG:Freelance Developer"));
        prop_assert!(after.lines().any(|l| l == "TITLE:Front-end Developer"));
    }
}
