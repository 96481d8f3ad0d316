//! Page router.
//!
//! Keeps three views of "current page" consistent: the in-memory state, the
//! visible section in the [`PageView`], and the [`History`] stack / URL
//! fragment.
//!
//! ## State machine
//!
//! ```text
//!   states:      one per PageId, initial = Home, no terminal state
//!   transitions: navigate / step  -> push history
//!                restore          -> never pushes
//!   rejected:    unknown target, already active, step past either end
//!                (all silent: nothing in the view or history changes)
//! ```

use serde::{Deserialize, Serialize};

use crate::history::{History, HistoryEntry};
use crate::keyboard::{Direction, KeyChord};
use crate::page::PageId;
use crate::reveal::{RevealScheduler, RevealTicket};
use crate::view::PageView;

/// How the first page is chosen on startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialPage {
    /// Always start on the default page and overwrite the fragment.
    #[default]
    Default,
    /// Start on the page named by the URL fragment when it is recognized.
    Fragment,
}

/// Why a transition was not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ignored {
    UnknownTarget(String),
    AlreadyActive(PageId),
    AtBoundary(Direction),
}

/// Result of a navigation request.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved {
        from: PageId,
        to: PageId,
        /// Reveals for the newly shown section; the host runs the timers.
        reveals: Vec<RevealTicket>,
    },
    Ignored(Ignored),
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    /// Reveal tickets to schedule, empty when nothing moved.
    pub fn into_reveals(self) -> Vec<RevealTicket> {
        match self {
            Transition::Moved { reveals, .. } => reveals,
            Transition::Ignored(_) => Vec::new(),
        }
    }
}

/// Owns the current page and drives a view and a history stack.
#[derive(Debug)]
pub struct Router<V, H> {
    current: PageId,
    view: V,
    history: H,
    reveals: RevealScheduler,
}

impl<V: PageView, H: History> Router<V, H> {
    pub fn new(view: V, history: H) -> Self {
        Self {
            current: PageId::default(),
            view,
            history,
            reveals: RevealScheduler::default(),
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Show the default page and replace (never push) the current entry.
    pub fn initialize(&mut self) -> Vec<RevealTicket> {
        self.start_on(PageId::default())
    }

    /// Like [`Router::initialize`], optionally honoring a URL fragment.
    pub fn initialize_from(&mut self, fragment: Option<&str>, policy: InitialPage) -> Vec<RevealTicket> {
        let page = match policy {
            InitialPage::Default => PageId::default(),
            InitialPage::Fragment => fragment.and_then(PageId::from_fragment).unwrap_or_default(),
        };
        self.start_on(page)
    }

    fn start_on(&mut self, page: PageId) -> Vec<RevealTicket> {
        tracing::info!(page = %page, "Router initialized");
        self.history.replace(HistoryEntry::for_page(page));
        let reveals = self.show(page);
        self.current = page;
        reveals
    }

    /// Navigate by page name. Unknown names are ignored.
    pub fn navigate(&mut self, target: &str) -> Transition {
        match target.parse::<PageId>() {
            Ok(page) => self.navigate_to(page),
            Err(_) => {
                tracing::debug!(name = target, "Ignoring navigation to unknown page");
                Transition::Ignored(Ignored::UnknownTarget(target.to_string()))
            }
        }
    }

    pub fn navigate_to(&mut self, target: PageId) -> Transition {
        if target == self.current {
            tracing::debug!(page = %target, "Already on page");
            return Transition::Ignored(Ignored::AlreadyActive(target));
        }

        let from = self.current;
        let reveals = self.show(target);
        self.history.push(HistoryEntry::for_page(target));
        self.current = target;
        self.view.set_menu_open(false);

        tracing::debug!(from = %from, to = %target, "Navigated");
        Transition::Moved {
            from,
            to: target,
            reveals,
        }
    }

    /// Apply a back/forward traversal. Never pushes a history entry.
    pub fn restore_from_history(&mut self, entry: Option<&HistoryEntry>) -> Vec<RevealTicket> {
        let page = entry.map(HistoryEntry::page_or_default).unwrap_or_default();
        tracing::debug!(from = %self.current, to = %page, "Restoring from history");

        let reveals = self.show(page);
        self.current = page;
        self.view.set_menu_open(false);
        reveals
    }

    /// Move one page along the fixed order.
    pub fn step(&mut self, direction: Direction) -> Transition {
        match self.step_target(direction) {
            Some(page) => self.navigate_to(page),
            None => Transition::Ignored(Ignored::AtBoundary(direction)),
        }
    }

    /// Whether [`Router::step`] in `direction` would move.
    pub fn can_step(&self, direction: Direction) -> bool {
        self.step_target(direction).is_some()
    }

    fn step_target(&self, direction: Direction) -> Option<PageId> {
        match direction {
            Direction::Previous => self.current.previous(),
            Direction::Next => self.current.next(),
        }
    }

    /// Handle a key press; `None` when the chord is not a shortcut.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Option<Transition> {
        chord.direction().map(|direction| self.step(direction))
    }

    pub fn menu_open(&self) -> bool {
        self.view.is_menu_open()
    }

    /// Toggle the mobile menu, returning whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        let open = !self.view.is_menu_open();
        self.view.set_menu_open(open);
        open
    }

    pub fn close_menu(&mut self) {
        self.view.set_menu_open(false);
    }

    /// Apply a reveal whose timer has elapsed, if it is still live.
    pub fn complete_reveal(&mut self, ticket: &RevealTicket) -> bool {
        if self.reveals.complete(ticket) {
            self.view.reveal(ticket.key);
            true
        } else {
            false
        }
    }

    /// Hide every other section, show `page`, highlight its link and
    /// schedule its reveals.
    fn show(&mut self, page: PageId) -> Vec<RevealTicket> {
        for other in PageId::ALL.into_iter().filter(|p| *p != page) {
            self.view.deactivate_section(other);
            self.reveals.cancel_page(other);
        }
        self.view.activate_section(page);
        self.view.highlight_link(page);

        let slots = self.view.reveal_slots(page);
        self.reveals.schedule(page, slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::reveal::RevealKey;
    use crate::view::SectionState;

    fn router() -> Router<SectionState, MemoryHistory> {
        let view = SectionState::new().with_reveal_slots(PageId::ALL.map(|p| (p, 2)));
        let mut router = Router::new(view, MemoryHistory::new());
        let _ = router.initialize();
        router
    }

    #[test]
    fn initialize_replaces_instead_of_pushing() {
        let router = router();
        assert_eq!(router.current(), PageId::Home);
        assert_eq!(router.history().len(), 1);
        assert_eq!(router.history().current().unwrap().fragment, "#home");
        assert_eq!(router.view().visible_sections(), vec![PageId::Home]);
        assert_eq!(router.view().highlighted(), Some(PageId::Home));
    }

    #[test]
    fn initialize_from_respects_policy() {
        let mut default = Router::new(SectionState::new(), MemoryHistory::new());
        let _ = default.initialize_from(Some("#cv"), InitialPage::Default);
        assert_eq!(default.current(), PageId::Home);
        assert_eq!(default.history().current().unwrap().fragment, "#home");

        let mut honoring = Router::new(SectionState::new(), MemoryHistory::new());
        let _ = honoring.initialize_from(Some("#cv"), InitialPage::Fragment);
        assert_eq!(honoring.current(), PageId::Cv);
        assert_eq!(honoring.history().len(), 1);

        let mut bogus = Router::new(SectionState::new(), MemoryHistory::new());
        let _ = bogus.initialize_from(Some("#blog"), InitialPage::Fragment);
        assert_eq!(bogus.current(), PageId::Home);
    }

    #[test]
    fn fragment_start_page_is_the_current_page() {
        let mut router = Router::new(SectionState::new(), MemoryHistory::new());
        let _ = router.initialize_from(Some("#cv"), InitialPage::Fragment);
        assert_eq!(router.view().visible_sections(), vec![PageId::Cv]);
        assert_eq!(router.current(), PageId::Cv);

        assert!(router.navigate("home").is_moved());
        assert_eq!(router.view().visible_sections(), vec![PageId::Home]);

        let _ = router.initialize_from(Some("#contact"), InitialPage::Fragment);
        assert_eq!(
            router.step(Direction::Next),
            Transition::Ignored(Ignored::AtBoundary(Direction::Next))
        );
        assert_eq!(router.current(), PageId::Contact);
    }

    #[test]
    fn can_step_matches_step() {
        let mut router = router();
        assert!(!router.can_step(Direction::Previous));
        assert!(router.can_step(Direction::Next));

        let _ = router.navigate_to(PageId::Contact);
        assert!(router.can_step(Direction::Previous));
        assert!(!router.can_step(Direction::Next));
        assert!(!router.step(Direction::Next).is_moved());

        let _ = router.navigate_to(PageId::Cv);
        assert!(router.can_step(Direction::Previous) && router.can_step(Direction::Next));
    }

    #[test]
    fn navigate_updates_everything() {
        let mut router = router();
        router.toggle_menu();

        let transition = router.navigate("projects");
        assert!(transition.is_moved());
        assert_eq!(router.current(), PageId::Projects);
        assert_eq!(router.view().visible_sections(), vec![PageId::Projects]);
        assert_eq!(router.view().highlighted(), Some(PageId::Projects));
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.history().current().unwrap().fragment, "#projects");
        assert!(!router.menu_open());
    }

    #[test]
    fn repeat_and_unknown_targets_are_ignored() {
        let mut router = router();
        let _ = router.navigate("about");

        assert_eq!(
            router.navigate("about"),
            Transition::Ignored(Ignored::AlreadyActive(PageId::About))
        );
        assert_eq!(
            router.navigate("blog"),
            Transition::Ignored(Ignored::UnknownTarget("blog".to_string()))
        );
        assert_eq!(router.current(), PageId::About);
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn back_restores_without_pushing() {
        let mut router = router();
        let _ = router.navigate("projects");
        let _ = router.navigate("contact");
        assert_eq!(router.history().len(), 3);

        let entry = router.history_mut().back();
        let _ = router.restore_from_history(entry.as_ref());

        assert_eq!(router.current(), PageId::Projects);
        assert_eq!(router.view().visible_sections(), vec![PageId::Projects]);
        assert_eq!(router.view().highlighted(), Some(PageId::Projects));
        assert_eq!(router.history().len(), 3);
    }

    #[test]
    fn restore_without_state_falls_back_to_home() {
        let mut router = router();
        let _ = router.navigate("cv");
        let _ = router.restore_from_history(None);
        assert_eq!(router.current(), PageId::Home);
        assert_eq!(router.view().visible_sections(), vec![PageId::Home]);
    }

    #[test]
    fn step_stops_at_boundaries() {
        let mut router = router();
        assert_eq!(
            router.step(Direction::Previous),
            Transition::Ignored(Ignored::AtBoundary(Direction::Previous))
        );
        assert!(router.step(Direction::Next).is_moved());
        assert_eq!(router.current(), PageId::About);
    }

    #[test]
    fn handle_key_ignores_non_shortcuts() {
        let mut router = router();
        assert!(router.handle_key(&KeyChord::new(false, "ArrowRight")).is_none());
        assert!(router
            .handle_key(&KeyChord::new(true, "ArrowRight"))
            .is_some_and(|t| t.is_moved()));
        assert_eq!(router.current(), PageId::About);
    }

    #[test]
    fn stale_reveal_is_dropped_after_section_hides() {
        let mut router = router();
        let reveals = router.navigate("about").into_reveals();
        assert_eq!(reveals.len(), 2);

        let _ = router.navigate("cv");
        assert!(!router.complete_reveal(&reveals[0]));
        assert!(!router.view().is_revealed(RevealKey::new(PageId::About, 0)));
    }

    #[test]
    fn live_reveal_is_applied() {
        let mut router = router();
        let reveals = router.navigate("contact").into_reveals();
        for ticket in &reveals {
            assert!(router.complete_reveal(ticket));
        }
        assert!(router.view().is_revealed(RevealKey::new(PageId::Contact, 1)));
    }

    #[test]
    fn toggle_menu_flips() {
        let mut router = router();
        assert!(router.toggle_menu());
        assert!(!router.toggle_menu());
        router.toggle_menu();
        router.close_menu();
        assert!(!router.menu_open());
    }
}
