//! Reveal wrapper for animated section children.

use dioxus::prelude::*;
use folio_core::{PageId, RevealKey};

use crate::context::use_router;

/// Wraps one marked child of a page section.
///
/// `index` must be below the slot count the page declares in
/// `pages::reveal_slots`, otherwise the child never becomes visible.
#[component]
pub fn Reveal(page: PageId, index: usize, children: Element) -> Element {
    let router = use_router();
    let revealed = router.read().view().is_revealed(RevealKey::new(page, index));

    rsx! {
        div {
            class: if revealed { "fade-in visible" } else { "fade-in" },
            {children}
        }
    }
}
