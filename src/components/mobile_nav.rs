//! Mobile Menu Component
//!
//! Slide-down link panel for narrow screens (< 768px), opened by the
//! toggle in `NavHeader`. Navigating from it closes it again.

use dioxus::prelude::*;
use folio_core::PageId;

use crate::context::{go_to, use_router};

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Whether the panel is expanded
    pub open: bool,
    /// Highlighted page
    pub current: Option<PageId>,
}

#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    let mut router = use_router();
    let hidden = !props.open;

    rsx! {
        nav {
            id: "nav-menu",
            class: if props.open { "mobile-menu active" } else { "mobile-menu" },
            "aria-hidden": "{hidden}",

            for page in PageId::ALL {
                a {
                    key: "{page}",
                    class: if props.current == Some(page) { "mobile-menu-item active" } else { "mobile-menu-item" },
                    href: "{page.fragment()}",
                    onclick: move |e| {
                        e.prevent_default();
                        go_to(router, page);
                    },
                    "{page.display_name()}"
                }
            }

            // Tapping outside the links closes the panel
            if props.open {
                div {
                    class: "mobile-menu-backdrop",
                    onclick: move |_| router.write().close_menu(),
                }
            }
        }
    }
}
