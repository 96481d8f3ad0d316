//! Navigation Header Component
//!
//! Desktop: brand, page links, theme toggle
//! Mobile: brand, menu toggle; links move into `MobileMenu`

use dioxus::prelude::*;
use folio_core::{Direction, PageId, Theme, ToastKind};
use folio_ui::IconButton;

use crate::components::mobile_nav::MobileMenu;
use crate::context::{go_to, notify, use_router, use_site_config, use_theme, use_toasts};

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Page scrolled past the navbar threshold
    pub scrolled: bool,
}

/// Fixed top navigation bar.
///
/// Link highlight and menu state both come from the router's view, so they
/// always agree with the visible section.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut router = use_router();
    let mut theme = use_theme();
    let toasts = use_toasts();
    let config = use_site_config();

    let highlighted = router.read().view().highlighted();
    let menu_open = router.read().menu_open();
    let can_prev = router.read().can_step(Direction::Previous);
    let can_next = router.read().can_step(Direction::Next);

    let toggle_theme = move |_| {
        let result = theme.write().toggle();
        if let Err(e) = result {
            tracing::warn!("Could not save theme: {}", e);
            notify(toasts, "Theme could not be saved", ToastKind::Error);
        }
    };

    let home_href = PageId::Home.fragment();
    let theme_icon = match theme.read().theme() {
        Theme::Dark => "sun",
        Theme::Light => "moon",
    };

    rsx! {
        header {
            id: "navbar",
            class: if props.scrolled { "navbar scrolled" } else { "navbar" },
            "data-can-prev": "{can_prev}",
            "data-can-next": "{can_next}",

            div { class: "nav-container",
                a {
                    class: "nav-brand",
                    href: "{home_href}",
                    onclick: move |e| {
                        e.prevent_default();
                        go_to(router, PageId::Home);
                    },
                    "{config.profile.name}"
                }

                nav { class: "nav-links",
                    for page in PageId::ALL {
                        a {
                            key: "{page}",
                            class: if highlighted == Some(page) { "nav-link active" } else { "nav-link" },
                            href: "{page.fragment()}",
                            "data-page": "{page}",
                            onclick: move |e| {
                                e.prevent_default();
                                go_to(router, page);
                            },
                            "{page.display_name()}"
                        }
                    }
                }

                div { class: "nav-actions",
                    IconButton {
                        icon: theme_icon.to_string(),
                        aria_label: "Toggle theme".to_string(),
                        class: "theme-toggle".to_string(),
                        onclick: toggle_theme,
                    }
                    IconButton {
                        icon: if menu_open { "times".to_string() } else { "bars".to_string() },
                        aria_label: "Toggle menu".to_string(),
                        class: "mobile-menu-toggle".to_string(),
                        onclick: move |_| {
                            router.write().toggle_menu();
                        },
                    }
                }
            }
        }

        MobileMenu { open: menu_open, current: highlighted }
    }
}
