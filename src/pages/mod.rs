//! Page sections for Folio.
//!
//! Every page renders a `section` whose id is its `PageId`. All five are
//! always in the DOM; the router decides which one carries `active`.

mod about;
mod contact;
mod cv;
mod home;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use cv::Cv;
pub use home::Home;
pub use projects::Projects;

use dioxus::prelude::*;
use folio_core::{PageId, SiteConfig};

use crate::context::use_router;

/// Number of `Reveal` children each page renders.
pub fn reveal_slots(config: &SiteConfig) -> [(PageId, usize); 5] {
    [
        (PageId::Home, home::REVEAL_SLOTS),
        (PageId::About, about::REVEAL_SLOTS),
        (PageId::Projects, projects::reveal_slots(config.content.projects.len())),
        (PageId::Cv, cv::REVEAL_SLOTS),
        (PageId::Contact, contact::REVEAL_SLOTS),
    ]
}

/// Section container shared by all pages.
#[component]
fn PageSection(page: PageId, children: Element) -> Element {
    let router = use_router();
    let active = router.read().view().is_visible(page);

    rsx! {
        section {
            id: "{page}",
            class: if active { "page active" } else { "page" },
            "aria-hidden": if active { "false" } else { "true" },
            div { class: "container", {children} }
        }
    }
}
