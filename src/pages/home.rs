//! Home page: hero with particle backdrop and calls to action.

use dioxus::prelude::*;
use folio_core::PageId;
use folio_ui::{Button, ButtonVariant};

use super::PageSection;
use crate::components::{ParticleField, Reveal};
use crate::context::{go_to, use_hero_shift, use_router, use_site_config};

pub(super) const REVEAL_SLOTS: usize = 3;

#[component]
pub fn Home() -> Element {
    let router = use_router();
    let config = use_site_config();
    let shift = use_hero_shift();

    let hero_style = format!("transform: translateY({:.1}px);", shift().0);
    let page = PageId::Home;

    rsx! {
        PageSection { page,
            div { class: "hero", style: "{hero_style}",
                ParticleField {}

                Reveal { page, index: 0,
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "highlight", "{config.profile.name}" }
                    }
                }
                Reveal { page, index: 1,
                    p { class: "hero-subtitle", "{config.profile.title}" }
                    p { class: "hero-tagline", "{config.content.tagline}" }
                }
                Reveal { page, index: 2,
                    div { class: "hero-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| go_to(router, PageId::Projects),
                            "View My Work"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| go_to(router, PageId::Contact),
                            "Get In Touch"
                        }
                    }
                }
            }
        }
    }
}
