//! Contact page: form and direct contact details.

use dioxus::prelude::*;
use folio_core::PageId;

use super::PageSection;
use crate::components::{ContactFormView, Reveal};
use crate::context::use_site_config;

pub(super) const REVEAL_SLOTS: usize = 3;

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let profile = &config.profile;
    let page = PageId::Contact;

    let mailto = format!("mailto:{}", profile.email);
    let tel = format!("tel:{}", profile.phone.replace(' ', ""));

    rsx! {
        PageSection { page,
            Reveal { page, index: 0,
                h2 { class: "section-title", "Get In Touch" }
            }
            div { class: "contact-layout",
                Reveal { page, index: 1,
                    ul { class: "contact-details",
                        li {
                            i { class: "fas fa-envelope" }
                            a { href: "{mailto}", "{profile.email}" }
                        }
                        li {
                            i { class: "fas fa-phone" }
                            a { href: "{tel}", "{profile.phone}" }
                        }
                        li {
                            i { class: "fas fa-map-marker-alt" }
                            span { "{profile.address.locality}, {profile.address.country}" }
                        }
                    }
                }
                Reveal { page, index: 2,
                    ContactFormView {}
                }
            }
        }
    }
}
