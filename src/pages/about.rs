//! About page: biography paragraphs and skills.

use dioxus::prelude::*;
use folio_core::PageId;
use folio_ui::SkillList;

use super::PageSection;
use crate::components::Reveal;
use crate::context::use_site_config;

pub(super) const REVEAL_SLOTS: usize = 3;

#[component]
pub fn About() -> Element {
    let config = use_site_config();
    let content = &config.content;
    let page = PageId::About;

    rsx! {
        PageSection { page,
            Reveal { page, index: 0,
                h2 { class: "section-title", "About Me" }
            }
            Reveal { page, index: 1,
                div { class: "about-text",
                    for (i, paragraph) in content.about.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
            }
            Reveal { page, index: 2,
                h3 { "Skills" }
                SkillList { skills: content.skills.clone() }
            }
        }
    }
}
