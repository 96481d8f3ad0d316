//! CV page: downloads, experience and education timelines.

use dioxus::prelude::*;
use folio_core::PageId;
use folio_ui::{TimelineItem, TimelineKind};

use super::PageSection;
use crate::components::{DownloadPanel, Reveal};
use crate::context::use_site_config;

pub(super) const REVEAL_SLOTS: usize = 4;

#[component]
pub fn Cv() -> Element {
    let config = use_site_config();
    let content = &config.content;
    let page = PageId::Cv;

    rsx! {
        PageSection { page,
            Reveal { page, index: 0,
                h2 { class: "section-title", "Curriculum Vitae" }
            }
            Reveal { page, index: 1,
                DownloadPanel {}
            }
            Reveal { page, index: 2,
                div { class: "timeline",
                    h3 { "Experience" }
                    for (i, entry) in content.experience.iter().enumerate() {
                        TimelineItem { key: "{i}", entry: entry.clone(), kind: TimelineKind::Experience }
                    }
                }
            }
            Reveal { page, index: 3,
                div { class: "timeline",
                    h3 { "Education" }
                    for (i, entry) in content.education.iter().enumerate() {
                        TimelineItem { key: "{i}", entry: entry.clone(), kind: TimelineKind::Education }
                    }
                }
            }
        }
    }
}
