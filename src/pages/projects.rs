//! Projects page: one revealed card per configured project.

use dioxus::prelude::*;
use folio_core::PageId;
use folio_ui::ProjectCard;

use super::PageSection;
use crate::components::Reveal;
use crate::context::use_site_config;

/// Heading plus one slot per card; an empty list still reserves a slot for
/// the placeholder.
pub(super) fn reveal_slots(projects: usize) -> usize {
    1 + projects.max(1)
}

#[component]
pub fn Projects() -> Element {
    let config = use_site_config();
    let projects = &config.content.projects;
    let page = PageId::Projects;

    rsx! {
        PageSection { page,
            Reveal { page, index: 0,
                h2 { class: "section-title", "Projects" }
            }
            if projects.is_empty() {
                Reveal { page, index: 1,
                    p { class: "empty-state", "Projects are on their way." }
                }
            } else {
                div { class: "projects-grid",
                    for (i, project) in projects.iter().enumerate() {
                        Reveal { key: "{i}", page, index: i + 1,
                            ProjectCard { project: project.clone() }
                        }
                    }
                }
            }
        }
    }
}
