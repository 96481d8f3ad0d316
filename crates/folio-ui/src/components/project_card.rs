//! Project Card Component
//!
//! Card for one entry on the projects page: title, description, tag pills
//! and an optional outbound link.

use dioxus::prelude::*;
use folio_core::Project;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Extra classes, e.g. the reveal state from the page
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = &props.project;
    let class = match props.class.as_deref() {
        Some(extra) => format!("project-card {extra}"),
        None => "project-card".to_string(),
    };

    rsx! {
        article { class: "{class}",
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }

            if !project.tags.is_empty() {
                ul { class: "project-tags",
                    for tag in project.tags.iter() {
                        li { key: "{tag}", class: "project-tag", "{tag}" }
                    }
                }
            }

            if let Some(link) = project.link.as_ref() {
                a {
                    class: "project-link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    i { class: "fas fa-external-link-alt" }
                    " View project"
                }
            }
        }
    }
}
