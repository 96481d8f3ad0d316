//! Skill Badge Component

use dioxus::prelude::*;

#[component]
pub fn SkillBadge(label: String) -> Element {
    rsx! {
        span { class: "skill-badge", "{label}" }
    }
}

/// Wrapping row of skill badges
#[component]
pub fn SkillList(skills: Vec<String>) -> Element {
    rsx! {
        div { class: "skill-list",
            for skill in skills {
                SkillBadge { key: "{skill}", label: skill.clone() }
            }
        }
    }
}
