//! Timeline Item Component
//!
//! One row of the CV timeline (experience or education).

use dioxus::prelude::*;
use folio_core::TimelineEntry;

/// Which timeline a row belongs to; selects the marker icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimelineKind {
    Experience,
    Education,
}

impl TimelineKind {
    pub fn icon(&self) -> &'static str {
        match self {
            TimelineKind::Experience => "briefcase",
            TimelineKind::Education => "graduation-cap",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TimelineItemProps {
    pub entry: TimelineEntry,
    pub kind: TimelineKind,
}

#[component]
pub fn TimelineItem(props: TimelineItemProps) -> Element {
    let entry = &props.entry;

    rsx! {
        div { class: "timeline-item",
            span { class: "timeline-marker",
                i { class: "fas fa-{props.kind.icon()}" }
            }
            div { class: "timeline-body",
                span { class: "timeline-period", "{entry.period}" }
                h4 { class: "timeline-role", "{entry.role}" }
                span { class: "timeline-place", "{entry.place}" }
                if !entry.summary.is_empty() {
                    p { class: "timeline-summary", "{entry.summary}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_icons() {
        assert_eq!(TimelineKind::Experience.icon(), "briefcase");
        assert_eq!(TimelineKind::Education.icon(), "graduation-cap");
    }
}
