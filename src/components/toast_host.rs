//! Toast Host Component
//!
//! Renders the toast queue in the top-right corner. Phases map to classes:
//! entering toasts sit off-screen, shown ones slide in, leaving ones slide
//! back out before removal.

use dioxus::prelude::*;
use folio_core::ToastPhase;

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items: Vec<_> = toasts
        .read()
        .iter()
        .map(|toast| {
            let class = format!("notification {} {}", toast.kind.class(), phase_class(toast.phase));
            (toast.clone(), class)
        })
        .collect();

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for (toast, class) in items {
                div {
                    key: "{toast.id}",
                    class: "{class}",
                    i { class: "fas fa-{toast.kind.icon()}" }
                    span { class: "notification-message", "{toast.message}" }
                }
            }
        }
    }
}

fn phase_class(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Entering => "entering",
        ToastPhase::Shown => "shown",
        ToastPhase::Leaving => "leaving",
    }
}
