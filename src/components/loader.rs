//! Loading overlay shown until the first paint settles.

use dioxus::prelude::*;

#[component]
pub fn Loader(hidden: bool) -> Element {
    rsx! {
        div {
            id: "loader",
            class: if hidden { "loader hidden" } else { "loader" },
            div { class: "loader-spinner" }
        }
    }
}
